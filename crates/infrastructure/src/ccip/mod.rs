//! CCIP-Read (EIP-3668) answers for ENSIP-10 wildcard lookups.

pub mod abi;
mod handler;
mod signer;

pub use handler::{CcipReadHandler, CcipReadRequest, APTOS_NATIVE_TARGET};
pub use signer::{signed_hash, ResponseSigner};
