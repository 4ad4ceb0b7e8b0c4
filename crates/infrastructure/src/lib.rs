//! Adapters for the Aptos fullnode, the Aptos names indexer and the
//! CCIP-Read response pipeline.

pub mod aptos;
pub mod ccip;
pub mod indexer;

pub use aptos::AptosViewClient;
pub use ccip::{CcipReadHandler, CcipReadRequest, ResponseSigner};
pub use indexer::GraphqlOwnershipIndex;
