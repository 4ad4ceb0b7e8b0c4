//! ENS ⇄ Aptos gateway domain layer
pub mod account;
pub mod chain;
pub mod config;
pub mod dns_name;
pub mod errors;
pub mod field;
pub mod field_codec;
pub mod ownership;

pub use account::AccountAddress;
pub use chain::{ChainKey, ChainRoute, ChainRouter};
pub use config::{CliOverrides, Config, ConfigError, SigningProtocol};
pub use dns_name::{DnsNode, GatewaySuffix, ParsedName};
pub use errors::DomainError;
pub use field::{FieldQuery, OnChainBytes, ResolvedValue, APTOS_COIN_TYPE, ETH_COIN_TYPE};
pub use field_codec::{AddrEncoding, AddrPayload};
pub use ownership::{AptosName, OwnershipRecord};
