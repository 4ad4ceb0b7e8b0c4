//! Configuration module for the gateway
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, loading and CLI overrides
//! - `server`: HTTP listener
//! - `gateway`: Gateway suffix and response signing protocol
//! - `aptos`: Resolver module and outbound call timeouts
//! - `chains`: Chain routing table
//! - `signing`: Signing key material
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod aptos;
pub mod chains;
pub mod errors;
pub mod gateway;
pub mod logging;
pub mod root;
pub mod server;
pub mod signing;

pub use aptos::AptosConfig;
pub use chains::ChainConfig;
pub use errors::ConfigError;
pub use gateway::{GatewayConfig, SigningProtocol};
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use signing::SigningConfig;
