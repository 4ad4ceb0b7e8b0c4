use super::aptos::AptosConfig;
use super::chains::{default_chains, ChainConfig};
use super::errors::ConfigError;
use super::gateway::{GatewayConfig, SigningProtocol};
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::signing::{SigningConfig, SIGNING_KEY_ENV};
use crate::chain::ChainRoute;
use crate::dns_name::GatewaySuffix;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "ens-apt-gateway.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub aptos: AptosConfig,

    #[serde(default = "default_chains")]
    pub chains: Vec<ChainConfig>,

    #[serde(default)]
    pub signing: SigningConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            gateway: GatewayConfig::default(),
            aptos: AptosConfig::default(),
            chains: default_chains(),
            signing: SigningConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// CLI overrides for configuration
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from file (explicit path, then the default file
    /// if present, then built-in defaults), apply CLI overrides and fall
    /// back to `SIGNING_KEY` for the key.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };

        config.apply_overrides(overrides);

        if config.signing.private_key.is_none() {
            config.signing.private_key = std::env::var(SIGNING_KEY_ENV)
                .ok()
                .filter(|k| !k.trim().is_empty());
        }

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chains.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[chains]] entry is required".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for chain in &self.chains {
            chain.validate().map_err(ConfigError::Validation)?;
            if !seen.insert(chain.key.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate chain key '{}'",
                    chain.key
                )));
            }
        }

        match self.aptos.resolver_module.split_once("::") {
            Some((addr, module)) if addr.starts_with("0x") && !module.is_empty() => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "resolver_module '{}' must look like 0x<address>::<module>",
                    self.aptos.resolver_module
                )))
            }
        }

        if self.aptos.view_timeout == 0 || self.aptos.indexer_timeout == 0 {
            return Err(ConfigError::Validation(
                "aptos timeouts must be greater than zero".to_string(),
            ));
        }

        self.gateway_suffix()?;

        if self.gateway.protocol != SigningProtocol::Raw && self.signing.private_key.is_none() {
            return Err(ConfigError::Validation(format!(
                "a signing key is required for protocol {:?}; set [signing] private_key or {}",
                self.gateway.protocol, SIGNING_KEY_ENV
            )));
        }

        Ok(())
    }

    pub fn gateway_suffix(&self) -> Result<GatewaySuffix, ConfigError> {
        GatewaySuffix::new(&self.gateway.suffix, &self.gateway.native_tld)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }

    pub fn chain_routes(&self) -> Vec<ChainRoute> {
        self.chains.iter().map(ChainConfig::to_route).collect()
    }
}
