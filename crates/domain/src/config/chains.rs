use crate::chain::{ChainKey, ChainRoute};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One row of the chain routing table
///
/// ```toml
/// [[chains]]
/// key = "m"
/// node_url = "https://api.mainnet.aptoslabs.com/v1"
/// indexer_url = "https://api.mainnet.aptoslabs.com/v1/graphql"
/// evm_resolver = "0x828ec5bDe537B8673AF98D77bCB275ae1CA26D1f"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChainConfig {
    pub key: String,
    pub node_url: String,
    pub indexer_url: String,
    pub evm_resolver: String,
}

impl ChainConfig {
    pub fn to_route(&self) -> ChainRoute {
        ChainRoute {
            key: ChainKey::new(self.key.as_str()),
            aptos_node_url: Arc::from(self.node_url.trim_end_matches('/')),
            indexer_url: Arc::from(self.indexer_url.as_str()),
            evm_resolver: Arc::from(self.evm_resolver.as_str()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.key.is_empty() || self.key.contains('/') {
            return Err(format!("chain key '{}' is not a valid path segment", self.key));
        }
        for (field, url) in [("node_url", &self.node_url), ("indexer_url", &self.indexer_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!(
                    "chain '{}': {} must start with http:// or https://",
                    self.key, field
                ));
            }
        }
        let digits = self.evm_resolver.strip_prefix("0x").unwrap_or("");
        if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(format!(
                "chain '{}': evm_resolver '{}' is not a 20-byte hex address",
                self.key, self.evm_resolver
            ));
        }
        Ok(())
    }
}

pub fn default_chains() -> Vec<ChainConfig> {
    vec![
        ChainConfig {
            key: "m".to_string(),
            node_url: "https://api.mainnet.aptoslabs.com/v1".to_string(),
            indexer_url: "https://api.mainnet.aptoslabs.com/v1/graphql".to_string(),
            evm_resolver: "0x828ec5bDe537B8673AF98D77bCB275ae1CA26D1f".to_string(),
        },
        ChainConfig {
            key: "s".to_string(),
            node_url: "https://api.testnet.aptoslabs.com/v1".to_string(),
            indexer_url: "https://api.testnet.aptoslabs.com/v1/graphql".to_string(),
            evm_resolver: "0x9Ec7f2ce83fcDF589487303fA9984942EF80Cb39".to_string(),
        },
    ]
}
