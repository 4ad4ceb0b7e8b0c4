use serde::{Deserialize, Serialize};

/// Aptos resolver module and client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AptosConfig {
    /// Fully-qualified resolver module, `<address>::<module>`
    #[serde(default = "default_resolver_module")]
    pub resolver_module: String,

    /// View call timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout")]
    pub view_timeout: u64,

    /// Indexer query timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout")]
    pub indexer_timeout: u64,
}

impl AptosConfig {
    /// Module address part of `resolver_module`.
    pub fn module_address(&self) -> Option<&str> {
        self.resolver_module.split_once("::").map(|(addr, _)| addr)
    }
}

impl Default for AptosConfig {
    fn default() -> Self {
        Self {
            resolver_module: default_resolver_module(),
            view_timeout: default_timeout(),
            indexer_timeout: default_timeout(),
        }
    }
}

fn default_resolver_module() -> String {
    "0x4aac1f0a41d1251b67e7623b3bdf3034cbd4bb05938a1129ddd9dec3ba8ed200::resolver".to_string()
}

fn default_timeout() -> u64 {
    5000
}
