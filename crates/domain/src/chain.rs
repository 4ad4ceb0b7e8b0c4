use super::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Routing key carried in the gateway URL (`/m/...`, `/s/...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainKey(Arc<str>);

impl ChainKey {
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChainKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Everything one chain key routes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRoute {
    pub key: ChainKey,
    /// Aptos fullnode REST base, e.g. `https://api.mainnet.aptoslabs.com/v1`
    pub aptos_node_url: Arc<str>,
    /// Aptos indexer GraphQL endpoint
    pub indexer_url: Arc<str>,
    /// EVM resolver contract that verifies our signatures
    pub evm_resolver: Arc<str>,
}

/// Static chain routing table.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Default)]
pub struct ChainRouter {
    routes: HashMap<ChainKey, ChainRoute>,
}

impl ChainRouter {
    pub fn new(routes: Vec<ChainRoute>) -> Result<Self, DomainError> {
        let mut table = HashMap::with_capacity(routes.len());
        for route in routes {
            let key = route.key.clone();
            if table.insert(key.clone(), route).is_some() {
                return Err(DomainError::InvalidRequest(format!(
                    "Duplicate chain key '{}'",
                    key
                )));
            }
        }
        Ok(Self { routes: table })
    }

    pub fn resolve(&self, key: &ChainKey) -> Result<&ChainRoute, DomainError> {
        self.routes
            .get(key)
            .ok_or_else(|| DomainError::UnknownChain(key.to_string()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &ChainKey> {
        self.routes.keys()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
