use super::{OwnershipIndex, ResolverViewClient};
use ens_apt_domain::{ChainKey, ChainRoute, ChainRouter, DomainError};
use std::collections::HashMap;
use std::sync::Arc;

/// Clients bound to one chain.
#[derive(Clone)]
pub struct ChainServices {
    pub route: ChainRoute,
    pub view: Arc<dyn ResolverViewClient>,
    pub index: Arc<dyn OwnershipIndex>,
}

/// Routing table plus the clients constructed for each of its chains.
///
/// Built by the composition root; read-only afterwards.
#[derive(Clone, Default)]
pub struct ChainClients {
    router: ChainRouter,
    services: HashMap<ChainKey, ChainServices>,
}

impl ChainClients {
    pub fn new(services: Vec<ChainServices>) -> Result<Self, DomainError> {
        let router = ChainRouter::new(services.iter().map(|s| s.route.clone()).collect())?;
        let services = services
            .into_iter()
            .map(|s| (s.route.key.clone(), s))
            .collect();
        Ok(Self { router, services })
    }

    pub fn router(&self) -> &ChainRouter {
        &self.router
    }

    pub fn get(&self, key: &ChainKey) -> Result<&ChainServices, DomainError> {
        let route = self.router.resolve(key)?;
        self.services
            .get(&route.key)
            .ok_or_else(|| DomainError::UnknownChain(key.to_string()))
    }
}
