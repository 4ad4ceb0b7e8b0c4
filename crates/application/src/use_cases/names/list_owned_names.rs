use crate::ports::ChainClients;
use ens_apt_domain::{AccountAddress, ChainKey, DomainError};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedName {
    /// `alice.apt`
    pub name: String,
    /// `alice.apt-gw.eth`, the ENS name that resolves to it through the gateway
    pub gateway_name: String,
    pub expires_at: Option<String>,
    pub is_primary: bool,
}

pub struct ListOwnedNamesUseCase {
    chains: Arc<ChainClients>,
    native_tld: String,
    gateway_suffix: String,
}

impl ListOwnedNamesUseCase {
    pub fn new(
        chains: Arc<ChainClients>,
        native_tld: impl Into<String>,
        gateway_suffix: impl Into<String>,
    ) -> Self {
        Self {
            chains,
            native_tld: native_tld.into(),
            gateway_suffix: gateway_suffix.into(),
        }
    }

    #[instrument(skip(self, chain), fields(chain = %chain))]
    pub async fn execute(
        &self,
        chain: &ChainKey,
        owner: &AccountAddress,
    ) -> Result<Vec<OwnedName>, DomainError> {
        let services = self.chains.get(chain)?;
        let names = services.index.names_owned_by(owner).await?;

        debug!(count = names.len(), "Owned names retrieved");

        Ok(names
            .into_iter()
            .map(|n| {
                let name = n.full_name(&self.native_tld);
                let stem = name
                    .strip_suffix(&format!(".{}", self.native_tld))
                    .unwrap_or(&name)
                    .to_string();
                OwnedName {
                    gateway_name: format!("{}.{}", stem, self.gateway_suffix),
                    name,
                    expires_at: n.expires_at.map(|t| t.format("%Y-%m-%dT%H:%M:%S").to_string()),
                    is_primary: n.is_primary,
                }
            })
            .collect())
    }
}
