use super::RecordHandle;
use crate::ports::ChainClients;
use ens_apt_domain::{AccountAddress, ChainKey, DnsNode, DomainError, GatewaySuffix, ParsedName};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Where the records of a name live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionContext {
    /// The caller names the account; the name is used as the node verbatim.
    Account(AccountAddress),
    /// The name sits under the gateway suffix; the owning account is looked
    /// up in the indexer.
    AptosNative,
}

/// ENSIP-10 wildcard callback: turns a name into a [`RecordHandle`].
pub struct ResolveNameUseCase {
    chains: Arc<ChainClients>,
    suffix: GatewaySuffix,
}

impl ResolveNameUseCase {
    pub fn new(chains: Arc<ChainClients>, suffix: GatewaySuffix) -> Self {
        Self { chains, suffix }
    }

    pub fn suffix(&self) -> &GatewaySuffix {
        &self.suffix
    }

    /// Fails only on request-level problems: unknown chain, a name that
    /// cannot be encoded, or a gateway name the indexer does not know.
    #[instrument(skip(self, chain), fields(chain = %chain))]
    pub async fn execute(
        &self,
        chain: &ChainKey,
        name: &str,
        context: &ResolutionContext,
    ) -> Result<RecordHandle, DomainError> {
        let services = self.chains.get(chain)?;

        match context {
            ResolutionContext::Account(account) => {
                let node = DnsNode::encode(name)?;
                debug!(account = %account, "Resolving against caller-supplied account");
                Ok(RecordHandle::new(
                    name,
                    Arc::clone(&services.view),
                    account.clone(),
                    node,
                ))
            }
            ResolutionContext::AptosNative => {
                let parsed = match ParsedName::split_for_gateway(name, chain.clone(), &self.suffix)
                {
                    Ok(parsed) if parsed.is_gateway_suffix => parsed,
                    Ok(_) => {
                        debug!("Name is outside the gateway suffix, answering empty record");
                        return Ok(RecordHandle::empty(name));
                    }
                    Err(DomainError::UnsupportedName(reason)) => {
                        debug!(reason = %reason, "Unsupported name, answering empty record");
                        return Ok(RecordHandle::empty(name));
                    }
                    Err(e) => return Err(e),
                };

                let ownership = services
                    .index
                    .lookup(&parsed.domain, &parsed.subdomain)
                    .await?;
                let node = parsed.node()?;

                info!(
                    aptos_name = %parsed.normalized_name,
                    owner = %ownership.owner_address,
                    "Resolved Aptos name owner"
                );

                Ok(RecordHandle::new(
                    parsed.normalized_name,
                    Arc::clone(&services.view),
                    ownership.owner_address,
                    node,
                )
                .with_fallback_addr(ownership.registered_address))
            }
        }
    }
}
