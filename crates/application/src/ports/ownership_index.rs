use async_trait::async_trait;
use ens_apt_domain::{AccountAddress, AptosName, DomainError, OwnershipRecord};

/// Read-only view of the Aptos names indexer for one chain.
#[async_trait]
pub trait OwnershipIndex: Send + Sync {
    /// Owner of the exact `(domain, subdomain)` pair. When the indexer has
    /// several rows the one expiring soonest wins.
    ///
    /// Fails with [`DomainError::DomainNotFound`] when there is no row.
    async fn lookup(&self, domain: &str, subdomain: &str)
        -> Result<OwnershipRecord, DomainError>;

    /// Top-level names owned by `owner`, primary name first.
    async fn names_owned_by(&self, owner: &AccountAddress) -> Result<Vec<AptosName>, DomainError>;
}
