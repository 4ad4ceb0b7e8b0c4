use async_trait::async_trait;
use ens_apt_domain::{AccountAddress, DnsNode, DomainError, OnChainBytes};

/// Read-only surface of the Aptos resolver Move module.
///
/// One instance per chain. Every method may fail with
/// [`DomainError::ViewCallFailed`] (network error, Move abort, no resolver
/// resource for the account/node pair); callers treat that as a normal
/// "no value" outcome.
#[async_trait]
pub trait ResolverViewClient: Send + Sync {
    async fn has_resolver(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
    ) -> Result<bool, DomainError>;

    /// Aptos-native address record.
    async fn get_addr(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
    ) -> Result<String, DomainError>;

    async fn get_addr_ext(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
        coin_type: u64,
    ) -> Result<OnChainBytes, DomainError>;

    async fn get_text(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
        key: &str,
    ) -> Result<String, DomainError>;

    async fn get_contenthash(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
    ) -> Result<OnChainBytes, DomainError>;
}
