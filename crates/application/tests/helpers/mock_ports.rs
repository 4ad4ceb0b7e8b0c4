#![allow(dead_code)]

use async_trait::async_trait;
use ens_apt_application::ports::{
    ChainClients, ChainServices, OwnershipIndex, ResolverViewClient,
};
use ens_apt_domain::{
    AccountAddress, AptosName, ChainKey, ChainRoute, DnsNode, DomainError, OnChainBytes,
    OwnershipRecord,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

type RecordKey = (String, Vec<u8>);

fn key(account: &AccountAddress, node: &DnsNode) -> RecordKey {
    (account.to_string(), node.as_bytes().to_vec())
}

fn node_of(name: &str) -> DnsNode {
    DnsNode::encode(name).unwrap()
}

pub fn account(addr: &str) -> AccountAddress {
    AccountAddress::parse(addr).unwrap()
}

// ============================================================================
// Mock ResolverViewClient
// ============================================================================

#[derive(Default)]
pub struct MockResolverView {
    resolvers: RwLock<HashSet<RecordKey>>,
    addrs: RwLock<HashMap<RecordKey, String>>,
    addr_exts: RwLock<HashMap<(RecordKey, u64), Vec<u8>>>,
    texts: RwLock<HashMap<(RecordKey, String), String>>,
    contenthashes: RwLock<HashMap<RecordKey, Vec<u8>>>,
    failing: RwLock<HashSet<&'static str>>,
    calls: RwLock<Vec<String>>,
}

impl MockResolverView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_resolver(&self, account: &AccountAddress, name: &str) {
        self.resolvers.write().await.insert(key(account, &node_of(name)));
    }

    pub async fn set_addr(&self, account: &AccountAddress, name: &str, addr: &str) {
        self.set_resolver(account, name).await;
        self.addrs
            .write()
            .await
            .insert(key(account, &node_of(name)), addr.to_string());
    }

    pub async fn set_addr_ext(&self, account: &AccountAddress, name: &str, coin: u64, raw: Vec<u8>) {
        self.set_resolver(account, name).await;
        self.addr_exts
            .write()
            .await
            .insert((key(account, &node_of(name)), coin), raw);
    }

    pub async fn set_text(&self, account: &AccountAddress, name: &str, k: &str, value: &str) {
        self.set_resolver(account, name).await;
        self.texts
            .write()
            .await
            .insert((key(account, &node_of(name)), k.to_string()), value.to_string());
    }

    pub async fn set_contenthash(&self, account: &AccountAddress, name: &str, raw: Vec<u8>) {
        self.set_resolver(account, name).await;
        self.contenthashes
            .write()
            .await
            .insert(key(account, &node_of(name)), raw);
    }

    /// Make every call to `method` fail with `ViewCallFailed`.
    pub async fn fail_method(&self, method: &'static str) {
        self.failing.write().await.insert(method);
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn record(&self, method: &'static str, account: &AccountAddress, node: &DnsNode) -> Result<(), DomainError> {
        let name = node.decode().unwrap_or_default();
        self.calls
            .write()
            .await
            .push(format!("{}({}, {})", method, account, name));
        if self.failing.read().await.contains(method) {
            return Err(DomainError::ViewCallFailed(format!("{} injected failure", method)));
        }
        Ok(())
    }
}

fn not_found(what: &str) -> DomainError {
    DomainError::ViewCallFailed(format!("{} not found", what))
}

#[async_trait]
impl ResolverViewClient for MockResolverView {
    async fn has_resolver(&self, account: &AccountAddress, node: &DnsNode) -> Result<bool, DomainError> {
        self.record("has_resolver", account, node).await?;
        Ok(self.resolvers.read().await.contains(&key(account, node)))
    }

    async fn get_addr(&self, account: &AccountAddress, node: &DnsNode) -> Result<String, DomainError> {
        self.record("get_addr", account, node).await?;
        self.addrs
            .read()
            .await
            .get(&key(account, node))
            .cloned()
            .ok_or_else(|| not_found("addr"))
    }

    async fn get_addr_ext(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
        coin_type: u64,
    ) -> Result<OnChainBytes, DomainError> {
        self.record("get_addr_ext", account, node).await?;
        self.addr_exts
            .read()
            .await
            .get(&(key(account, node), coin_type))
            .cloned()
            .map(OnChainBytes::new)
            .ok_or_else(|| not_found("addr_ext"))
    }

    async fn get_text(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
        k: &str,
    ) -> Result<String, DomainError> {
        self.record("get_text", account, node).await?;
        self.texts
            .read()
            .await
            .get(&(key(account, node), k.to_string()))
            .cloned()
            .ok_or_else(|| not_found("text"))
    }

    async fn get_contenthash(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
    ) -> Result<OnChainBytes, DomainError> {
        self.record("get_contenthash", account, node).await?;
        self.contenthashes
            .read()
            .await
            .get(&key(account, node))
            .cloned()
            .map(OnChainBytes::new)
            .ok_or_else(|| not_found("contenthash"))
    }
}

// ============================================================================
// Mock OwnershipIndex
// ============================================================================

#[derive(Default)]
pub struct MockOwnershipIndex {
    records: RwLock<HashMap<(String, String), OwnershipRecord>>,
    names: RwLock<Vec<AptosName>>,
    lookups: RwLock<Vec<(String, String)>>,
    should_fail: RwLock<bool>,
}

impl MockOwnershipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_owner(
        &self,
        domain: &str,
        subdomain: &str,
        owner: &str,
        registered: Option<&str>,
    ) {
        self.records.write().await.insert(
            (domain.to_string(), subdomain.to_string()),
            OwnershipRecord {
                owner_address: account(owner),
                registered_address: registered.map(account),
                expires_at: None,
            },
        );
    }

    pub async fn set_names(&self, names: Vec<AptosName>) {
        *self.names.write().await = names;
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn lookups(&self) -> Vec<(String, String)> {
        self.lookups.read().await.clone()
    }
}

#[async_trait]
impl OwnershipIndex for MockOwnershipIndex {
    async fn lookup(&self, domain: &str, subdomain: &str) -> Result<OwnershipRecord, DomainError> {
        self.lookups
            .write()
            .await
            .push((domain.to_string(), subdomain.to_string()));
        if *self.should_fail.read().await {
            return Err(DomainError::IndexerQueryFailed("Mock indexer failed".to_string()));
        }
        self.records
            .read()
            .await
            .get(&(domain.to_string(), subdomain.to_string()))
            .cloned()
            .ok_or_else(|| DomainError::DomainNotFound(format!("{}/{}", domain, subdomain)))
    }

    async fn names_owned_by(&self, owner: &AccountAddress) -> Result<Vec<AptosName>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::IndexerQueryFailed("Mock indexer failed".to_string()));
        }
        Ok(self
            .names
            .read()
            .await
            .iter()
            .filter(|n| &n.owner_address == owner)
            .cloned()
            .collect())
    }
}

// ============================================================================
// Wiring
// ============================================================================

pub fn route(key: &str) -> ChainRoute {
    ChainRoute {
        key: ChainKey::from(key),
        aptos_node_url: Arc::from("http://aptos.invalid/v1"),
        indexer_url: Arc::from("http://indexer.invalid/v1/graphql"),
        evm_resolver: Arc::from("0x9Ec7f2ce83fcDF589487303fA9984942EF80Cb39"),
    }
}

pub fn single_chain(
    key: &str,
    view: Arc<MockResolverView>,
    index: Arc<MockOwnershipIndex>,
) -> Arc<ChainClients> {
    Arc::new(
        ChainClients::new(vec![ChainServices {
            route: route(key),
            view,
            index,
        }])
        .unwrap(),
    )
}
