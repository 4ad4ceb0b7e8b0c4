#![allow(dead_code)]
use async_trait::async_trait;
use ens_apt_api::AppState;
use ens_apt_application::ports::{ChainClients, ChainServices, OwnershipIndex, ResolverViewClient};
use ens_apt_application::use_cases::{
    GetProfileUseCase, ListOwnedNamesUseCase, ResolveNameUseCase,
};
use ens_apt_domain::{
    AccountAddress, AptosName, ChainKey, ChainRoute, DnsNode, DomainError, GatewaySuffix,
    OnChainBytes, OwnershipRecord, SigningProtocol,
};
use ens_apt_infrastructure::{CcipReadHandler, ResponseSigner};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const SIGNING_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";
pub const RESOLVER: &str = "0x828ec5bDe537B8673AF98D77bCB275ae1CA26D1f";

/// Records keyed by `(account, decoded name)`.
#[derive(Default)]
pub struct StaticResolver {
    pub addrs: HashMap<(String, String), String>,
    pub texts: HashMap<(String, String, String), String>,
    pub ext: HashMap<(String, String, u64), Vec<u8>>,
}

impl StaticResolver {
    fn key(account: &AccountAddress, node: &DnsNode) -> (String, String) {
        (
            account.to_string(),
            node.decode().unwrap_or_default(),
        )
    }

    fn missing() -> DomainError {
        DomainError::ViewCallFailed("no record".into())
    }
}

#[async_trait]
impl ResolverViewClient for StaticResolver {
    async fn has_resolver(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
    ) -> Result<bool, DomainError> {
        let (account, name) = Self::key(account, node);
        Ok(self.addrs.contains_key(&(account.clone(), name.clone()))
            || self.texts.keys().any(|(a, n, _)| *a == account && *n == name))
    }

    async fn get_addr(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
    ) -> Result<String, DomainError> {
        self.addrs
            .get(&Self::key(account, node))
            .cloned()
            .ok_or_else(Self::missing)
    }

    async fn get_addr_ext(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
        coin_type: u64,
    ) -> Result<OnChainBytes, DomainError> {
        let (account, name) = Self::key(account, node);
        self.ext
            .get(&(account, name, coin_type))
            .cloned()
            .map(OnChainBytes::new)
            .ok_or_else(Self::missing)
    }

    async fn get_text(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
        key: &str,
    ) -> Result<String, DomainError> {
        let (account, name) = Self::key(account, node);
        self.texts
            .get(&(account, name, key.to_string()))
            .cloned()
            .ok_or_else(Self::missing)
    }

    async fn get_contenthash(
        &self,
        _account: &AccountAddress,
        _node: &DnsNode,
    ) -> Result<OnChainBytes, DomainError> {
        Err(Self::missing())
    }
}

#[derive(Default)]
pub struct StaticIndex {
    pub names: Vec<AptosName>,
}

#[async_trait]
impl OwnershipIndex for StaticIndex {
    async fn lookup(
        &self,
        domain: &str,
        subdomain: &str,
    ) -> Result<OwnershipRecord, DomainError> {
        self.names
            .iter()
            .find(|n| n.domain == domain && n.subdomain == subdomain)
            .map(|n| OwnershipRecord {
                owner_address: n.owner_address.clone(),
                registered_address: n.registered_address.clone(),
                expires_at: n.expires_at,
            })
            .ok_or_else(|| DomainError::DomainNotFound(domain.to_string()))
    }

    async fn names_owned_by(&self, owner: &AccountAddress) -> Result<Vec<AptosName>, DomainError> {
        Ok(self
            .names
            .iter()
            .filter(|n| n.owner_address == *owner && n.subdomain.is_empty())
            .cloned()
            .collect())
    }
}

pub fn account(raw: &str) -> AccountAddress {
    AccountAddress::parse(raw).unwrap()
}

pub fn aptos_name(domain: &str, owner: &str, is_primary: bool) -> AptosName {
    AptosName {
        domain: domain.to_string(),
        subdomain: String::new(),
        owner_address: account(owner),
        registered_address: None,
        expires_at: None,
        is_primary,
        token_standard: Some("v2".into()),
    }
}

pub fn app_state(resolver: StaticResolver, index: StaticIndex, protocol: SigningProtocol) -> AppState {
    let route = ChainRoute {
        key: ChainKey::new("m"),
        aptos_node_url: "http://aptos.invalid/v1".into(),
        indexer_url: "http://indexer.invalid/v1/graphql".into(),
        evm_resolver: RESOLVER.into(),
    };
    let chains = Arc::new(
        ChainClients::new(vec![ChainServices {
            route,
            view: Arc::new(resolver),
            index: Arc::new(index),
        }])
        .unwrap(),
    );

    let key = (protocol != SigningProtocol::Raw).then_some(SIGNING_KEY);
    let signer = Arc::new(ResponseSigner::new(key, protocol, Duration::from_secs(60)).unwrap());
    let resolve_name = Arc::new(ResolveNameUseCase::new(
        Arc::clone(&chains),
        GatewaySuffix::default(),
    ));

    AppState {
        ccip: Arc::new(CcipReadHandler::new(resolve_name, Arc::clone(&chains), signer)),
        get_profile: Arc::new(GetProfileUseCase::new(Arc::clone(&chains))),
        list_names: Arc::new(ListOwnedNamesUseCase::new(chains, "apt", "apt-gw.eth")),
    }
}
