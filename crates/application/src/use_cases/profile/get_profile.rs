use crate::ports::ChainClients;
use crate::use_cases::resolution::RecordHandle;
use ens_apt_domain::{
    AccountAddress, ChainKey, DnsNode, DomainError, FieldQuery, ResolvedValue, APTOS_COIN_TYPE,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Coin types shown in a profile: Ethereum, Sui, Solana, Bitcoin, Dogecoin, Cosmos.
pub const PROFILE_COIN_TYPES: [u64; 6] = [60, 784, 501, 0, 3, 118];

pub const PROFILE_TEXT_KEYS: [&str; 7] = [
    "com.twitter",
    "com.discord",
    "com.github",
    "email",
    "description",
    "avatar",
    "url",
];

/// Aptos zero address, the value of an unset native address record.
const UNSET_NATIVE_ADDR: &str = "0x0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileEntry {
    pub key: String,
    pub value: ResolvedValue,
}

/// Every well-known record of one name under one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolverProfile {
    pub name: String,
    pub account: AccountAddress,
    pub has_resolver: bool,
    pub address: Option<ResolvedValue>,
    pub addresses: Vec<ProfileEntry>,
    pub texts: Vec<ProfileEntry>,
    pub contenthash: Option<ResolvedValue>,
}

/// Reads all well-known records of a name in one concurrent fan-out.
pub struct GetProfileUseCase {
    chains: Arc<ChainClients>,
}

impl GetProfileUseCase {
    pub fn new(chains: Arc<ChainClients>) -> Self {
        Self { chains }
    }

    #[instrument(skip(self, chain), fields(chain = %chain))]
    pub async fn execute(
        &self,
        chain: &ChainKey,
        account: &AccountAddress,
        name: &str,
    ) -> Result<ResolverProfile, DomainError> {
        let services = self.chains.get(chain)?;
        let node = DnsNode::encode(name)?;

        let has_resolver = match services.view.has_resolver(account, &node).await {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "has_resolver failed, treating as absent");
                false
            }
        };

        let mut profile = ResolverProfile {
            name: name.to_string(),
            account: account.clone(),
            has_resolver,
            address: None,
            addresses: Vec::new(),
            texts: Vec::new(),
            contenthash: None,
        };

        if !has_resolver {
            return Ok(profile);
        }

        let handle = RecordHandle::new(name, Arc::clone(&services.view), account.clone(), node);

        let addr_queries: Vec<FieldQuery> =
            PROFILE_COIN_TYPES.iter().map(|c| FieldQuery::Addr(*c)).collect();
        let text_queries: Vec<FieldQuery> = PROFILE_TEXT_KEYS
            .iter()
            .map(|k| FieldQuery::Text(k.to_string()))
            .collect();

        let (native, addresses, texts, contenthash) = futures::join!(
            handle.addr(APTOS_COIN_TYPE),
            handle.resolve_all(&addr_queries),
            handle.resolve_all(&text_queries),
            handle.contenthash(),
        );

        profile.address = Some(native).filter(|v| !v.is_empty() && v.as_str() != UNSET_NATIVE_ADDR);
        profile.addresses = collect_entries(
            PROFILE_COIN_TYPES.iter().map(|c| c.to_string()),
            addresses,
        );
        profile.texts = collect_entries(PROFILE_TEXT_KEYS.iter().map(|k| k.to_string()), texts);
        profile.contenthash = Some(contenthash).filter(|v| !v.is_empty());

        info!(
            name = %name,
            addresses = profile.addresses.len(),
            texts = profile.texts.len(),
            "Profile resolved"
        );

        Ok(profile)
    }
}

fn collect_entries(
    keys: impl Iterator<Item = String>,
    values: Vec<ResolvedValue>,
) -> Vec<ProfileEntry> {
    keys.zip(values)
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| ProfileEntry { key, value })
        .collect()
}
