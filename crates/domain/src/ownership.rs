use super::AccountAddress;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Current holder of an Aptos name, as reported by the indexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipRecord {
    /// Account whose resolver resource holds the records.
    pub owner_address: AccountAddress,
    /// Address the name points at in the naming contract itself.
    pub registered_address: Option<AccountAddress>,
    pub expires_at: Option<NaiveDateTime>,
}

/// An Aptos name owned by an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AptosName {
    pub domain: String,
    pub subdomain: String,
    pub owner_address: AccountAddress,
    pub registered_address: Option<AccountAddress>,
    pub expires_at: Option<NaiveDateTime>,
    pub is_primary: bool,
    pub token_standard: Option<String>,
}

impl AptosName {
    /// Dotted name under the native TLD, e.g. `alice.apt` or `bob.alice.apt`.
    pub fn full_name(&self, native_tld: &str) -> String {
        if self.subdomain.is_empty() {
            format!("{}.{}", self.domain, native_tld)
        } else {
            format!("{}.{}.{}", self.subdomain, self.domain, native_tld)
        }
    }
}
