use chrono::{DateTime, NaiveDateTime};
use ens_apt_domain::{AccountAddress, AptosName, DomainError, OwnershipRecord};
use serde::{Deserialize, Serialize};

pub const GET_DOMAIN: &str = r#"
query getDomain($subdomain: String!, $domain: String!) {
  current_aptos_names(
    limit: 1
    where: { subdomain: { _eq: $subdomain }, domain: { _eq: $domain } }
    order_by: { expiration_timestamp: asc }
  ) {
    ...ANS_RECORD
  }
}

fragment ANS_RECORD on current_aptos_names {
  domain
  expiration_timestamp
  registered_address
  subdomain
  token_standard
  is_primary
  owner_address
}
"#;

pub const GET_OWNED_NAMES: &str = r#"
query getOwnedNames($owner: String!, $now: timestamp!, $limit: Int!, $offset: Int!) {
  current_aptos_names(
    limit: $limit
    offset: $offset
    where: {
      owner_address: { _eq: $owner }
      subdomain: { _eq: "" }
      expiration_timestamp: { _gte: $now }
      token_standard: { _in: ["v1", "v2"] }
    }
    order_by: [{ is_primary: desc }, { expiration_timestamp: asc }]
  ) {
    ...ANS_RECORD
  }
}

fragment ANS_RECORD on current_aptos_names {
  domain
  expiration_timestamp
  registered_address
  subdomain
  token_standard
  is_primary
  owner_address
}
"#;

pub const OWNED_NAMES_PAGE_SIZE: u32 = 20;

#[derive(Debug, Serialize)]
pub struct GraphqlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
pub struct DomainVariables<'a> {
    pub domain: &'a str,
    pub subdomain: &'a str,
}

#[derive(Debug, Serialize)]
pub struct OwnedNamesVariables<'a> {
    pub owner: &'a str,
    pub now: String,
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<NamesData>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct NamesData {
    #[serde(default)]
    pub current_aptos_names: Vec<AnsRecord>,
}

/// One `current_aptos_names` row.
#[derive(Debug, Clone, Deserialize)]
pub struct AnsRecord {
    pub domain: Option<String>,
    #[serde(default)]
    pub subdomain: Option<String>,
    pub expiration_timestamp: Option<String>,
    pub registered_address: Option<String>,
    pub owner_address: Option<String>,
    #[serde(default)]
    pub token_standard: Option<String>,
    #[serde(default)]
    pub is_primary: Option<bool>,
}

impl AnsRecord {
    pub fn into_ownership(self) -> Result<OwnershipRecord, DomainError> {
        let owner_address = self.owner()?;
        Ok(OwnershipRecord {
            owner_address,
            registered_address: optional_address(self.registered_address.as_deref()),
            expires_at: self.expiration_timestamp.as_deref().and_then(parse_timestamp),
        })
    }

    pub fn into_name(self) -> Result<AptosName, DomainError> {
        let owner_address = self.owner()?;
        Ok(AptosName {
            domain: self.domain.unwrap_or_default(),
            subdomain: self.subdomain.unwrap_or_default(),
            owner_address,
            registered_address: optional_address(self.registered_address.as_deref()),
            expires_at: self.expiration_timestamp.as_deref().and_then(parse_timestamp),
            is_primary: self.is_primary.unwrap_or(false),
            token_standard: self.token_standard,
        })
    }

    fn owner(&self) -> Result<AccountAddress, DomainError> {
        match self.owner_address.as_deref() {
            Some(owner) if !owner.is_empty() => AccountAddress::parse(owner).map_err(|e| {
                DomainError::IndexerQueryFailed(format!("Invalid owner address: {}", e))
            }),
            _ => Err(DomainError::DomainNotFound(format!(
                "{} has no owner",
                self.domain.as_deref().unwrap_or("<unknown>")
            ))),
        }
    }
}

fn optional_address(raw: Option<&str>) -> Option<AccountAddress> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| AccountAddress::parse(s).ok())
}

/// Indexer timestamps come without an offset; tolerate RFC 3339 too.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
}
