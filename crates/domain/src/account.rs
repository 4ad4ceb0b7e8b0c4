use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Maximum number of hex digits in an Aptos account address (32 bytes).
const MAX_HEX_DIGITS: usize = 64;

/// Aptos account address as sent to the resolver view functions.
///
/// Kept in the `0x`-prefixed textual form the REST API expects. Short
/// special addresses (`0x1`) are accepted as-is; the hex digits are
/// lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountAddress(Arc<str>);

impl AccountAddress {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .ok_or_else(|| {
                DomainError::InvalidRequest(format!("Account address '{}' must start with 0x", input))
            })?;

        if digits.is_empty() || digits.len() > MAX_HEX_DIGITS {
            return Err(DomainError::InvalidRequest(format!(
                "Account address '{}' must have 1 to {} hex digits",
                input, MAX_HEX_DIGITS
            )));
        }

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DomainError::InvalidRequest(format!(
                "Account address '{}' is not hex",
                input
            )));
        }

        Ok(Self(Arc::from(format!("0x{}", digits.to_ascii_lowercase()))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountAddress {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccountAddress {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountAddress> for String {
    fn from(value: AccountAddress) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
