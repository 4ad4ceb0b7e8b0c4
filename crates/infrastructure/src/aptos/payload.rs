//! JSON shapes of `POST /v1/view`.
//!
//! Move values travel as JSON: `address` and `u256` as strings,
//! `vector<u8>` as a `0x`-hex string, `bool` as a bool. This module is the
//! only place those shapes are known; everything it hands back is typed.

use ens_apt_domain::{AccountAddress, DnsNode, DomainError, OnChainBytes};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct ViewRequest {
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<ViewArgument>,
}

/// One Move argument in its JSON wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ViewArgument(String);

impl ViewArgument {
    pub fn address(account: &AccountAddress) -> Self {
        Self(account.to_string())
    }

    pub fn bytes(node: &DnsNode) -> Self {
        Self(node.to_hex())
    }

    pub fn u256(value: u64) -> Self {
        Self(value.to_string())
    }

    pub fn string(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ViewRequest {
    pub fn new(module: &str, function: &str, arguments: Vec<ViewArgument>) -> Self {
        Self {
            function: format!("{}::{}", module, function),
            type_arguments: Vec::new(),
            arguments,
        }
    }
}

/// Error body the fullnode returns with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct AptosErrorBody {
    pub message: String,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub vm_error_code: Option<u64>,
}

pub fn single_value(values: Vec<Value>, function: &str) -> Result<Value, DomainError> {
    values.into_iter().next().ok_or_else(|| {
        DomainError::ViewCallFailed(format!("{} returned no values", function))
    })
}

pub fn decode_bool(value: Value, function: &str) -> Result<bool, DomainError> {
    value.as_bool().ok_or_else(|| unexpected(function, "bool", &value))
}

pub fn decode_string(value: Value, function: &str) -> Result<String, DomainError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(unexpected(function, "string", &other)),
    }
}

/// `vector<u8>` as `0x`-hex, or as a JSON array of numbers.
pub fn decode_bytes(value: Value, function: &str) -> Result<OnChainBytes, DomainError> {
    match &value {
        Value::String(s) => {
            let digits = s.strip_prefix("0x").unwrap_or(s);
            hex::decode(digits).map(OnChainBytes::new).map_err(|e| {
                DomainError::EncodingError(format!("{} returned invalid hex: {}", function, e))
            })
        }
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_u64()
                    .and_then(|n| u8::try_from(n).ok())
                    .ok_or_else(|| unexpected(function, "byte", item))
            })
            .collect::<Result<Vec<u8>, _>>()
            .map(OnChainBytes::new),
        _ => Err(unexpected(function, "vector<u8>", &value)),
    }
}

fn unexpected(function: &str, expected: &str, got: &Value) -> DomainError {
    DomainError::EncodingError(format!(
        "{} returned {} where {} was expected",
        function, got, expected
    ))
}
