use serde::Serialize;
use std::fmt;

/// SLIP-44 coin type of the Aptos-native address record.
pub const APTOS_COIN_TYPE: u64 = 637;
/// SLIP-44 coin type of Ethereum, answered by the legacy `addr(bytes32)`.
pub const ETH_COIN_TYPE: u64 = 60;

/// Sentinel returned for an unreadable `addr` or `contenthash`.
pub const EMPTY_HEX: &str = "0x";
/// Sentinel returned for an unreadable `text`.
pub const EMPTY_TEXT: &str = "";

/// One record request against a resolved name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldQuery {
    Addr(u64),
    Text(String),
    ContentHash,
}

impl FieldQuery {
    /// Value this field resolves to when the lookup fails.
    pub fn sentinel(&self) -> ResolvedValue {
        match self {
            FieldQuery::Addr(_) | FieldQuery::ContentHash => ResolvedValue::empty_hex(),
            FieldQuery::Text(_) => ResolvedValue::empty_text(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FieldQuery::Addr(_) => "addr",
            FieldQuery::Text(_) => "text",
            FieldQuery::ContentHash => "contenthash",
        }
    }
}

/// Raw `vector<u8>` returned by a resolver view function.
///
/// Nothing past the view client sees an untyped JSON value; every byte
/// payload crosses the boundary as this type and is turned into a
/// [`ResolvedValue`] by the field codec.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct OnChainBytes(Vec<u8>);

impl OnChainBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for OnChainBytes {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<&[u8]> for OnChainBytes {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl fmt::Debug for OnChainBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OnChainBytes(0x{})", hex::encode(&self.0))
    }
}

/// Final, protocol-correct answer for one [`FieldQuery`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResolvedValue {
    /// `0x`-prefixed hex: binary addresses, native addresses, content hashes.
    Hex(String),
    /// Free-form UTF-8.
    Text(String),
}

impl ResolvedValue {
    pub fn empty_hex() -> Self {
        ResolvedValue::Hex(EMPTY_HEX.to_string())
    }

    pub fn empty_text() -> Self {
        ResolvedValue::Text(EMPTY_TEXT.to_string())
    }

    pub fn from_bytes_hex(bytes: &[u8]) -> Self {
        ResolvedValue::Hex(format!("0x{}", hex::encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ResolvedValue::Hex(s) | ResolvedValue::Text(s) => s,
        }
    }

    /// True for both sentinels.
    pub fn is_empty(&self) -> bool {
        match self {
            ResolvedValue::Hex(s) => s == EMPTY_HEX || s.is_empty(),
            ResolvedValue::Text(s) => s.is_empty(),
        }
    }

    /// Bytes as they go into an ABI `bytes` return.
    ///
    /// Hex values are decoded; an odd digit count (short Aptos addresses
    /// like `0x1`) is left-padded with one zero. A hex value that does not
    /// decode, and every text value, is returned as its UTF-8 bytes.
    pub fn to_abi_bytes(&self) -> Vec<u8> {
        match self {
            ResolvedValue::Hex(s) => {
                let digits = s.strip_prefix("0x").unwrap_or(s);
                let padded = if digits.len() % 2 == 1 {
                    format!("0{}", digits)
                } else {
                    digits.to_string()
                };
                hex::decode(&padded).unwrap_or_else(|_| s.as_bytes().to_vec())
            }
            ResolvedValue::Text(s) => s.as_bytes().to_vec(),
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
