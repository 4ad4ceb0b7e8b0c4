//! Decoding of raw resolver payloads into protocol values.
//!
//! `get_addr_ext` stores whatever the record owner wrote: binary addresses
//! for EVM-style and 32-byte chains, or plain text for everything else.
//! The payload carries no tag, so the encoding is inferred from its length.

use super::field::{OnChainBytes, ResolvedValue, APTOS_COIN_TYPE};

/// Byte lengths that are treated as binary addresses.
pub const BINARY_ADDRESS_LENGTHS: [usize; 2] = [20, 32];

/// How an address payload is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddrEncoding {
    /// Aptos-native address from `get_addr`, passed through.
    Native,
    /// Binary address, rendered as `0x`-hex.
    Hex,
    /// Text address, rendered as UTF-8.
    Utf8,
}

/// Address payload as returned by the view client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddrPayload {
    Native(String),
    Ext(OnChainBytes),
}

pub fn classify_addr(coin_type: u64, len: usize) -> AddrEncoding {
    if coin_type == APTOS_COIN_TYPE {
        AddrEncoding::Native
    } else if BINARY_ADDRESS_LENGTHS.contains(&len) {
        AddrEncoding::Hex
    } else {
        AddrEncoding::Utf8
    }
}

pub fn decode_native_addr(addr: String) -> ResolvedValue {
    ResolvedValue::Hex(addr)
}

pub fn decode_addr_ext(coin_type: u64, raw: &OnChainBytes) -> ResolvedValue {
    match classify_addr(coin_type, raw.len()) {
        AddrEncoding::Native | AddrEncoding::Hex => ResolvedValue::from_bytes_hex(raw.as_slice()),
        AddrEncoding::Utf8 => {
            ResolvedValue::Text(String::from_utf8_lossy(raw.as_slice()).into_owned())
        }
    }
}

pub fn decode_addr(coin_type: u64, payload: AddrPayload) -> ResolvedValue {
    match payload {
        AddrPayload::Native(addr) => decode_native_addr(addr),
        AddrPayload::Ext(raw) => decode_addr_ext(coin_type, &raw),
    }
}

/// `0x`-hex of the stored content hash; empty storage yields `"0x"`.
pub fn decode_contenthash(raw: &OnChainBytes) -> ResolvedValue {
    ResolvedValue::from_bytes_hex(raw.as_slice())
}
