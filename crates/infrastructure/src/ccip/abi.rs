//! ENSIP-10 calldata codec.

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::sol_types::{SolCall, SolInterface, SolValue};
use ens_apt_domain::{DomainError, FieldQuery, ResolvedValue, ETH_COIN_TYPE};

alloy::sol! {
    interface IExtendedResolver {
        function resolve(bytes name, bytes data) external view returns (bytes);
    }

    interface IRecordResolver {
        function addr(bytes32 node) external view returns (address);
        function addr(bytes32 node, uint256 coinType) external view returns (bytes);
        function text(bytes32 node, string key) external view returns (string);
        function contenthash(bytes32 node) external view returns (bytes);
        function multicall(bytes[] data) external returns (bytes[] results);
    }
}

use IExtendedResolver::IExtendedResolverCalls;
use IRecordResolver::IRecordResolverCalls;

/// Outer `resolve(bytes name, bytes data)` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveCall {
    /// DNS wire-encoded name.
    pub name: Bytes,
    /// Inner record call.
    pub data: Bytes,
}

/// A decoded inner record call.
///
/// The `node` argument is ignored everywhere: records are addressed by
/// the DNS-encoded name carried in the outer call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCall {
    /// Legacy `addr(bytes32)`, answered with a 20-byte address.
    EthAddr,
    Field(FieldQuery),
    Multicall(Vec<Bytes>),
}

pub fn decode_resolve(calldata: &[u8]) -> Result<ResolveCall, DomainError> {
    match IExtendedResolverCalls::abi_decode(calldata) {
        Ok(IExtendedResolverCalls::resolve(call)) => Ok(ResolveCall {
            name: call.name,
            data: call.data,
        }),
        Err(e) => Err(DomainError::UnsupportedCall(format!(
            "Expected resolve(bytes,bytes): {}",
            e
        ))),
    }
}

pub fn decode_record_call(data: &[u8]) -> Result<RecordCall, DomainError> {
    let call = IRecordResolverCalls::abi_decode(data)
        .map_err(|e| DomainError::UnsupportedCall(format!("Unknown record call: {}", e)))?;

    match call {
        IRecordResolverCalls::addr_0(_) => Ok(RecordCall::EthAddr),
        IRecordResolverCalls::addr_1(call) => {
            let coin_type: u64 = call.coinType.try_into().map_err(|_| {
                DomainError::UnsupportedCall(format!("Coin type {} out of range", call.coinType))
            })?;
            Ok(RecordCall::Field(FieldQuery::Addr(coin_type)))
        }
        IRecordResolverCalls::text(call) => Ok(RecordCall::Field(FieldQuery::Text(call.key))),
        IRecordResolverCalls::contenthash(_) => Ok(RecordCall::Field(FieldQuery::ContentHash)),
        IRecordResolverCalls::multicall(call) => Ok(RecordCall::Multicall(call.data)),
    }
}

impl RecordCall {
    /// The field to fetch for a single call.
    pub fn field(&self) -> Option<FieldQuery> {
        match self {
            RecordCall::EthAddr => Some(FieldQuery::Addr(ETH_COIN_TYPE)),
            RecordCall::Field(query) => Some(query.clone()),
            RecordCall::Multicall(_) => None,
        }
    }

    /// ABI-encodes the resolved value as this call's return data.
    pub fn encode_answer(&self, value: &ResolvedValue) -> Vec<u8> {
        match self {
            RecordCall::EthAddr => {
                let bytes = value.to_abi_bytes();
                let address = if bytes.len() == 20 {
                    Address::from_slice(&bytes)
                } else {
                    Address::ZERO
                };
                address.abi_encode()
            }
            RecordCall::Field(FieldQuery::Text(_)) => value.as_str().to_string().abi_encode(),
            RecordCall::Field(_) => Bytes::from(value.to_abi_bytes()).abi_encode(),
            RecordCall::Multicall(_) => Vec::<Bytes>::new().abi_encode(),
        }
    }
}

pub fn encode_multicall_answer(results: Vec<Vec<u8>>) -> Vec<u8> {
    results
        .into_iter()
        .map(Bytes::from)
        .collect::<Vec<_>>()
        .abi_encode()
}

pub fn encode_resolve(name: &[u8], inner: Vec<u8>) -> Vec<u8> {
    IExtendedResolver::resolveCall {
        name: Bytes::copy_from_slice(name),
        data: Bytes::from(inner),
    }
    .abi_encode()
}

/// Inner call builders, used by clients and tests.
pub mod calls {
    use super::*;

    pub fn addr(node: B256) -> Vec<u8> {
        IRecordResolver::addr_0Call { node }.abi_encode()
    }

    pub fn addr_coin(node: B256, coin_type: u64) -> Vec<u8> {
        IRecordResolver::addr_1Call {
            node,
            coinType: U256::from(coin_type),
        }
        .abi_encode()
    }

    pub fn text(node: B256, key: &str) -> Vec<u8> {
        IRecordResolver::textCall {
            node,
            key: key.to_string(),
        }
        .abi_encode()
    }

    pub fn contenthash(node: B256) -> Vec<u8> {
        IRecordResolver::contenthashCall { node }.abi_encode()
    }

    pub fn multicall(data: Vec<Vec<u8>>) -> Vec<u8> {
        IRecordResolver::multicallCall {
            data: data.into_iter().map(Bytes::from).collect(),
        }
        .abi_encode()
    }
}
