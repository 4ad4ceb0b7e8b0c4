use super::abi::{decode_record_call, decode_resolve, encode_multicall_answer, RecordCall};
use super::signer::ResponseSigner;
use alloy::primitives::Address;
use ens_apt_application::ports::ChainClients;
use ens_apt_application::use_cases::{RecordHandle, ResolutionContext, ResolveNameUseCase};
use ens_apt_domain::{AccountAddress, ChainKey, DnsNode, DomainError};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Path segment selecting the gateway-suffix route.
pub const APTOS_NATIVE_TARGET: &str = "apt";

/// One inbound CCIP-Read lookup.
#[derive(Debug, Clone)]
pub struct CcipReadRequest {
    pub chain: ChainKey,
    pub context: ResolutionContext,
    /// `sender` as posted by the client; informational only.
    pub sender: Option<String>,
    /// Full `resolve(bytes,bytes)` calldata.
    pub calldata: Vec<u8>,
}

impl CcipReadRequest {
    pub fn parse_target(target: &str) -> Result<ResolutionContext, DomainError> {
        if target.eq_ignore_ascii_case(APTOS_NATIVE_TARGET) {
            Ok(ResolutionContext::AptosNative)
        } else {
            AccountAddress::parse(target).map(ResolutionContext::Account)
        }
    }
}

/// ENSIP-10 pipeline: decode, resolve, encode, sign.
pub struct CcipReadHandler {
    resolve_name: Arc<ResolveNameUseCase>,
    chains: Arc<ChainClients>,
    signer: Arc<ResponseSigner>,
}

impl CcipReadHandler {
    pub fn new(
        resolve_name: Arc<ResolveNameUseCase>,
        chains: Arc<ChainClients>,
        signer: Arc<ResponseSigner>,
    ) -> Self {
        Self {
            resolve_name,
            chains,
            signer,
        }
    }

    /// Returns the signed envelope bytes.
    #[instrument(skip(self, request), fields(chain = %request.chain))]
    pub async fn handle(&self, request: &CcipReadRequest) -> Result<Vec<u8>, DomainError> {
        let route = &self.chains.get(&request.chain)?.route;

        let outer = decode_resolve(&request.calldata)?;
        let name = DnsNode::from_wire(&outer.name)?.decode()?;
        let call = decode_record_call(&outer.data)?;

        let handle = self
            .resolve_name
            .execute(&request.chain, &name, &request.context)
            .await?;

        let answer = match &call {
            RecordCall::Multicall(items) => {
                let calls = items
                    .iter()
                    .map(|item| match decode_record_call(item)? {
                        RecordCall::Multicall(_) => Err(DomainError::UnsupportedCall(
                            "Nested multicall".to_string(),
                        )),
                        inner => Ok(inner),
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                debug!(calls = calls.len(), "Resolving multicall");
                let results = join_all(calls.iter().map(|c| answer_single(&handle, c))).await;
                encode_multicall_answer(results)
            }
            single => answer_single(&handle, single).await,
        };

        let resolver: Address = route.evm_resolver.parse().map_err(|_| {
            DomainError::InvalidRequest(format!(
                "Chain '{}' has an invalid resolver address",
                request.chain
            ))
        })?;

        let envelope = self
            .signer
            .sign_response(resolver, &request.calldata, &answer)?;

        info!(
            name = %handle.name(),
            sender = request.sender.as_deref().unwrap_or("-"),
            empty = handle.is_empty(),
            bytes = envelope.len(),
            "CCIP-Read answered"
        );

        Ok(envelope)
    }
}

async fn answer_single(handle: &RecordHandle, call: &RecordCall) -> Vec<u8> {
    match call.field() {
        Some(query) => {
            let value = handle.resolve(&query).await;
            call.encode_answer(&value)
        }
        None => call.encode_answer(&ens_apt_domain::ResolvedValue::empty_hex()),
    }
}
