use super::payload::{
    decode_bool, decode_bytes, decode_string, single_value, AptosErrorBody, ViewArgument,
    ViewRequest,
};
use async_trait::async_trait;
use ens_apt_application::ports::ResolverViewClient;
use ens_apt_domain::{AccountAddress, DnsNode, DomainError, OnChainBytes};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

const FN_HAS_RESOLVER: &str = "has_resolver";
const FN_GET_ADDR: &str = "get_addr";
const FN_GET_ADDR_EXT: &str = "get_addr_ext";
const FN_GET_TEXT: &str = "get_text";
const FN_GET_CONTENTHASH: &str = "get_contenthash";

/// Calls the resolver module's view functions on one Aptos fullnode.
pub struct AptosViewClient {
    client: reqwest::Client,
    view_url: String,
    module: String,
    timeout: Duration,
}

impl AptosViewClient {
    pub fn new(node_url: &str, module: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(8)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            view_url: format!("{}/view", node_url.trim_end_matches('/')),
            module: module.to_string(),
            timeout,
        }
    }

    pub fn view_url(&self) -> &str {
        &self.view_url
    }

    #[instrument(skip(self, arguments), fields(url = %self.view_url))]
    async fn call_view(
        &self,
        function: &str,
        arguments: Vec<ViewArgument>,
    ) -> Result<Vec<Value>, DomainError> {
        let request = ViewRequest::new(&self.module, function, arguments);

        let response = tokio::time::timeout(
            self.timeout,
            self.client.post(&self.view_url).json(&request).send(),
        )
        .await
        .map_err(|_| {
            DomainError::ViewCallFailed(format!(
                "Timeout calling {} on {}",
                function, self.view_url
            ))
        })?
        .map_err(|e| {
            DomainError::ViewCallFailed(format!(
                "View request {} to {} failed: {}",
                function, self.view_url, e
            ))
        })?;

        let status = response.status();
        let body = tokio::time::timeout(self.timeout, response.bytes())
            .await
            .map_err(|_| {
                DomainError::ViewCallFailed(format!(
                    "Timeout reading {} response from {}",
                    function, self.view_url
                ))
            })?
            .map_err(|e| {
                DomainError::ViewCallFailed(format!(
                    "Failed to read {} response from {}: {}",
                    function, self.view_url, e
                ))
            })?;

        if !status.is_success() {
            let detail = match serde_json::from_slice::<AptosErrorBody>(&body) {
                Ok(err) => match (err.error_code, err.vm_error_code) {
                    (Some(code), Some(vm)) => format!("{} ({}, vm {})", err.message, code, vm),
                    (Some(code), None) => format!("{} ({})", err.message, code),
                    _ => err.message,
                },
                Err(_) => status
                    .canonical_reason()
                    .unwrap_or("Unknown")
                    .to_string(),
            };
            return Err(DomainError::ViewCallFailed(format!(
                "{} returned HTTP {}: {}",
                function,
                status.as_u16(),
                detail
            )));
        }

        let values: Vec<Value> = serde_json::from_slice(&body).map_err(|e| {
            DomainError::ViewCallFailed(format!("{} returned malformed body: {}", function, e))
        })?;

        debug!(function, values = values.len(), "View call returned");
        Ok(values)
    }

    /// Decode failures of a successful call are still view failures.
    fn view_failure(err: DomainError) -> DomainError {
        match err {
            DomainError::EncodingError(msg) => DomainError::ViewCallFailed(msg),
            other => other,
        }
    }
}

#[async_trait]
impl ResolverViewClient for AptosViewClient {
    async fn has_resolver(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
    ) -> Result<bool, DomainError> {
        let values = self
            .call_view(
                FN_HAS_RESOLVER,
                vec![ViewArgument::address(account), ViewArgument::bytes(node)],
            )
            .await?;
        single_value(values, FN_HAS_RESOLVER)
            .and_then(|v| decode_bool(v, FN_HAS_RESOLVER))
            .map_err(Self::view_failure)
    }

    async fn get_addr(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
    ) -> Result<String, DomainError> {
        let values = self
            .call_view(
                FN_GET_ADDR,
                vec![ViewArgument::address(account), ViewArgument::bytes(node)],
            )
            .await?;
        single_value(values, FN_GET_ADDR)
            .and_then(|v| decode_string(v, FN_GET_ADDR))
            .map_err(Self::view_failure)
    }

    async fn get_addr_ext(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
        coin_type: u64,
    ) -> Result<OnChainBytes, DomainError> {
        let values = self
            .call_view(
                FN_GET_ADDR_EXT,
                vec![
                    ViewArgument::address(account),
                    ViewArgument::bytes(node),
                    ViewArgument::u256(coin_type),
                ],
            )
            .await?;
        single_value(values, FN_GET_ADDR_EXT)
            .and_then(|v| decode_bytes(v, FN_GET_ADDR_EXT))
            .map_err(Self::view_failure)
    }

    async fn get_text(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
        key: &str,
    ) -> Result<String, DomainError> {
        let values = self
            .call_view(
                FN_GET_TEXT,
                vec![
                    ViewArgument::address(account),
                    ViewArgument::bytes(node),
                    ViewArgument::string(key),
                ],
            )
            .await?;
        single_value(values, FN_GET_TEXT)
            .and_then(|v| decode_string(v, FN_GET_TEXT))
            .map_err(Self::view_failure)
    }

    async fn get_contenthash(
        &self,
        account: &AccountAddress,
        node: &DnsNode,
    ) -> Result<OnChainBytes, DomainError> {
        let values = self
            .call_view(
                FN_GET_CONTENTHASH,
                vec![ViewArgument::address(account), ViewArgument::bytes(node)],
            )
            .await?;
        single_value(values, FN_GET_CONTENTHASH)
            .and_then(|v| decode_bytes(v, FN_GET_CONTENTHASH))
            .map_err(Self::view_failure)
    }
}
