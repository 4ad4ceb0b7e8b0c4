use crate::ports::ResolverViewClient;
use ens_apt_domain::field_codec::{decode_addr_ext, decode_contenthash, decode_native_addr};
use ens_apt_domain::{
    AccountAddress, DnsNode, DomainError, FieldQuery, ResolvedValue, APTOS_COIN_TYPE,
};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, warn};

struct RecordTarget {
    view: Arc<dyn ResolverViewClient>,
    account: AccountAddress,
    node: DnsNode,
    fallback_addr: Option<AccountAddress>,
}

/// Records of one resolved name.
///
/// Each field is fetched on demand with its own view call and never
/// fails: any error turns into the field's sentinel (`"0x"` for `addr`
/// and `contenthash`, `""` for `text`). A handle built with
/// [`RecordHandle::empty`] answers every field with its sentinel without
/// touching the chain.
pub struct RecordHandle {
    name: Arc<str>,
    target: Option<RecordTarget>,
}

impl RecordHandle {
    pub fn new(
        name: impl Into<Arc<str>>,
        view: Arc<dyn ResolverViewClient>,
        account: AccountAddress,
        node: DnsNode,
    ) -> Self {
        Self {
            name: name.into(),
            target: Some(RecordTarget {
                view,
                account,
                node,
                fallback_addr: None,
            }),
        }
    }

    pub fn empty(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            target: None,
        }
    }

    /// Address returned by `addr(637)` when the resolver has no value.
    pub fn with_fallback_addr(mut self, fallback: Option<AccountAddress>) -> Self {
        if let Some(target) = self.target.as_mut() {
            target.fallback_addr = fallback;
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_none()
    }

    pub fn account(&self) -> Option<&AccountAddress> {
        self.target.as_ref().map(|t| &t.account)
    }

    pub fn node(&self) -> Option<&DnsNode> {
        self.target.as_ref().map(|t| &t.node)
    }

    pub async fn addr(&self, coin_type: u64) -> ResolvedValue {
        let Some(target) = &self.target else {
            return ResolvedValue::empty_hex();
        };

        if coin_type == APTOS_COIN_TYPE {
            match target.view.get_addr(&target.account, &target.node).await {
                Ok(addr) => decode_native_addr(addr),
                Err(e) => match &target.fallback_addr {
                    Some(fallback) => {
                        self.log_failure("addr", &e);
                        debug!(name = %self.name, fallback = %fallback, "Using registered address");
                        ResolvedValue::Hex(fallback.to_string())
                    }
                    None => self.sentinel(&FieldQuery::Addr(coin_type), &e),
                },
            }
        } else {
            match target
                .view
                .get_addr_ext(&target.account, &target.node, coin_type)
                .await
            {
                Ok(raw) => decode_addr_ext(coin_type, &raw),
                Err(e) => self.sentinel(&FieldQuery::Addr(coin_type), &e),
            }
        }
    }

    pub async fn text(&self, key: &str) -> ResolvedValue {
        let Some(target) = &self.target else {
            return ResolvedValue::empty_text();
        };

        match target.view.get_text(&target.account, &target.node, key).await {
            Ok(value) => ResolvedValue::Text(value),
            Err(e) => self.sentinel(&FieldQuery::Text(key.to_string()), &e),
        }
    }

    pub async fn contenthash(&self) -> ResolvedValue {
        let Some(target) = &self.target else {
            return ResolvedValue::empty_hex();
        };

        match target.view.get_contenthash(&target.account, &target.node).await {
            Ok(raw) => decode_contenthash(&raw),
            Err(e) => self.sentinel(&FieldQuery::ContentHash, &e),
        }
    }

    pub async fn resolve(&self, query: &FieldQuery) -> ResolvedValue {
        match query {
            FieldQuery::Addr(coin_type) => self.addr(*coin_type).await,
            FieldQuery::Text(key) => self.text(key).await,
            FieldQuery::ContentHash => self.contenthash().await,
        }
    }

    /// Resolve several fields concurrently. Results keep the input order.
    pub async fn resolve_all(&self, queries: &[FieldQuery]) -> Vec<ResolvedValue> {
        join_all(queries.iter().map(|q| self.resolve(q))).await
    }

    fn sentinel(&self, query: &FieldQuery, error: &DomainError) -> ResolvedValue {
        self.log_failure(query.kind(), error);
        query.sentinel()
    }

    fn log_failure(&self, field: &str, error: &DomainError) {
        if error.is_field_recoverable() {
            debug!(name = %self.name, field, error = %error, "Field lookup failed");
        } else {
            warn!(name = %self.name, field, error = %error, "Unexpected field lookup error");
        }
    }
}

impl std::fmt::Debug for RecordHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordHandle")
            .field("name", &self.name)
            .field("account", &self.account())
            .field("node", &self.node())
            .finish()
    }
}
