use super::queries::{
    AnsRecord, DomainVariables, GraphqlRequest, GraphqlResponse, OwnedNamesVariables, GET_DOMAIN,
    GET_OWNED_NAMES, OWNED_NAMES_PAGE_SIZE,
};
use async_trait::async_trait;
use chrono::Utc;
use ens_apt_application::ports::OwnershipIndex;
use ens_apt_domain::{AccountAddress, AptosName, DomainError, OwnershipRecord};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// `current_aptos_names` lookups against one chain's indexer.
pub struct GraphqlOwnershipIndex {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl GraphqlOwnershipIndex {
    pub fn new(url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(4)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            url: url.to_string(),
            timeout,
        }
    }

    async fn query<V: Serialize>(
        &self,
        query: &str,
        variables: V,
    ) -> Result<Vec<AnsRecord>, DomainError> {
        let request = GraphqlRequest { query, variables };

        let response = tokio::time::timeout(
            self.timeout,
            self.client.post(&self.url).json(&request).send(),
        )
        .await
        .map_err(|_| self.timed_out("did not answer"))?
        .map_err(|e| self.transport_failure("Request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::IndexerQueryFailed(format!(
                "Indexer {} returned HTTP {}",
                self.url,
                status.as_u16()
            )));
        }

        let body: GraphqlResponse = tokio::time::timeout(self.timeout, response.json())
            .await
            .map_err(|_| self.timed_out("stalled mid-response"))?
            .map_err(|e| self.transport_failure("Malformed response", e))?;

        if let Some(first) = body.errors.first() {
            return Err(DomainError::IndexerQueryFailed(first.message.clone()));
        }

        let data = body.data.ok_or_else(|| {
            DomainError::IndexerQueryFailed("Indexer response carried no data".into())
        })?;

        Ok(data.current_aptos_names)
    }

    fn timed_out(&self, what: &str) -> DomainError {
        DomainError::Timeout(format!("Indexer {} {}", self.url, what))
    }

    /// The client-level deadline surfaces as a reqwest error; keep it a timeout.
    fn transport_failure(&self, context: &str, error: reqwest::Error) -> DomainError {
        if error.is_timeout() {
            self.timed_out("did not answer")
        } else {
            DomainError::IndexerQueryFailed(format!("{} from {}: {}", context, self.url, error))
        }
    }
}

#[async_trait]
impl OwnershipIndex for GraphqlOwnershipIndex {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn lookup(
        &self,
        domain: &str,
        subdomain: &str,
    ) -> Result<OwnershipRecord, DomainError> {
        let rows = self
            .query(GET_DOMAIN, DomainVariables { domain, subdomain })
            .await?;

        let row = rows.into_iter().next().ok_or_else(|| {
            if subdomain.is_empty() {
                DomainError::DomainNotFound(domain.to_string())
            } else {
                DomainError::DomainNotFound(format!("{}.{}", subdomain, domain))
            }
        })?;

        let record = row.into_ownership()?;
        debug!(owner = %record.owner_address, "Ownership resolved");
        Ok(record)
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn names_owned_by(&self, owner: &AccountAddress) -> Result<Vec<AptosName>, DomainError> {
        let variables = OwnedNamesVariables {
            owner: owner.as_str(),
            now: Utc::now().naive_utc().format("%Y-%m-%dT%H:%M:%S").to_string(),
            limit: OWNED_NAMES_PAGE_SIZE,
            offset: 0,
        };

        let rows = self.query(GET_OWNED_NAMES, variables).await?;
        let names = usable_names(rows);

        debug!(count = names.len(), "Owned names listed");
        Ok(names)
    }
}

/// Rows without a valid owner are dropped from listings.
fn usable_names(rows: Vec<AnsRecord>) -> Vec<AptosName> {
    rows.into_iter()
        .filter_map(|row| match row.into_name() {
            Ok(name) => Some(name),
            Err(error) => {
                warn!(error = %error, "Skipping malformed indexer row");
                None
            }
        })
        .collect()
}
