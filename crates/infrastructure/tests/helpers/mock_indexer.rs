#![allow(dead_code)]
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, RwLock};

#[derive(Default)]
struct IndexerState {
    rows: Vec<Value>,
    graphql_error: Option<String>,
    requests: Vec<Value>,
    delay: Option<Duration>,
}

/// In-process Hasura endpoint serving `current_aptos_names`.
///
/// Rows are filtered by the query's `domain`/`subdomain` or `owner`
/// variables, then ordered and limited the way the query text asks, so one
/// server can back several lookups.
pub struct MockIndexer {
    addr: SocketAddr,
    state: Arc<RwLock<IndexerState>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockIndexer {
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(IndexerState::default()));
        let app = Router::new()
            .route("/v1/graphql", post(graphql))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/v1/graphql", self.addr)
    }

    pub async fn add_name(
        &self,
        domain: &str,
        subdomain: &str,
        owner: &str,
        registered: Option<&str>,
        is_primary: bool,
    ) {
        self.push_row(domain, subdomain, owner, registered, is_primary, "2030-01-01T00:00:00")
            .await;
    }

    pub async fn add_name_expiring(
        &self,
        domain: &str,
        subdomain: &str,
        owner: &str,
        expires: &str,
    ) {
        self.push_row(domain, subdomain, owner, None, false, expires)
            .await;
    }

    async fn push_row(
        &self,
        domain: &str,
        subdomain: &str,
        owner: &str,
        registered: Option<&str>,
        is_primary: bool,
        expires: &str,
    ) {
        self.state.write().await.rows.push(json!({
            "domain": domain,
            "subdomain": subdomain,
            "expiration_timestamp": expires,
            "registered_address": registered,
            "owner_address": owner,
            "token_standard": "v2",
            "is_primary": is_primary,
        }));
    }

    pub async fn set_delay(&self, delay: Duration) {
        self.state.write().await.delay = Some(delay);
    }

    pub async fn fail_with(&self, message: &str) {
        self.state.write().await.graphql_error = Some(message.to_string());
    }

    pub async fn requests(&self) -> Vec<Value> {
        self.state.read().await.requests.clone()
    }
}

impl Drop for MockIndexer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn graphql(State(state): State<Arc<RwLock<IndexerState>>>, Json(body): Json<Value>) -> Json<Value> {
    let delay = {
        let mut guard = state.write().await;
        guard.requests.push(body.clone());
        guard.delay
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let guard = state.read().await;
    if let Some(message) = &guard.graphql_error {
        return Json(json!({ "errors": [{ "message": message }] }));
    }

    let query = body["query"].as_str().unwrap_or_default();
    let vars = &body["variables"];
    let mut rows: Vec<Value> = guard
        .rows
        .iter()
        .filter(|row| match vars.get("owner") {
            Some(owner) => row["owner_address"] == *owner && row["subdomain"] == "",
            None => row["domain"] == vars["domain"] && row["subdomain"] == vars["subdomain"],
        })
        .cloned()
        .collect();

    if query.contains("expiration_timestamp: asc") {
        rows.sort_by(|a, b| expiry(a).cmp(expiry(b)));
    }
    if query.contains("is_primary: desc") {
        rows.sort_by_key(|row| !row["is_primary"].as_bool().unwrap_or(false));
    }
    if let Some(limit) = row_limit(query, vars) {
        rows.truncate(limit);
    }

    Json(json!({ "data": { "current_aptos_names": rows } }))
}

fn expiry(row: &Value) -> &str {
    row["expiration_timestamp"].as_str().unwrap_or_default()
}

/// `limit` from the variables, or a literal `limit: N` in the query text.
fn row_limit(query: &str, vars: &Value) -> Option<usize> {
    if let Some(limit) = vars["limit"].as_u64() {
        return Some(limit as usize);
    }
    let rest = &query[query.find("limit: ")? + "limit: ".len()..];
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
