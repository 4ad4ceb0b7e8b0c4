#![allow(dead_code)]
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{oneshot, RwLock};

#[derive(Default)]
struct AptosState {
    /// `(function name, arguments)` → JSON array returned by `/view`
    views: HashMap<(String, Vec<String>), Value>,
    requests: Vec<Value>,
    delay: Option<Duration>,
}

/// In-process Aptos fullnode answering `POST /v1/view`.
///
/// Unknown calls get the 400 a real node returns for a Move abort.
pub struct MockAptosNode {
    addr: SocketAddr,
    state: Arc<RwLock<AptosState>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockAptosNode {
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(AptosState::default()));
        let app = Router::new()
            .route("/v1/view", post(view))
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

    /// Base URL as configured for a chain, e.g. `http://127.0.0.1:1234/v1`.
    pub fn node_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    pub async fn set_view(&self, function: &str, arguments: &[&str], values: Value) {
        self.state.write().await.views.insert(
            (
                function.to_string(),
                arguments.iter().map(|a| a.to_string()).collect(),
            ),
            values,
        );
    }

    pub async fn set_delay(&self, delay: Duration) {
        self.state.write().await.delay = Some(delay);
    }

    pub async fn requests(&self) -> Vec<Value> {
        self.state.read().await.requests.clone()
    }
}

impl Drop for MockAptosNode {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

async fn view(State(state): State<Arc<RwLock<AptosState>>>, Json(body): Json<Value>) -> Response {
    let delay = {
        let mut guard = state.write().await;
        guard.requests.push(body.clone());
        guard.delay
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let function = body["function"]
        .as_str()
        .and_then(|f| f.rsplit("::").next())
        .unwrap_or_default()
        .to_string();
    let arguments: Vec<String> = body["arguments"]
        .as_array()
        .map(|args| {
            args.iter()
                .map(|a| a.as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default();

    match state.read().await.views.get(&(function, arguments)) {
        Some(values) => (StatusCode::OK, Json(values.clone())).into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "message": "Move abort in resolver: ENO_RESOLVER(0x60001)",
                "error_code": "invalid_input",
                "vm_error_code": 4016
            })),
        )
            .into_response(),
    }
}
