use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all gateway routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(handlers::ccip::routes())
        .merge(handlers::profile::routes())
        .merge(handlers::names::routes())
        .with_state(state)
}
