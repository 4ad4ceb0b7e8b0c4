use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use ens_apt_application::use_cases::OwnedName;
use ens_apt_domain::{AccountAddress, ChainKey};
use tracing::{debug, error};

use super::status_for;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/{chain}/owners/{account}/names", get(list_owned_names))
}

async fn list_owned_names(
    State(state): State<AppState>,
    Path((chain, account)): Path<(String, String)>,
) -> Result<Json<Vec<OwnedName>>, (StatusCode, String)> {
    let owner = AccountAddress::parse(&account)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    match state
        .list_names
        .execute(&ChainKey::new(chain.as_str()), &owner)
        .await
    {
        Ok(names) => {
            debug!(count = names.len(), "Owned names listed");
            Ok(Json(names))
        }
        Err(e) => {
            error!(error = %e, "Failed to list owned names");
            Err((status_for(&e), e.to_string()))
        }
    }
}
