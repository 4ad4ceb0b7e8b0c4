use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use ens_apt_application::use_cases::ResolverProfile;
use ens_apt_domain::{AccountAddress, ChainKey};
use tracing::{debug, error};

use super::status_for;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/{chain}/{target}/profile/{name}", get(get_profile))
}

async fn get_profile(
    State(state): State<AppState>,
    Path((chain, account, name)): Path<(String, String, String)>,
) -> Result<Json<ResolverProfile>, (StatusCode, String)> {
    let account = AccountAddress::parse(&account)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    match state
        .get_profile
        .execute(&ChainKey::new(chain.as_str()), &account, &name)
        .await
    {
        Ok(profile) => {
            debug!(
                name = %profile.name,
                texts = profile.texts.len(),
                addresses = profile.addresses.len(),
                "Profile retrieved"
            );
            Ok(Json(profile))
        }
        Err(e) => {
            error!(error = %e, "Failed to read profile");
            Err((status_for(&e), e.to_string()))
        }
    }
}
