use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use ens_apt_domain::ChainKey;
use ens_apt_infrastructure::CcipReadRequest;
use tracing::{debug, error, warn};

use crate::{
    dto::{CcipReadBody, CcipReadResponse},
    state::AppState,
};

const INTERNAL_ERROR: &str = "Internal Server Error";

pub fn routes() -> Router<AppState> {
    Router::new().route("/{chain}/{target}", post(ccip_read))
}

/// The body is parsed by hand: clients post it as JSON or as `text/plain`.
async fn ccip_read(
    State(state): State<AppState>,
    Path((chain, target)): Path<(String, String)>,
    body: Bytes,
) -> Result<Json<CcipReadResponse>, (StatusCode, String)> {
    let body: CcipReadBody = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Malformed CCIP-Read body");
        (StatusCode::BAD_REQUEST, format!("Malformed request body: {}", e))
    })?;

    let calldata = body.calldata().map_err(|e| {
        warn!(error = %e, "CCIP-Read data is not hex");
        (StatusCode::BAD_REQUEST, e)
    })?;

    let result = match CcipReadRequest::parse_target(&target) {
        Ok(context) => {
            let request = CcipReadRequest {
                chain: ChainKey::new(chain.as_str()),
                context,
                sender: body.sender,
                calldata,
            };
            state.ccip.handle(&request).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(envelope) => {
            debug!(chain = %chain, target = %target, "CCIP-Read request served");
            Ok(Json(CcipReadResponse::from_bytes(&envelope)))
        }
        Err(e) => {
            error!(chain = %chain, target = %target, error = %e, "Error handling CCIP-Read request");
            Err((StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string()))
        }
    }
}
