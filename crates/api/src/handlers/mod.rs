pub mod ccip;
pub mod health;
pub mod names;
pub mod profile;

pub use health::health_check;

use axum::http::StatusCode;
use ens_apt_domain::DomainError;

/// Status for the JSON read endpoints. The CCIP-Read route always answers 500.
pub(crate) fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::UnknownChain(_) | DomainError::DomainNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::InvalidRequest(_)
        | DomainError::EncodingError(_)
        | DomainError::UnsupportedName(_) => StatusCode::BAD_REQUEST,
        DomainError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
