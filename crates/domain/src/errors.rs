use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown chain: {0}")]
    UnknownChain(String),

    #[error("Domain not found: {0}")]
    DomainNotFound(String),

    #[error("View call failed: {0}")]
    ViewCallFailed(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("Unsupported name: {0}")]
    UnsupportedName(String),

    #[error("Indexer query failed: {0}")]
    IndexerQueryFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported resolver call: {0}")]
    UnsupportedCall(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Timeout: {0}")]
    Timeout(String),
}

impl DomainError {
    /// Errors that a single field lookup absorbs into its sentinel value.
    pub fn is_field_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::ViewCallFailed(_)
                | DomainError::EncodingError(_)
                | DomainError::Timeout(_)
                | DomainError::DomainNotFound(_)
        )
    }
}
