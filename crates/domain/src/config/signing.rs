use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable consulted when no key is configured.
pub const SIGNING_KEY_ENV: &str = "SIGNING_KEY";

#[derive(Clone, Default, Deserialize, Serialize)]
pub struct SigningConfig {
    /// Hex-encoded secp256k1 private key
    #[serde(default)]
    pub private_key: Option<String>,
}

impl fmt::Debug for SigningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningConfig")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
