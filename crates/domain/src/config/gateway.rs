use serde::{Deserialize, Serialize};

/// How the CCIP-Read answer is wrapped before it is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningProtocol {
    /// `(bytes sig, uint64 expires, bytes data)`, signed over
    /// `resolver ‖ expires ‖ keccak(request) ‖ keccak(response)`
    #[default]
    Tor,
    /// `(bytes data, uint64 expires, bytes sig)` with the EIP-191 `0x1900` prefix
    Ens,
    /// Unsigned answer
    Raw,
}

/// Gateway routing and response settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// ENS subtree routed to Aptos names (default: "apt-gw.eth")
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// TLD the stripped name is re-rooted under (default: "apt")
    #[serde(default = "default_native_tld")]
    pub native_tld: String,

    /// Validity window of a signed response in seconds (default: 60)
    #[serde(default = "default_signature_ttl")]
    pub signature_ttl: u64,

    #[serde(default)]
    pub protocol: SigningProtocol,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            native_tld: default_native_tld(),
            signature_ttl: default_signature_ttl(),
            protocol: SigningProtocol::default(),
        }
    }
}

fn default_suffix() -> String {
    "apt-gw.eth".to_string()
}

fn default_native_tld() -> String {
    "apt".to_string()
}

fn default_signature_ttl() -> u64 {
    60
}
