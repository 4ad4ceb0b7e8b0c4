use serde::{Deserialize, Serialize};

/// EIP-3668 POST body.
#[derive(Debug, Clone, Deserialize)]
pub struct CcipReadBody {
    #[serde(default)]
    pub sender: Option<String>,
    /// `0x`-hex calldata of `resolve(bytes,bytes)`
    pub data: String,
}

impl CcipReadBody {
    pub fn calldata(&self) -> Result<Vec<u8>, String> {
        let digits = self.data.strip_prefix("0x").unwrap_or(&self.data);
        hex::decode(digits).map_err(|e| format!("Invalid calldata hex: {}", e))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CcipReadResponse {
    pub data: String,
}

impl CcipReadResponse {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: format!("0x{}", hex::encode(bytes)),
        }
    }
}
