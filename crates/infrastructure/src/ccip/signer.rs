use alloy::primitives::{keccak256, Address, Bytes, B256};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use alloy::sol_types::SolValue;
use chrono::Utc;
use ens_apt_domain::{DomainError, SigningProtocol};
use std::fmt;
use std::time::Duration;

/// EIP-191 version 0 prefix ("data with intended validator").
const EIP191_VALIDATOR_PREFIX: [u8; 2] = [0x19, 0x00];

/// Wraps resolved answers into the envelope the on-chain resolver verifies.
pub struct ResponseSigner {
    key: Option<PrivateKeySigner>,
    protocol: SigningProtocol,
    ttl: Duration,
}

impl ResponseSigner {
    /// A key is mandatory unless `protocol` is [`SigningProtocol::Raw`].
    pub fn new(
        private_key: Option<&str>,
        protocol: SigningProtocol,
        ttl: Duration,
    ) -> Result<Self, DomainError> {
        let key = match private_key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(raw) => {
                let digits = raw.strip_prefix("0x").unwrap_or(raw);
                Some(digits.parse::<PrivateKeySigner>().map_err(|e| {
                    DomainError::SigningFailed(format!("Invalid signing key: {}", e))
                })?)
            }
            None => None,
        };

        if key.is_none() && protocol != SigningProtocol::Raw {
            return Err(DomainError::SigningFailed(format!(
                "Protocol {:?} needs a signing key",
                protocol
            )));
        }

        Ok(Self { key, protocol, ttl })
    }

    pub fn protocol(&self) -> SigningProtocol {
        self.protocol
    }

    /// Address recovered from our signatures.
    pub fn address(&self) -> Option<Address> {
        self.key.as_ref().map(|k| k.address())
    }

    pub fn sign_response(
        &self,
        resolver: Address,
        request: &[u8],
        response: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let expires = Utc::now().timestamp().max(0) as u64 + self.ttl.as_secs();
        self.sign_response_at(resolver, request, response, expires)
    }

    pub fn sign_response_at(
        &self,
        resolver: Address,
        request: &[u8],
        response: &[u8],
        expires: u64,
    ) -> Result<Vec<u8>, DomainError> {
        match self.protocol {
            SigningProtocol::Raw => Ok(response.to_vec()),
            SigningProtocol::Tor => {
                let hash = signed_hash(None, resolver, expires, request, response);
                let sig = self.sign_hash(&hash)?;
                Ok((sig, expires, Bytes::copy_from_slice(response)).abi_encode_params())
            }
            SigningProtocol::Ens => {
                let hash = signed_hash(
                    Some(&EIP191_VALIDATOR_PREFIX),
                    resolver,
                    expires,
                    request,
                    response,
                );
                let sig = self.sign_hash(&hash)?;
                Ok((Bytes::copy_from_slice(response), expires, sig).abi_encode_params())
            }
        }
    }

    fn sign_hash(&self, hash: &B256) -> Result<Bytes, DomainError> {
        let key = self
            .key
            .as_ref()
            .ok_or_else(|| DomainError::SigningFailed("No signing key loaded".into()))?;
        let signature = key
            .sign_hash_sync(hash)
            .map_err(|e| DomainError::SigningFailed(e.to_string()))?;
        Ok(Bytes::copy_from_slice(&signature.as_bytes()))
    }
}

impl fmt::Debug for ResponseSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseSigner")
            .field("address", &self.address())
            .field("protocol", &self.protocol)
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// `keccak256(prefix ‖ resolver ‖ expires ‖ keccak(request) ‖ keccak(response))`
pub fn signed_hash(
    prefix: Option<&[u8]>,
    resolver: Address,
    expires: u64,
    request: &[u8],
    response: &[u8],
) -> B256 {
    let mut packed = Vec::with_capacity(2 + 20 + 8 + 32 + 32);
    if let Some(prefix) = prefix {
        packed.extend_from_slice(prefix);
    }
    packed.extend_from_slice(resolver.as_slice());
    packed.extend_from_slice(&expires.to_be_bytes());
    packed.extend_from_slice(keccak256(request).as_slice());
    packed.extend_from_slice(keccak256(response).as_slice());
    keccak256(&packed)
}
