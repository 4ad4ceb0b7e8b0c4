//! DNS wire-format names
//!
//! The Aptos resolver keys every record by the DNS wire encoding of the
//! name (`[5]alice[3]apt[0]`), the same form ENSIP-10 uses for the `name`
//! argument of `resolve(bytes,bytes)`. Encoding and decoding go through
//! `hickory-proto` so label and name length limits match DNS exactly.

use super::{ChainKey, DomainError};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable, BinEncoder};
use std::fmt;
use std::sync::Arc;

/// DNS wire encoding of a fully-qualified name. Immutable once built.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DnsNode(Arc<[u8]>);

impl DnsNode {
    /// Encode a dotted name into wire format.
    ///
    /// One trailing dot is tolerated; empty interior labels are rejected.
    /// Labels are taken as raw bytes: no IDNA mapping, no case folding.
    pub fn encode(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.strip_suffix('.').unwrap_or(name);

        let labels: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('.').collect()
        };

        if labels.iter().any(|l| l.is_empty()) {
            return Err(DomainError::EncodingError(format!(
                "Empty label in name '{}'",
                name
            )));
        }

        let dns_name = Name::from_labels(labels.iter().map(|l| l.as_bytes())).map_err(|e| {
            DomainError::EncodingError(format!("Invalid name '{}': {}", name, e))
        })?;

        let mut buf = Vec::with_capacity(trimmed.len() + 2);
        let mut encoder = BinEncoder::new(&mut buf);
        dns_name.emit(&mut encoder).map_err(|e| {
            DomainError::EncodingError(format!("Failed to encode name '{}': {}", name, e))
        })?;

        Ok(Self(Arc::from(buf)))
    }

    /// Wrap wire bytes received from a client, validating them by decoding.
    pub fn from_wire(bytes: &[u8]) -> Result<Self, DomainError> {
        let node = Self(Arc::from(bytes));
        node.decode()?;
        Ok(node)
    }

    /// Decode back into a dotted name without the trailing root dot.
    ///
    /// Labels that would not survive re-encoding (invalid UTF-8, embedded
    /// dots) are rejected.
    pub fn decode(&self) -> Result<String, DomainError> {
        let name = Name::from_bytes(&self.0).map_err(|e| {
            DomainError::EncodingError(format!("Malformed DNS wire name: {}", e))
        })?;

        let labels = name
            .iter()
            .map(|label| {
                let label = std::str::from_utf8(label).map_err(|_| {
                    DomainError::EncodingError("DNS label is not valid UTF-8".into())
                })?;
                if label.contains('.') {
                    return Err(DomainError::EncodingError(format!(
                        "DNS label '{}' contains a dot",
                        label
                    )));
                }
                Ok(label)
            })
            .collect::<Result<Vec<&str>, DomainError>>()?;

        Ok(labels.join("."))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// `0x`-prefixed hex, the form Aptos REST expects for `vector<u8>` arguments.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.0))
    }
}

impl fmt::Debug for DnsNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DnsNode({})", self.to_hex())
    }
}

/// Reserved ENS subtree that routes names to the Aptos naming system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewaySuffix {
    labels: Vec<String>,
    native_tld: String,
}

impl GatewaySuffix {
    pub fn new(suffix: &str, native_tld: &str) -> Result<Self, DomainError> {
        let labels: Vec<String> = suffix
            .trim_matches('.')
            .split('.')
            .map(|l| l.to_ascii_lowercase())
            .collect();

        if labels.iter().any(|l| l.is_empty()) {
            return Err(DomainError::InvalidRequest(format!(
                "Invalid gateway suffix '{}'",
                suffix
            )));
        }

        let native_tld = native_tld.trim_matches('.').to_ascii_lowercase();
        if native_tld.is_empty() || native_tld.contains('.') {
            return Err(DomainError::InvalidRequest(format!(
                "Invalid native TLD '{}'",
                native_tld
            )));
        }

        Ok(Self { labels, native_tld })
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn native_tld(&self) -> &str {
        &self.native_tld
    }

    fn matches_tail(&self, labels: &[&str]) -> bool {
        if labels.len() < self.labels.len() {
            return false;
        }
        let tail = &labels[labels.len() - self.labels.len()..];
        tail.iter()
            .zip(self.labels.iter())
            .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl Default for GatewaySuffix {
    fn default() -> Self {
        Self {
            labels: vec!["apt-gw".to_string(), "eth".to_string()],
            native_tld: "apt".to_string(),
        }
    }
}

/// A name after gateway routing has been decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub raw_name: String,
    /// Name whose wire encoding is used as the resolver node.
    pub normalized_name: String,
    pub chain_key: ChainKey,
    pub is_gateway_suffix: bool,
    pub subdomain: String,
    pub domain: String,
}

impl ParsedName {
    /// Split a name under the gateway suffix into its Aptos-native parts.
    ///
    /// `alice.apt-gw.eth` becomes `alice.apt` with `domain = "alice"`;
    /// `bob.alice.apt-gw.eth` becomes `bob.alice.apt` with
    /// `subdomain = "bob"`, `domain = "alice"`. Names outside the suffix
    /// come back untouched with `is_gateway_suffix = false`. The bare
    /// suffix has no registrant and is rejected as unsupported.
    pub fn split_for_gateway(
        name: &str,
        chain_key: ChainKey,
        suffix: &GatewaySuffix,
    ) -> Result<Self, DomainError> {
        let trimmed = name.strip_suffix('.').unwrap_or(name);
        let labels: Vec<&str> = trimmed.split('.').collect();

        if !suffix.matches_tail(&labels) {
            return Ok(Self {
                raw_name: name.to_string(),
                normalized_name: trimmed.to_string(),
                chain_key,
                is_gateway_suffix: false,
                subdomain: String::new(),
                domain: String::new(),
            });
        }

        let remaining = &labels[..labels.len() - suffix.label_count()];
        if remaining.is_empty() {
            return Err(DomainError::UnsupportedName(format!(
                "'{}' is the gateway root",
                name
            )));
        }
        if remaining.iter().any(|l| l.is_empty()) {
            return Err(DomainError::EncodingError(format!(
                "Empty label in name '{}'",
                name
            )));
        }

        let (subdomain, domain) = if remaining.len() >= 2 {
            (remaining[0], remaining[1])
        } else {
            ("", remaining[0])
        };

        Ok(Self {
            raw_name: name.to_string(),
            normalized_name: format!("{}.{}", remaining.join("."), suffix.native_tld()),
            chain_key,
            is_gateway_suffix: true,
            subdomain: subdomain.to_string(),
            domain: domain.to_string(),
        })
    }

    pub fn node(&self) -> Result<DnsNode, DomainError> {
        DnsNode::encode(&self.normalized_name)
    }
}
