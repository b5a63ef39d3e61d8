use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::Ipv4Addr;
use std::sync::Arc;

/// A server the engine may query in the current round.
///
/// Identity is the address alone; the label only decorates log output
/// and is set for root servers.
#[derive(Debug, Clone)]
pub struct NameserverCandidate {
    pub address: Ipv4Addr,
    pub label: Option<Arc<str>>,
}

impl NameserverCandidate {
    pub fn new(address: Ipv4Addr) -> Self {
        Self {
            address,
            label: None,
        }
    }

    pub fn labeled(address: Ipv4Addr, label: &str) -> Self {
        Self {
            address,
            label: Some(label.into()),
        }
    }
}

impl PartialEq for NameserverCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

impl Eq for NameserverCandidate {}

impl Hash for NameserverCandidate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address.hash(state);
    }
}

impl From<Ipv4Addr> for NameserverCandidate {
    fn from(address: Ipv4Addr) -> Self {
        Self::new(address)
    }
}

impl fmt::Display for NameserverCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{} [{}]", self.address, label),
            None => write!(f, "{}", self.address),
        }
    }
}
