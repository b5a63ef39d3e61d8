use crate::dns_record::ResourceRecord;
use crate::stage::ResolutionStage;
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Successful outcome of an iterative walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub domain: Arc<str>,
    /// First record of the answer section, reported as-is (no CNAME chasing).
    pub answer: ResourceRecord,
    pub stage: ResolutionStage,
    /// Stage of every round, in order. Always starts at `Root`.
    pub stages: Vec<ResolutionStage>,
}

impl Resolution {
    pub fn address(&self) -> Option<Ipv4Addr> {
        self.answer.ipv4()
    }

    pub fn hops(&self) -> usize {
        self.stages.len()
    }
}

/// Result of the recursive fallback: both phases run independently.
#[derive(Debug, Clone)]
pub struct RecursiveLookupReport {
    pub domain: Arc<str>,
    pub nameservers: Result<Vec<String>, crate::DomainError>,
    pub addresses: Result<Vec<String>, crate::DomainError>,
}
