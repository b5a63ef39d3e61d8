use crate::ResolutionStage;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query to {server} failed: {reason}")]
    TransportFailure { server: String, reason: String },

    #[error("Resolution failed. No response from {stage} servers: {servers:?}")]
    NoResponseInStage {
        stage: ResolutionStage,
        servers: Vec<String>,
    },

    #[error("List of nameservers is empty after {stage} referral. Resolution failed.")]
    NoDelegationFound { stage: ResolutionStage },

    #[error("Failed to resolve NS {hostname}: {reason}")]
    HostnameResolutionFailure { hostname: String, reason: String },

    #[error("Delegation chain exceeded {hops} hops")]
    HopLimitExceeded { hops: usize },

    #[error("Resolution cancelled")]
    Cancelled,

    #[error("Resolution deadline exceeded")]
    DeadlineExceeded,

    #[error("Lookup of {record_type} records for {name} failed: {reason}")]
    RecordLookupFailed {
        name: String,
        record_type: &'static str,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
