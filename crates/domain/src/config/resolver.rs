use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

use super::errors::ConfigError;
use crate::NameserverCandidate;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RootServerEntry {
    pub address: Ipv4Addr,
    #[serde(default)]
    pub label: Option<String>,
}

impl RootServerEntry {
    pub fn new(address: Ipv4Addr, label: &str) -> Self {
        Self {
            address,
            label: Some(label.to_string()),
        }
    }

    pub fn to_candidate(&self) -> NameserverCandidate {
        match &self.label {
            Some(label) => NameserverCandidate::labeled(self.address, label),
            None => NameserverCandidate::new(self.address),
        }
    }
}

/// Settings for the iterative walk. Root servers are tried in list order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<RootServerEntry>,

    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Upper bound on rounds; 0 disables the bound.
    #[serde(default = "default_max_hops")]
    pub max_hops: usize,

    #[serde(default)]
    pub resolve_deadline_secs: Option<u64>,

    #[serde(default = "default_true")]
    pub recursion_desired: bool,
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    pub fn resolve_deadline(&self) -> Option<Duration> {
        self.resolve_deadline_secs.map(Duration::from_secs)
    }

    pub fn root_candidates(&self) -> Vec<NameserverCandidate> {
        self.root_servers
            .iter()
            .map(RootServerEntry::to_candidate)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }
        if self.query_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }
        if self.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            query_timeout_secs: default_query_timeout_secs(),
            dns_port: default_dns_port(),
            max_hops: default_max_hops(),
            resolve_deadline_secs: None,
            recursion_desired: true,
        }
    }
}

fn default_root_servers() -> Vec<RootServerEntry> {
    vec![
        RootServerEntry::new(Ipv4Addr::new(198, 41, 0, 4), "Root (a.root-servers.net)"),
        RootServerEntry::new(Ipv4Addr::new(199, 9, 14, 201), "Root (b.root-servers.net)"),
        RootServerEntry::new(Ipv4Addr::new(192, 33, 4, 12), "Root (c.root-servers.net)"),
        RootServerEntry::new(Ipv4Addr::new(199, 7, 91, 13), "Root (d.root-servers.net)"),
        RootServerEntry::new(Ipv4Addr::new(192, 203, 230, 10), "Root (e.root-servers.net)"),
    ]
}

fn default_query_timeout_secs() -> u64 {
    3
}

fn default_dns_port() -> u16 {
    53
}

fn default_max_hops() -> usize {
    16
}

fn default_true() -> bool {
    true
}
