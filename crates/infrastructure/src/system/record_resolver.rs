//! Record lookups through the host's configured resolver.
//!
//! Used for nameserver hostnames during the iterative walk and for both
//! phases of recursive mode. Nothing is cached between calls.

use async_trait::async_trait;
use ferrous_walk_application::ports::RecordResolver;
use ferrous_walk_domain::{DomainError, LookupRecordType};
use hickory_resolver::config::{ResolverConfig as HickoryResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::RData;
use hickory_resolver::TokioAsyncResolver;
use std::time::Duration;
use tracing::{debug, warn};

use crate::dns::forwarding::RecordTypeMapper;

pub struct SystemRecordResolver {
    resolver: TokioAsyncResolver,
}

impl SystemRecordResolver {
    /// Build from `/etc/resolv.conf` (or the platform equivalent), falling
    /// back to hickory's default upstreams when it cannot be read.
    pub fn new(timeout: Duration) -> Self {
        let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
            Ok(system) => system,
            Err(e) => {
                warn!(error = %e, "Failed to read system resolver config, using defaults");
                (HickoryResolverConfig::default(), ResolverOpts::default())
            }
        };

        opts.timeout = timeout;
        opts.attempts = 1;
        opts.ndots = 0;
        opts.cache_size = 0;

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }

    fn render(rdata: &RData) -> Option<String> {
        match rdata {
            RData::A(a) => Some(a.0.to_string()),
            RData::NS(ns) => Some(ns.0.to_utf8()),
            _ => None,
        }
    }
}

#[async_trait]
impl RecordResolver for SystemRecordResolver {
    async fn resolve_record(
        &self,
        name: &str,
        record_type: LookupRecordType,
    ) -> Result<Vec<String>, DomainError> {
        debug!(name = %name, record_type = %record_type, "System resolver lookup");

        let lookup = self
            .resolver
            .lookup(name, RecordTypeMapper::to_hickory(record_type))
            .await
            .map_err(|e| DomainError::RecordLookupFailed {
                name: name.to_string(),
                record_type: record_type.as_str(),
                reason: e.to_string(),
            })?;

        let values: Vec<String> = lookup.iter().filter_map(Self::render).collect();

        if values.is_empty() {
            return Err(DomainError::RecordLookupFailed {
                name: name.to_string(),
                record_type: record_type.as_str(),
                reason: "no records returned".to_string(),
            });
        }

        debug!(name = %name, count = values.len(), "System resolver lookup complete");
        Ok(values)
    }
}
