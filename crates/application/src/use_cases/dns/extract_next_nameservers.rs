use crate::ports::RecordResolver;
use ferrous_walk_domain::{DnsMessage, DomainError, LookupRecordType};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{info, warn};

/// Turns a referral into the next list of servers to query.
///
/// NS hostnames are taken from the authority section in encounter order
/// and resolved one by one through the system resolver. A hostname that
/// cannot be resolved contributes nothing; it never aborts the extraction.
/// Nothing is cached between calls.
pub struct ExtractNextNameserversUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl ExtractNextNameserversUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, message: &DnsMessage) -> Vec<Ipv4Addr> {
        let hostnames: Vec<&str> = message.referral_hostnames().collect();
        for hostname in &hostnames {
            info!("Extracted NS hostname: {}", hostname);
        }

        let mut addresses = Vec::with_capacity(hostnames.len());

        for hostname in hostnames {
            match self
                .resolver
                .resolve_record(hostname, LookupRecordType::A)
                .await
            {
                Ok(records) => {
                    for record in records {
                        match record.parse::<Ipv4Addr>() {
                            Ok(address) => {
                                info!("Resolved {} to {}", hostname, address);
                                addresses.push(address);
                            }
                            Err(_) => {
                                warn!(
                                    hostname = %hostname,
                                    record = %record,
                                    "Ignoring non-IPv4 record for NS hostname"
                                );
                            }
                        }
                    }
                }
                Err(e) => {
                    let failure = DomainError::HostnameResolutionFailure {
                        hostname: hostname.to_string(),
                        reason: e.to_string(),
                    };
                    warn!("[ERROR] {}", failure);
                }
            }
        }

        addresses
    }
}
