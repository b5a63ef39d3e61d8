use crate::ports::RecordResolver;
use ferrous_walk_domain::{DomainError, LookupRecordType, RecursiveLookupReport};
use std::sync::Arc;
use tracing::{info, warn};

/// Hands the whole question to the system resolver: NS records first,
/// then A records. A failure in one phase does not skip the other.
pub struct RecursiveLookupUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl RecursiveLookupUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, domain: &str) -> RecursiveLookupReport {
        info!("[Recursive DNS Lookup] Resolving {}", domain);

        let nameservers = self.lookup_phase(domain, LookupRecordType::NS).await;
        let addresses = self.lookup_phase(domain, LookupRecordType::A).await;

        RecursiveLookupReport {
            domain: domain.into(),
            nameservers,
            addresses,
        }
    }

    async fn lookup_phase(
        &self,
        domain: &str,
        record_type: LookupRecordType,
    ) -> Result<Vec<String>, DomainError> {
        match self.resolver.resolve_record(domain, record_type).await {
            Ok(records) => {
                info!(
                    domain = %domain,
                    record_type = %record_type,
                    count = records.len(),
                    "Recursive lookup phase succeeded"
                );
                Ok(records)
            }
            Err(e) => {
                warn!(
                    domain = %domain,
                    record_type = %record_type,
                    error = %e,
                    "Recursive lookup phase failed"
                );
                Err(e)
            }
        }
    }
}
