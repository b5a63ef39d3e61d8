use async_trait::async_trait;
use ferrous_walk_domain::{DomainError, LookupRecordType};

/// The system's recursive resolver, asked for whole record sets.
///
/// Records come back in presentation form: address text for A, target
/// hostname for NS.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve_record(
        &self,
        name: &str,
        record_type: LookupRecordType,
    ) -> Result<Vec<String>, DomainError>;
}
