//! Mapping between the walker's record types and `hickory_proto::rr::RecordType`.

use ferrous_walk_domain::{LookupRecordType, RecordKind};
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert a lookup type → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: LookupRecordType) -> HickoryRecordType {
        match record_type {
            LookupRecordType::A => HickoryRecordType::A,
            LookupRecordType::NS => HickoryRecordType::NS,
        }
    }

    /// Convert hickory RecordType → record kind (for parsed responses)
    pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordKind {
        RecordKind::from_u16(u16::from(hickory_type))
    }
}
