//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_walk_domain::{DomainError, LookupRecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard query with a random ID, a single question of
    /// class IN, and the RD flag set as requested.
    pub fn build_query(
        domain: &str,
        record_type: LookupRecordType,
        recursion_desired: bool,
    ) -> Result<Vec<u8>, DomainError> {
        Self::build_query_with_id(domain, record_type, recursion_desired).map(|(_, bytes)| bytes)
    }

    /// Build a query message and return both the ID and bytes
    ///
    /// The ID is needed to match the response.
    pub fn build_query_with_id(
        domain: &str,
        record_type: LookupRecordType,
        recursion_desired: bool,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Self::parse_name(domain)?;

        let mut query = Query::query(name, RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new();
        message
            .set_id(id)
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(recursion_desired);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn parse_name(domain: &str) -> Result<Name, DomainError> {
        if domain.trim().is_empty() {
            return Err(DomainError::InvalidDomainName(
                "Domain name is empty".to_string(),
            ));
        }

        Name::from_str(domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
