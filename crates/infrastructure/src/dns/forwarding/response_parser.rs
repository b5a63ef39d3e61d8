use super::record_type_map::RecordTypeMapper;
use ferrous_walk_domain::{DnsMessage, DomainError, MessageHeader, RecordKind, ResourceRecord};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsMessage, DomainError> {
        let message = Message::from_vec(response_bytes)
            .map_err(|e| DomainError::InvalidDnsResponse(e.to_string()))?;

        Ok(Self::from_message(&message))
    }

    pub fn from_message(message: &Message) -> DnsMessage {
        let header = MessageHeader {
            id: message.id(),
            status: Self::rcode_to_status(message.response_code()),
            authoritative: message.authoritative(),
            truncated: message.truncated(),
        };

        let parsed = DnsMessage {
            header,
            answers: Self::convert_section(message.answers()),
            authority: Self::convert_section(message.name_servers()),
            additional: Self::convert_section(message.additionals()),
        };

        debug!(
            id = parsed.header.id,
            rcode = parsed.header.status,
            answers = parsed.answers.len(),
            authority = parsed.authority.len(),
            additional = parsed.additional.len(),
            truncated = parsed.header.truncated,
            "DNS response parsed"
        );

        parsed
    }

    fn convert_section(records: &[Record]) -> Vec<ResourceRecord> {
        records.iter().map(Self::convert_record).collect()
    }

    fn convert_record(record: &Record) -> ResourceRecord {
        let name = record.name().to_utf8();
        let kind = RecordTypeMapper::from_hickory(record.record_type());

        let data = match record.data() {
            Some(RData::A(a)) => a.0.to_string(),
            Some(RData::NS(ns)) => ns.0.to_utf8(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        ResourceRecord::new(name, kind, data)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }

    pub fn is_referral(message: &DnsMessage) -> bool {
        message.answers.is_empty()
            && message
                .authority
                .iter()
                .any(|record| record.record_type == RecordKind::NS)
    }
}
