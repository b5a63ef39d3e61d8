use crate::dns_record::ResourceRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageHeader {
    pub id: u16,
    pub status: &'static str,
    pub authoritative: bool,
    pub truncated: bool,
}

impl Default for MessageHeader {
    fn default() -> Self {
        Self {
            id: 0,
            status: "NOERROR",
            authoritative: false,
            truncated: false,
        }
    }
}

/// A parsed response, owned by the query that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsMessage {
    pub header: MessageHeader,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl DnsMessage {
    pub fn answer(record: ResourceRecord) -> Self {
        Self {
            answers: vec![record],
            ..Self::default()
        }
    }

    pub fn referral(authority: Vec<ResourceRecord>) -> Self {
        Self {
            authority,
            ..Self::default()
        }
    }

    pub fn first_answer(&self) -> Option<&ResourceRecord> {
        self.answers.first()
    }

    /// NS targets in the authority section, in encounter order, duplicates kept.
    pub fn referral_hostnames(&self) -> impl Iterator<Item = &str> {
        self.authority
            .iter()
            .filter(|record| record.is_ns())
            .map(|record| record.data.as_str())
    }
}
