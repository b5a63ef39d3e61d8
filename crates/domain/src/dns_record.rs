use std::fmt;
use std::net::Ipv4Addr;

/// Record types the walker distinguishes. Everything else is carried
/// through as `Other` with its wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    A,
    NS,
    Other(u16),
}

impl RecordKind {
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordKind::A,
            2 => RecordKind::NS,
            other => RecordKind::Other(other),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::A => f.write_str("A"),
            RecordKind::NS => f.write_str("NS"),
            RecordKind::Other(code) => write!(f, "TYPE{}", code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordKind,
    /// Address text for A, target hostname for NS, presentation text otherwise.
    pub data: String,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, record_type: RecordKind, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            data: data.into(),
        }
    }

    pub fn a(name: impl Into<String>, address: Ipv4Addr) -> Self {
        Self::new(name, RecordKind::A, address.to_string())
    }

    pub fn ns(name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self::new(name, RecordKind::NS, hostname)
    }

    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        match self.record_type {
            RecordKind::A => self.data.parse().ok(),
            _ => None,
        }
    }

    pub fn is_ns(&self) -> bool {
        self.record_type == RecordKind::NS
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.record_type, self.data)
    }
}
