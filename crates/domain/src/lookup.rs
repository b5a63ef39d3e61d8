use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    Iterative,
    Recursive,
}

impl LookupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupMode::Iterative => "iterative",
            LookupMode::Recursive => "recursive",
        }
    }
}

impl FromStr for LookupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iterative" => Ok(LookupMode::Iterative),
            "recursive" => Ok(LookupMode::Recursive),
            _ => Err(format!("Unknown lookup mode: {}", s)),
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record types requested from the system resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupRecordType {
    A,
    NS,
}

impl LookupRecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupRecordType::A => "A",
            LookupRecordType::NS => "NS",
        }
    }
}

impl fmt::Display for LookupRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
