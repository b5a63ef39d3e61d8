//! Ferrous Walk Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod lookup;
pub mod nameserver;
pub mod resolution;
pub mod stage;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig, RootServerEntry};
pub use dns_message::{DnsMessage, MessageHeader};
pub use dns_record::{RecordKind, ResourceRecord};
pub use errors::DomainError;
pub use lookup::{LookupMode, LookupRecordType};
pub use nameserver::NameserverCandidate;
pub use resolution::{RecursiveLookupReport, Resolution};
pub use stage::ResolutionStage;
