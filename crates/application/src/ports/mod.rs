mod dns_transport;
mod record_resolver;

pub use dns_transport::DnsTransport;
pub use record_resolver::RecordResolver;
