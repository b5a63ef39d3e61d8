use async_trait::async_trait;
use ferrous_walk_domain::{DnsMessage, DomainError};
use std::net::Ipv4Addr;

/// Sends one A query for `domain` to one server.
///
/// Any failure (timeout, unreachable server, malformed datagram) is an
/// `Err`; callers do not distinguish between them. A response with a
/// non-NOERROR status is still `Ok`.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn query(&self, server: Ipv4Addr, domain: &str) -> Result<DnsMessage, DomainError>;
}
