//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! One datagram out, one datagram back, bounded by a single per-attempt
//! timeout. No retries and no TCP fallback: a truncated response is
//! parsed as-is.

use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use async_trait::async_trait;
use ferrous_walk_application::ports::DnsTransport;
use ferrous_walk_domain::{DnsMessage, DomainError, LookupRecordType, ResolverConfig};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    port: u16,
    timeout: Duration,
    recursion_desired: bool,
}

impl UdpTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            port: 53,
            timeout,
            recursion_desired: true,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Self {
        Self::new(config.query_timeout())
            .with_port(config.dns_port)
            .with_recursion_desired(config.recursion_desired)
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_recursion_desired(mut self, recursion_desired: bool) -> Self {
        self.recursion_desired = recursion_desired;
        self
    }

    pub fn protocol_name(&self) -> &'static str {
        "UDP"
    }

    fn server_addr(&self, server: Ipv4Addr) -> SocketAddr {
        SocketAddr::from((server, self.port))
    }

    async fn exchange(
        &self,
        server_addr: SocketAddr,
        request: &[u8],
    ) -> Result<Vec<u8>, DomainError> {
        let failure = |reason: String| DomainError::TransportFailure {
            server: server_addr.to_string(),
            reason,
        };

        let socket = UdpSocket::bind(SocketAddr::from(([0, 0, 0, 0], 0)))
            .await
            .map_err(|e| failure(format!("Failed to bind UDP socket: {}", e)))?;

        // Connected socket: datagrams from any other source are dropped by the kernel.
        socket
            .connect(server_addr)
            .await
            .map_err(|e| failure(format!("Failed to connect: {}", e)))?;

        let bytes_sent = socket
            .send(request)
            .await
            .map_err(|e| failure(format!("Failed to send query: {}", e)))?;

        debug!(
            protocol = self.protocol_name(),
            server = %server_addr,
            bytes_sent = bytes_sent,
            "Query sent"
        );

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        let bytes_received = socket
            .recv(&mut recv_buf)
            .await
            .map_err(|e| failure(format!("Failed to receive response: {}", e)))?;

        recv_buf.truncate(bytes_received);

        debug!(
            protocol = self.protocol_name(),
            server = %server_addr,
            bytes_received = bytes_received,
            "Response received"
        );

        Ok(recv_buf)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn query(&self, server: Ipv4Addr, domain: &str) -> Result<DnsMessage, DomainError> {
        let server_addr = self.server_addr(server);
        let request = MessageBuilder::build_query(domain, LookupRecordType::A, self.recursion_desired)?;

        let response = tokio::time::timeout(self.timeout, self.exchange(server_addr, &request))
            .await
            .map_err(|_| DomainError::TransportFailure {
                server: server_addr.to_string(),
                reason: format!("timed out after {:?}", self.timeout),
            })??;

        validate_response_id(&request, &response, server_addr)?;

        let message = ResponseParser::parse(&response).map_err(|e| DomainError::TransportFailure {
            server: server_addr.to_string(),
            reason: e.to_string(),
        })?;

        debug!(
            protocol = self.protocol_name(),
            server = %server_addr,
            status = message.header.status,
            referral = ResponseParser::is_referral(&message),
            "Exchange complete"
        );

        Ok(message)
    }
}

fn validate_response_id(
    request: &[u8],
    response: &[u8],
    server_addr: SocketAddr,
) -> Result<(), DomainError> {
    if request.len() < 2 || response.len() < 2 {
        return Err(DomainError::TransportFailure {
            server: server_addr.to_string(),
            reason: "message too short to carry an ID".to_string(),
        });
    }

    let request_id = u16::from_be_bytes([request[0], request[1]]);
    let response_id = u16::from_be_bytes([response[0], response[1]]);

    if request_id != response_id {
        return Err(DomainError::TransportFailure {
            server: server_addr.to_string(),
            reason: format!(
                "DNS ID mismatch: sent {:#06x}, received {:#06x}",
                request_id, response_id
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
