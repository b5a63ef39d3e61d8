#![allow(dead_code)]

#[allow(unused_imports)]
pub use mock_ports::{MockDnsTransport, MockRecordResolver, ServerBehavior};

use ferrous_walk_domain::{DnsMessage, ResourceRecord};
use std::net::Ipv4Addr;

pub fn ip(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

pub fn answer(domain: &str, address: &str) -> DnsMessage {
    DnsMessage::answer(ResourceRecord::a(domain, ip(address)))
}

pub fn referral(zone: &str, hostnames: &[&str]) -> DnsMessage {
    DnsMessage::referral(
        hostnames
            .iter()
            .map(|hostname| ResourceRecord::ns(zone, *hostname))
            .collect(),
    )
}
