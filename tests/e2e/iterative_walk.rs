#![cfg(target_os = "linux")]

use ferrous_walk_application::use_cases::{
    ExtractNextNameserversUseCase, IterativeResolveSettings, ResolveIterativelyUseCase,
};
use ferrous_walk_domain::{DomainError, NameserverCandidate, ResolutionStage};
use ferrous_walk_infrastructure::dns::UdpTransport;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::{Nameserver, StaticRecordResolver, Zone};

const TARGET: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

fn loopback(last: u8) -> Ipv4Addr {
    Ipv4Addr::new(127, 0, 0, last)
}

fn engine(
    port: u16,
    roots: &[Ipv4Addr],
    resolver: StaticRecordResolver,
    timeout: Duration,
) -> ResolveIterativelyUseCase {
    let transport = Arc::new(UdpTransport::new(timeout).with_port(port));
    let extractor = Arc::new(ExtractNextNameserversUseCase::new(Arc::new(resolver)));
    let settings = IterativeResolveSettings {
        root_servers: roots.iter().copied().map(NameserverCandidate::new).collect(),
        max_hops: 16,
        deadline: None,
    };
    ResolveIterativelyUseCase::new(transport, extractor, settings)
}

#[tokio::test]
async fn test_walks_root_tld_auth_over_udp() {
    let (root, port) = Nameserver::start_ephemeral(
        loopback(10),
        Zone::Referral(vec!["a.tld-servers.test.".to_string()]),
    )
    .await
    .unwrap();
    let tld = Nameserver::start(
        loopback(11),
        port,
        Zone::Referral(vec!["ns1.example.test.".to_string()]),
    )
    .await
    .unwrap();
    let auth = Nameserver::start(loopback(12), port, Zone::Answer(TARGET))
        .await
        .unwrap();

    let resolver = StaticRecordResolver::default()
        .with("a.tld-servers.test.", loopback(11))
        .with("ns1.example.test.", loopback(12));

    let resolution = engine(port, &[loopback(10)], resolver, Duration::from_secs(1))
        .execute("www.example.test", &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(resolution.address(), Some(TARGET));
    assert_eq!(resolution.stage, ResolutionStage::Auth);
    assert_eq!(
        resolution.stages,
        vec![
            ResolutionStage::Root,
            ResolutionStage::Tld,
            ResolutionStage::Auth
        ]
    );
    assert_eq!(root.queries(), 1);
    assert_eq!(tld.queries(), 1);
    assert_eq!(auth.queries(), 1);
}

#[tokio::test]
async fn test_silent_root_falls_through_to_next_root() {
    let (silent, port) = Nameserver::start_ephemeral(loopback(20), Zone::Silent)
        .await
        .unwrap();
    let root = Nameserver::start(loopback(21), port, Zone::Answer(TARGET))
        .await
        .unwrap();

    let resolution = engine(
        port,
        &[loopback(20), loopback(21)],
        StaticRecordResolver::default(),
        Duration::from_millis(300),
    )
    .execute("example.test", &CancellationToken::new())
    .await
    .unwrap();

    assert_eq!(resolution.address(), Some(TARGET));
    assert_eq!(resolution.stages, vec![ResolutionStage::Root]);
    assert_eq!(silent.queries(), 1);
    assert_eq!(root.queries(), 1);
}

#[tokio::test]
async fn test_all_roots_silent_fails_at_root() {
    let (first, port) = Nameserver::start_ephemeral(loopback(30), Zone::Silent)
        .await
        .unwrap();
    let second = Nameserver::start(loopback(31), port, Zone::Silent)
        .await
        .unwrap();

    let result = engine(
        port,
        &[loopback(30), loopback(31)],
        StaticRecordResolver::default(),
        Duration::from_millis(200),
    )
    .execute("example.test", &CancellationToken::new())
    .await;

    assert_eq!(
        result,
        Err(DomainError::NoResponseInStage {
            stage: ResolutionStage::Root,
            servers: vec!["127.0.0.30".to_string(), "127.0.0.31".to_string()],
        })
    );
    assert_eq!(first.queries(), 1);
    assert_eq!(second.queries(), 1);
}

#[tokio::test]
async fn test_unresolvable_referral_stops_at_root() {
    let (root, port) = Nameserver::start_ephemeral(
        loopback(40),
        Zone::Referral(vec!["ns.nowhere.test.".to_string()]),
    )
    .await
    .unwrap();

    let result = engine(
        port,
        &[loopback(40)],
        StaticRecordResolver::default(),
        Duration::from_secs(1),
    )
    .execute("example.test", &CancellationToken::new())
    .await;

    assert_eq!(
        result,
        Err(DomainError::NoDelegationFound {
            stage: ResolutionStage::Root
        })
    );
    assert_eq!(root.queries(), 1);
}

#[tokio::test]
async fn test_cancel_interrupts_pending_query() {
    let (_silent, port) = Nameserver::start_ephemeral(loopback(50), Zone::Silent)
        .await
        .unwrap();

    let engine = engine(
        port,
        &[loopback(50)],
        StaticRecordResolver::default(),
        Duration::from_secs(30),
    );
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        engine.execute("example.test", &cancel),
    )
    .await
    .expect("cancellation should end the walk promptly");

    assert_eq!(result, Err(DomainError::Cancelled));
}
