#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_walk_application::ports::RecordResolver;
use ferrous_walk_domain::{DomainError, LookupRecordType};
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

#[derive(Debug, Clone)]
pub enum Zone {
    Answer(Ipv4Addr),
    Referral(Vec<String>),
    Silent,
}

/// One nameserver bound to `ip:port` on loopback.
pub struct Nameserver {
    shutdown_tx: Option<oneshot::Sender<()>>,
    queries: Arc<Mutex<usize>>,
}

impl Nameserver {
    pub async fn start(ip: Ipv4Addr, port: u16, zone: Zone) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(SocketAddr::from((ip, port))).await?;
        Ok(Self::serve(socket, zone))
    }

    /// Bind the first server on an ephemeral port; the rest of the network
    /// reuses that port on their own addresses.
    pub async fn start_ephemeral(ip: Ipv4Addr, zone: Zone) -> std::io::Result<(Self, u16)> {
        let socket = UdpSocket::bind(SocketAddr::from((ip, 0))).await?;
        let port = socket.local_addr()?.port();
        Ok((Self::serve(socket, zone), port))
    }

    pub fn queries(&self) -> usize {
        *self.queries.lock().unwrap()
    }

    fn serve(socket: UdpSocket, zone: Zone) -> Self {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();
        let queries = Arc::new(Mutex::new(0));
        let counter = queries.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            *counter.lock().unwrap() += 1;
                            if let Some(reply) = respond(&buf[..len], &zone) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Self {
            shutdown_tx: Some(shutdown_tx),
            queries,
        }
    }
}

impl Drop for Nameserver {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn respond(query: &[u8], zone: &Zone) -> Option<Vec<u8>> {
    let request = Message::from_vec(query).ok()?;
    let question = request.queries().first()?.clone();
    let qname = question.name().clone();

    let mut response = Message::new();
    response
        .set_id(request.id())
        .set_message_type(MessageType::Response);
    response.add_query(question);

    match zone {
        Zone::Answer(ip) => {
            response.set_authoritative(true);
            response.add_answer(Record::from_rdata(qname, 300, RData::A(A(*ip))));
        }
        Zone::Referral(hostnames) => {
            for hostname in hostnames {
                response.add_name_server(Record::from_rdata(
                    qname.base_name(),
                    172800,
                    RData::NS(NS(Name::from_str(hostname).ok()?)),
                ));
            }
        }
        Zone::Silent => return None,
    }

    let mut bytes = Vec::new();
    let mut encoder = BinEncoder::new(&mut bytes);
    response.emit(&mut encoder).ok()?;
    Some(bytes)
}

/// Stand-in for the host resolver: nameserver hostnames map to loopback
/// aliases.
#[derive(Default)]
pub struct StaticRecordResolver {
    addresses: HashMap<String, Ipv4Addr>,
}

impl StaticRecordResolver {
    pub fn with(mut self, hostname: &str, ip: Ipv4Addr) -> Self {
        self.addresses.insert(hostname.to_string(), ip);
        self
    }
}

#[async_trait]
impl RecordResolver for StaticRecordResolver {
    async fn resolve_record(
        &self,
        name: &str,
        record_type: LookupRecordType,
    ) -> Result<Vec<String>, DomainError> {
        match (record_type, self.addresses.get(name)) {
            (LookupRecordType::A, Some(ip)) => Ok(vec![ip.to_string()]),
            _ => Err(DomainError::RecordLookupFailed {
                name: name.to_string(),
                record_type: record_type.as_str(),
                reason: "NXDOMAIN".to_string(),
            }),
        }
    }
}
