#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// How the mock answers every query it receives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// NOERROR with one A record per address, in order.
    Answers(Vec<Ipv4Addr>),
    /// NOERROR with a CNAME record followed by an A record.
    CnameThenA(Ipv4Addr),
    /// NOERROR with only a CNAME record.
    CnameOnly,
    /// Empty reply with the given RCODE (e.g. 3 = NXDOMAIN, 5 = REFUSED).
    Rcode(u8),
    /// Valid reply whose transaction id does not match the query.
    WrongId,
    /// Bytes that are not a DNS message.
    Garbage,
    /// Never replies.
    Silent,
}

/// Local UDP DNS server for resolver tests.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Starts the mock on an ephemeral loopback port.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&queries);

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_response(&behavior, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn queries_received(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn build_response(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
        if query.len() < 12 {
            return None;
        }

        let (rcode, answers): (u8, Vec<Vec<u8>>) = match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Garbage => return Some(vec![0xde, 0xad, 0xbe]),
            MockBehavior::Answers(ips) => (0, ips.iter().map(|ip| a_record(*ip)).collect()),
            MockBehavior::CnameThenA(ip) => (0, vec![cname_record(), a_record(*ip)]),
            MockBehavior::CnameOnly => (0, vec![cname_record()]),
            MockBehavior::Rcode(rcode) => (*rcode, Vec::new()),
            MockBehavior::WrongId => (0, vec![a_record(Ipv4Addr::new(192, 0, 2, 99))]),
        };

        let mut response = Vec::with_capacity(512);

        // Transaction ID
        if matches!(behavior, MockBehavior::WrongId) {
            response.push(query[0] ^ 0xff);
            response.push(query[1]);
        } else {
            response.extend_from_slice(&query[0..2]);
        }

        // Flags: QR=1, RD=1 / RA=1, RCODE
        response.push(0x81);
        response.push(0x80 | (rcode & 0x0f));

        // Questions count (from query)
        response.extend_from_slice(&query[4..6]);

        // Answer / Authority / Additional counts
        response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        // Copy question section (rest of query)
        response.extend_from_slice(&query[12..]);

        for answer in answers {
            response.extend_from_slice(&answer);
        }

        Some(response)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn a_record(ip: Ipv4Addr) -> Vec<u8> {
    let mut record = vec![
        0xc0, 0x0c, // Name pointer to question
        0x00, 0x01, // Type A
        0x00, 0x01, // Class IN
        0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
        0x00, 0x04, // Data length: 4 bytes
    ];
    record.extend_from_slice(&ip.octets());
    record
}

fn cname_record() -> Vec<u8> {
    vec![
        0xc0, 0x0c, // Name pointer to question
        0x00, 0x05, // Type CNAME
        0x00, 0x01, // Class IN
        0x00, 0x00, 0x00, 0x3c, // TTL: 60 seconds
        0x00, 0x06, // Data length: 6 bytes
        0x03, b'w', b'w', b'w', 0xc0, 0x0c, // www.<question name>
    ]
}
