use super::query_parser::parse_query;
use super::wire_response::build_response;
use spoofmx_domain::{DomainError, ForgeDecision, SpoofPolicy, MAX_UDP_PAYLOAD};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info, warn};

/// Largest datagram read per receive; no EDNS0 buffer negotiation.
pub const UDP_MAX_MESSAGE_SIZE: usize = MAX_UDP_PAYLOAD;

/// Counters accumulated over one serving session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    pub received: u64,
    pub forged: u64,
    pub passed_through: u64,
    pub dropped: u64,
    pub send_failures: u64,
}

/// Outcome of handling one datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Forged(Vec<u8>),
    PassThrough(Vec<u8>),
}

impl Reply {
    pub fn bytes(&self) -> &[u8] {
        match self {
            Reply::Forged(b) | Reply::PassThrough(b) => b,
        }
    }
}

pub struct SpoofResponder {
    policy: Arc<SpoofPolicy>,
}

impl SpoofResponder {
    pub fn new(policy: Arc<SpoofPolicy>) -> Self {
        Self { policy }
    }

    /// Decodes one query, applies the policy and encodes the reply.
    pub fn handle_datagram(&self, buf: &[u8], peer: SocketAddr) -> Result<Reply, DomainError> {
        let query = parse_query(buf)?;

        info!(
            client = %peer,
            domain = %query.domain,
            record_type = %query.type_label(),
            "Query received"
        );

        let decision = self.policy.decide(&query.domain, query.qtype);
        let bytes = build_response(&query, buf, &decision)?;

        match decision {
            ForgeDecision::Mx { exchange, glue, .. } => {
                info!(
                    client = %peer,
                    exchange = %exchange,
                    address = %glue,
                    "Sending forged MX response"
                );
                Ok(Reply::Forged(bytes))
            }
            ForgeDecision::A { address, .. } => {
                info!(client = %peer, address = %address, "Sending forged A response");
                Ok(Reply::Forged(bytes))
            }
            ForgeDecision::PassThrough => {
                debug!(client = %peer, domain = %query.domain, "Sending empty response");
                Ok(Reply::PassThrough(bytes))
            }
        }
    }

    /// Serves queries on `socket` until `shutdown` resolves.
    ///
    /// Datagrams are handled strictly one at a time: the next receive is not
    /// issued until the current reply has been sent or dropped. Per-datagram
    /// failures are logged and never end the loop. The socket is closed on
    /// return.
    pub async fn serve<F>(&self, socket: UdpSocket, shutdown: F) -> ServeStats
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut stats = ServeStats::default();
        let mut recv_buf = [0u8; UDP_MAX_MESSAGE_SIZE];

        loop {
            let (n, peer) = tokio::select! {
                biased;
                _ = &mut shutdown => break,
                received = socket.recv_from(&mut recv_buf) => match received {
                    Ok(r) => r,
                    Err(e) if is_transient_recv_error(&e) => continue,
                    Err(e) => {
                        error!(error = %e, "UDP recv error");
                        tokio::task::yield_now().await;
                        continue;
                    }
                },
            };
            stats.received += 1;

            let reply = match self.handle_datagram(&recv_buf[..n], peer) {
                Ok(reply) => reply,
                Err(e) => {
                    warn!(client = %peer, error = %e, "Dropping query");
                    stats.dropped += 1;
                    continue;
                }
            };

            if let Err(e) = socket.send_to(reply.bytes(), peer).await {
                let err = DomainError::Send {
                    peer: peer.to_string(),
                    reason: e.to_string(),
                };
                warn!(error = %err, "Reply not delivered");
                stats.send_failures += 1;
                continue;
            }

            match reply {
                Reply::Forged(_) => stats.forged += 1,
                Reply::PassThrough(_) => stats.passed_through += 1,
            }
        }

        info!(
            received = stats.received,
            forged = stats.forged,
            dropped = stats.dropped,
            "Responder stopped"
        );
        stats
    }
}

/// Errors that only mean "try again": the socket itself is still usable.
fn is_transient_recv_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
    )
}
