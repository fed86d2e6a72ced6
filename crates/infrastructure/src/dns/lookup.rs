use super::message_builder::{build_query, random_query_id};
use super::transport::UdpTransport;
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::{RData, Record};
use spoofmx_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;

/// One-shot query client, roughly `dig +short` against a single server.
pub struct LookupClient {
    transport: UdpTransport,
    timeout: Duration,
}

impl LookupClient {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            transport: UdpTransport::new(server_addr),
            timeout,
        }
    }

    pub async fn query(&self, domain: &str, qtype: u16) -> Result<Message, DomainError> {
        let id = random_query_id();
        let request = build_query(id, domain, qtype)?;

        debug!(server = %self.transport.server_addr(), id, domain, qtype, "Sending query");

        let bytes = self.transport.send(&request, self.timeout).await?;
        let response = Message::from_vec(&bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if response.id() != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "transaction ID mismatch: sent {:#06x}, got {:#06x}",
                id,
                response.id()
            )));
        }
        if response.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse(
                "reply does not have the QR bit set".to_string(),
            ));
        }

        Ok(response)
    }
}

/// RDATA in `dig +short` presentation form.
pub fn short_form(record: &Record) -> String {
    match record.data() {
        Some(RData::A(a)) => a.0.to_string(),
        Some(RData::MX(mx)) => format!("{} {}", mx.preference(), mx.exchange()),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::rdata::{A, MX};
    use hickory_proto::rr::Name;
    use std::net::Ipv4Addr;

    #[test]
    fn test_short_form_matches_dig() {
        let owner = Name::from_ascii("example.com.").unwrap();
        let exchange = Name::from_ascii("att.example.com.").unwrap();

        let mx = Record::from_rdata(owner.clone(), 300, RData::MX(MX::new(10, exchange)));
        assert_eq!(short_form(&mx), "10 att.example.com.");

        let a = Record::from_rdata(owner, 300, RData::A(A(Ipv4Addr::new(10, 0, 0, 66))));
        assert_eq!(short_form(&a), "10.0.0.66");
    }
}
