use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed query: {0}")]
    MalformedQuery(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Failed to send reply to {peer}: {reason}")]
    Send { peer: String, reason: String },

    #[error("Failed to receive datagram: {0}")]
    Receive(String),

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },
}
