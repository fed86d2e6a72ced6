use crate::domain_name;
use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// What gets forged, and for whom.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpoofConfig {
    #[serde(default = "default_forged_domain")]
    pub forged_domain: String,

    #[serde(default = "default_attacker_ip")]
    pub attacker_ip: Ipv4Addr,

    #[serde(default = "default_attacker_mx")]
    pub attacker_mx: String,

    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default = "default_mx_preference")]
    pub mx_preference: u16,

    /// Also answer A queries for the forged domain with the attacker address.
    #[serde(default)]
    pub forge_a: bool,
}

impl SpoofConfig {
    /// Size of the largest reply this config can produce: a forged MX
    /// answer plus its glue A record, after the echoed question.
    pub fn forged_reply_len(&self) -> Result<usize, DomainError> {
        let qname = domain_name::wire_len(&self.forged_domain)?;
        let exchange = domain_name::wire_len(&self.attacker_mx)?;
        // header + question + MX answer (pointer owner) + glue A
        Ok(12 + (qname + 4) + (2 + 10 + 2 + exchange) + (exchange + 10 + 4))
    }
}

impl Default for SpoofConfig {
    fn default() -> Self {
        Self {
            forged_domain: default_forged_domain(),
            attacker_ip: default_attacker_ip(),
            attacker_mx: default_attacker_mx(),
            ttl: default_ttl(),
            mx_preference: default_mx_preference(),
            forge_a: false,
        }
    }
}

fn default_forged_domain() -> String {
    "example.com".to_string()
}

fn default_attacker_ip() -> Ipv4Addr {
    Ipv4Addr::new(10, 0, 0, 66)
}

fn default_attacker_mx() -> String {
    "att.example.com".to_string()
}

fn default_ttl() -> u32 {
    300
}

fn default_mx_preference() -> u16 {
    10
}
