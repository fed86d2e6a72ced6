#![allow(dead_code)]
use hickory_proto::rr::{RData, Record};
use spoofmx_domain::config::SpoofConfig;
use spoofmx_domain::SpoofPolicy;
use std::net::Ipv4Addr;

pub const QTYPE_A: u16 = 1;
pub const QTYPE_MX: u16 = 15;
pub const QTYPE_TXT: u16 = 16;

/// Hand-built single-question query, independent of the crate's own encoder.
pub fn build_query(id: u16, domain: &str, qtype: u16) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_be_bytes()); // ID
    buf.extend_from_slice(&[0x01, 0x00]); // flags: RD set
    buf.extend_from_slice(&[0x00, 0x01]); // QDCOUNT = 1
    buf.extend_from_slice(&[0x00, 0x00]); // ANCOUNT = 0
    buf.extend_from_slice(&[0x00, 0x00]); // NSCOUNT = 0
    buf.extend_from_slice(&[0x00, 0x00]); // ARCOUNT = 0
    for label in domain.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00); // root label
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&[0x00, 0x01]); // QCLASS = IN
    buf
}

pub fn header_count(buf: &[u8], index: usize) -> u16 {
    let pos = 4 + index * 2;
    u16::from_be_bytes([buf[pos], buf[pos + 1]])
}

pub fn qdcount(buf: &[u8]) -> u16 {
    header_count(buf, 0)
}

pub fn ancount(buf: &[u8]) -> u16 {
    header_count(buf, 1)
}

pub fn nscount(buf: &[u8]) -> u16 {
    header_count(buf, 2)
}

pub fn arcount(buf: &[u8]) -> u16 {
    header_count(buf, 3)
}

/// The lab defaults: example.com forged to att.example.com / 10.0.0.66.
pub fn lab_policy() -> SpoofPolicy {
    SpoofPolicy::new(&lab_config())
}

pub fn lab_config() -> SpoofConfig {
    SpoofConfig {
        forged_domain: "example.com".to_string(),
        attacker_ip: Ipv4Addr::new(10, 0, 0, 66),
        attacker_mx: "att.example.com".to_string(),
        ..Default::default()
    }
}

pub fn forge_a_policy() -> SpoofPolicy {
    SpoofPolicy::new(&SpoofConfig {
        forge_a: true,
        ..lab_config()
    })
}

/// Dotted name whose uncompressed wire form is exactly `wire_len` bytes.
pub fn name_with_wire_len(wire_len: usize) -> String {
    let mut remaining = wire_len - 1;
    let mut labels = Vec::new();
    while remaining > 0 {
        let take = remaining.min(64);
        labels.push("m".repeat(take - 1));
        remaining -= take;
    }
    labels.join(".")
}

/// MX preference and exchange (without the root dot) of a decoded record.
pub fn mx_data(record: &Record) -> Option<(u16, String)> {
    match record.data() {
        Some(RData::MX(mx)) => Some((
            mx.preference(),
            mx.exchange().to_string().trim_end_matches('.').to_string(),
        )),
        _ => None,
    }
}

pub fn a_data(record: &Record) -> Option<Ipv4Addr> {
    match record.data() {
        Some(RData::A(a)) => Some(a.0),
        _ => None,
    }
}

/// Owner name of a decoded record, without the root dot.
pub fn owner(record: &Record) -> String {
    record.name().to_string().trim_end_matches('.').to_string()
}
