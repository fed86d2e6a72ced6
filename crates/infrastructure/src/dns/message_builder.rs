//! Query construction for the lookup client, via `hickory-proto`.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as HickoryRecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use spoofmx_domain::DomainError;
use std::str::FromStr;

pub fn random_query_id() -> u16 {
    fastrand::u16(..)
}

/// Builds a single-question IN-class query with RD set, in wire format.
pub fn build_query(id: u16, domain: &str, qtype: u16) -> Result<Vec<u8>, DomainError> {
    let name = Name::from_str(domain).map_err(|e| {
        DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
    })?;

    let mut query = Query::new();
    query.set_name(name);
    query.set_query_type(HickoryRecordType::from(qtype));
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(query);

    serialize_message(&message)
}

fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);

    message.emit(&mut encoder).map_err(|e| {
        DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
    })?;

    Ok(buf)
}
