use super::query_parser::{ParsedQuery, HEADER_LEN};
use spoofmx_domain::{domain_name, DomainError, ForgeDecision, RecordType, CLASS_IN};
use std::net::Ipv4Addr;

/// QR=1, opcode QUERY, RD+RA, RCODE NOERROR.
pub const RESPONSE_FLAGS: u16 = 0x8180;

/// Compression pointer to offset 12, where the echoed question name starts.
pub const QUESTION_NAME_POINTER: [u8; 2] = [0xC0, 0x0C];

/// Builds the reply to `query` in wire format.
///
/// The question is copied byte-for-byte from `query_buf`. Answer and
/// additional sections follow `decision`; header counts always match what
/// is emitted.
pub fn build_response(
    query: &ParsedQuery,
    query_buf: &[u8],
    decision: &ForgeDecision<'_>,
) -> Result<Vec<u8>, DomainError> {
    let question = query.question_bytes(query_buf).ok_or_else(|| {
        DomainError::MalformedQuery(format!(
            "question end {} is outside the {}-byte query",
            query.question_end,
            query_buf.len()
        ))
    })?;

    let mut buf = Vec::with_capacity(HEADER_LEN + question.len() + 64);

    buf.extend_from_slice(&query.id.to_be_bytes());
    buf.extend_from_slice(&RESPONSE_FLAGS.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&decision.answer_count().to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&decision.additional_count().to_be_bytes());

    buf.extend_from_slice(question);

    match *decision {
        ForgeDecision::PassThrough => {}
        ForgeDecision::Mx {
            exchange,
            preference,
            glue,
            ttl,
        } => {
            let mut exchange_wire = Vec::with_capacity(exchange.len() + 2);
            encode_name(exchange, &mut exchange_wire)?;

            buf.extend_from_slice(&QUESTION_NAME_POINTER);
            push_record_header(&mut buf, RecordType::MX, ttl, 2 + exchange_wire.len())?;
            buf.extend_from_slice(&preference.to_be_bytes());
            buf.extend_from_slice(&exchange_wire);

            buf.extend_from_slice(&exchange_wire);
            push_a_rdata(&mut buf, glue, ttl)?;
        }
        ForgeDecision::A { address, ttl } => {
            buf.extend_from_slice(&QUESTION_NAME_POINTER);
            push_a_rdata(&mut buf, address, ttl)?;
        }
    }

    Ok(buf)
}

/// Appends `name` as uncompressed length-prefixed labels plus the root byte.
pub fn encode_name(name: &str, out: &mut Vec<u8>) -> Result<(), DomainError> {
    for label in domain_name::labels(name)? {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0x00);
    Ok(())
}

/// TYPE, CLASS, TTL and RDLENGTH; the owner name is written by the caller.
fn push_record_header(
    buf: &mut Vec<u8>,
    record_type: RecordType,
    ttl: u32,
    rdlength: usize,
) -> Result<(), DomainError> {
    let rdlength = u16::try_from(rdlength).map_err(|_| {
        DomainError::InvalidDomainName(format!("RDATA of {} bytes is too long", rdlength))
    })?;
    buf.extend_from_slice(&record_type.to_u16().to_be_bytes());
    buf.extend_from_slice(&CLASS_IN.to_be_bytes());
    buf.extend_from_slice(&ttl.to_be_bytes());
    buf.extend_from_slice(&rdlength.to_be_bytes());
    Ok(())
}

fn push_a_rdata(buf: &mut Vec<u8>, address: Ipv4Addr, ttl: u32) -> Result<(), DomainError> {
    push_record_header(buf, RecordType::A, ttl, 4)?;
    buf.extend_from_slice(&address.octets());
    Ok(())
}
