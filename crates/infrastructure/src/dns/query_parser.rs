use spoofmx_domain::{DomainError, RecordType};

pub const HEADER_LEN: usize = 12;

const MAX_LABEL_LEN: usize = 63;

/// First question of an incoming query, plus what is needed to echo it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub id: u16,
    /// QDCOUNT as declared by the sender; only the first question is parsed.
    pub qdcount: u16,
    /// Dot-joined labels exactly as received (case preserved, no trailing dot).
    pub domain: String,
    pub qtype: u16,
    pub qclass: u16,
    /// Byte offset in the original buffer where the first question ends.
    pub question_end: usize,
}

impl ParsedQuery {
    pub fn type_label(&self) -> String {
        RecordType::label_for(self.qtype)
    }

    /// Raw bytes of the first question (name, QTYPE, QCLASS).
    pub fn question_bytes<'a>(&self, query_buf: &'a [u8]) -> Option<&'a [u8]> {
        query_buf.get(HEADER_LEN..self.question_end)
    }
}

fn malformed(reason: impl Into<String>) -> DomainError {
    DomainError::MalformedQuery(reason.into())
}

fn read_u16(buf: &[u8], pos: usize) -> Option<u16> {
    let bytes = buf.get(pos..pos + 2)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

/// Parses the header and first question of a raw query.
///
/// Every read is bounds-checked. The following are rejected as
/// [`DomainError::MalformedQuery`]:
///
/// * Buffer shorter than the 12-byte header
/// * QDCOUNT of zero
/// * Label length running past the end of the buffer, or no terminator
/// * Compression pointer or extended label type in the QNAME
/// * QTYPE/QCLASS truncated
pub fn parse_query(buf: &[u8]) -> Result<ParsedQuery, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(malformed(format!(
            "{} bytes is shorter than the DNS header",
            buf.len()
        )));
    }

    let id = u16::from_be_bytes([buf[0], buf[1]]);
    let qdcount = u16::from_be_bytes([buf[4], buf[5]]);

    if qdcount == 0 {
        return Err(malformed("query carries no question"));
    }

    let mut pos = HEADER_LEN;
    let mut domain = String::new();

    loop {
        let Some(&len_byte) = buf.get(pos) else {
            return Err(malformed("name is not terminated"));
        };
        let label_len = len_byte as usize;
        if label_len == 0 {
            pos += 1;
            break;
        }
        if label_len > MAX_LABEL_LEN {
            return Err(malformed(format!(
                "unsupported label byte 0x{:02x} at offset {}",
                len_byte, pos
            )));
        }
        pos += 1;
        let Some(label) = buf.get(pos..pos + label_len) else {
            return Err(malformed(format!(
                "label of {} bytes at offset {} overruns the buffer",
                label_len,
                pos - 1
            )));
        };
        if !domain.is_empty() {
            domain.push('.');
        }
        domain.push_str(&String::from_utf8_lossy(label));
        pos += label_len;
    }

    let (Some(qtype), Some(qclass)) = (read_u16(buf, pos), read_u16(buf, pos + 2)) else {
        return Err(malformed("question is truncated before QTYPE/QCLASS"));
    };
    pos += 4;

    Ok(ParsedQuery {
        id,
        qdcount,
        domain,
        qtype,
        qclass,
        question_end: pos,
    })
}
