use crate::DomainError;

pub const MAX_LABEL_LEN: usize = 63;

/// Upper bound on the wire length of a name, terminator included.
pub const MAX_NAME_WIRE_LEN: usize = 255;

/// Splits a dotted name into its labels, checking they can be put on the
/// wire as-is. A single trailing dot (fully-qualified form) is accepted.
pub fn labels(name: &str) -> Result<Vec<&str>, DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "name has no labels".to_string(),
        ));
    }

    let mut wire_len = 1;
    let mut out = Vec::new();
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "empty label in '{}'",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
        if !label.is_ascii() {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' is not ASCII",
                label
            )));
        }
        wire_len += 1 + label.len();
        out.push(label);
    }

    if wire_len > MAX_NAME_WIRE_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' encodes to {} bytes (max {})",
            name, wire_len, MAX_NAME_WIRE_LEN
        )));
    }

    Ok(out)
}

/// Returns an error when `name` cannot be encoded as an uncompressed name.
pub fn validate(name: &str) -> Result<(), DomainError> {
    labels(name).map(|_| ())
}

/// Bytes `name` takes on the wire without compression, root label included.
pub fn wire_len(name: &str) -> Result<usize, DomainError> {
    Ok(labels(name)?.iter().map(|l| 1 + l.len()).sum::<usize>() + 1)
}

/// ASCII case-insensitive comparison, ignoring a trailing root dot.
pub fn names_equal(a: &str, b: &str) -> bool {
    let a = a.strip_suffix('.').unwrap_or(a);
    let b = b.strip_suffix('.').unwrap_or(b);
    a.eq_ignore_ascii_case(b)
}
