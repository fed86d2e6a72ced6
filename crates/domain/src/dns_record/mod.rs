mod record_type;

pub use record_type::RecordType;

/// Only class this tool ever emits.
pub const CLASS_IN: u16 = 1;

/// Largest DNS message over plain UDP without EDNS (RFC 1035 §4.2.1).
pub const MAX_UDP_PAYLOAD: usize = 512;
