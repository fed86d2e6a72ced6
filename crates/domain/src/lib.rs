//! Spoofmx Domain Layer
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod spoof_policy;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordType, CLASS_IN, MAX_UDP_PAYLOAD};
pub use errors::DomainError;
pub use spoof_policy::{ForgeDecision, SpoofPolicy};
