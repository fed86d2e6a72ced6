//! Spoofmx Infrastructure Layer: wire codec, responder loop and lookup client.
pub mod dns;
