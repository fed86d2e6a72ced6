pub mod lookup;
pub mod message_builder;
pub mod query_parser;
pub mod server;
pub mod socket;
pub mod transport;
pub mod wire_response;

pub use lookup::LookupClient;
pub use query_parser::{parse_query, ParsedQuery};
pub use server::{Reply, ServeStats, SpoofResponder, UDP_MAX_MESSAGE_SIZE};
pub use socket::bind_udp_socket;
pub use transport::UdpTransport;
pub use wire_response::build_response;
