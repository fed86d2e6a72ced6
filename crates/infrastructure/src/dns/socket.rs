use socket2::{Domain, Protocol, Socket, Type};
use spoofmx_domain::DomainError;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// Opens the responder socket with SO_REUSEADDR and binds it.
///
/// Must be called from inside a Tokio runtime. Any failure is reported as
/// [`DomainError::Bind`]; the caller is expected to abort startup.
pub fn bind_udp_socket(socket_addr: SocketAddr) -> Result<UdpSocket, DomainError> {
    create_udp_socket(socket_addr).map_err(|e| DomainError::Bind {
        addr: socket_addr.to_string(),
        reason: e.to_string(),
    })
}

fn create_udp_socket(socket_addr: SocketAddr) -> std::io::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}
