use clap::Parser;
use spoofmx_domain::CliOverrides;
use std::net::Ipv4Addr;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "spoofmx")]
#[command(version)]
#[command(about = "Lightweight UDP DNS responder that forges MX records for spoofing demonstrations")]
#[command(after_help = "Examples:\n  \
    spoofmx\n  \
    spoofmx --domain company.com --attacker-ip 192.168.1.100\n  \
    spoofmx --ip 10.0.0.66 --port 5353")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// IP address to bind to (default: 0.0.0.0)
    #[arg(long = "ip", value_name = "IP")]
    bind: Option<String>,

    /// Port to listen on (default: 53)
    #[arg(long)]
    port: Option<u16>,

    /// Domain to forge (default: example.com)
    #[arg(long)]
    domain: Option<String>,

    /// Attacker IP address (default: 10.0.0.66)
    #[arg(long)]
    attacker_ip: Option<Ipv4Addr>,

    /// Attacker MX hostname (default: att.example.com)
    #[arg(long)]
    attacker_mx: Option<String>,

    /// Also forge A answers for the forged domain
    #[arg(long)]
    forge_a: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        bind_address: cli.bind,
        dns_port: cli.port,
        forged_domain: cli.domain,
        attacker_ip: cli.attacker_ip,
        attacker_mx: cli.attacker_mx,
        forge_a: cli.forge_a,
        log_level: cli.log_level,
        quiet: cli.quiet,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(config.logging.effective_level());

    server::start_dns_server(&config).await
}
