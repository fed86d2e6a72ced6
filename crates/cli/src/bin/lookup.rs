use anyhow::Context;
use clap::Parser;
use spoofmx_domain::RecordType;
use spoofmx_infrastructure::dns::lookup::short_form;
use spoofmx_infrastructure::dns::LookupClient;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "spoofmx-lookup")]
#[command(version)]
#[command(about = "Send one DNS query and print the answers dig +short style")]
struct Cli {
    /// Name to query
    domain: String,

    /// Record type (MX, A, TXT, TYPE<n>, ...)
    #[arg(short = 't', long = "type", default_value = "MX")]
    record_type: RecordType,

    /// Server to query
    #[arg(short, long, default_value = "127.0.0.1:53")]
    server: SocketAddr,

    /// Seconds to wait for the reply
    #[arg(long, default_value_t = 2)]
    timeout: u64,

    /// Also print the additional section (glue records)
    #[arg(short, long)]
    additional: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .with_target(false)
        .init();

    let client = LookupClient::new(cli.server, Duration::from_secs(cli.timeout));
    let response = client
        .query(&cli.domain, cli.record_type.to_u16())
        .await
        .with_context(|| format!("query for {} {} failed", cli.domain, cli.record_type))?;

    for record in response.answers() {
        println!("{}", short_form(record));
    }

    if cli.additional {
        for record in response.additionals() {
            println!(
                "{} {} {}",
                record.name(),
                record.record_type(),
                short_form(record)
            );
        }
    }

    Ok(())
}
