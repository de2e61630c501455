use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use ferrous_axfr_domain::{CliOverrides, Config};
use std::net::IpAddr;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-axfr")]
#[command(version)]
#[command(about = "Ferrous AXFR - checks domains for open DNS zone transfers")]
struct Cli {
    /// Text file with one domain per line
    #[arg(value_name = "FILE_WITH_DOMAINS")]
    file: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Port the AXFR targets are contacted on
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Timeout for each network operation, in milliseconds
    #[arg(short = 't', long, value_name = "MS")]
    timeout: Option<u64>,

    /// Number of domains processed concurrently
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Name server used for NS lookups instead of the system configuration
    #[arg(long = "nameserver", value_name = "IP")]
    nameservers: Vec<IpAddr>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            std::process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            let _ = Cli::command().print_help();
            println!();
            std::process::exit(0);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    let cli_overrides = CliOverrides {
        transfer_port: cli.port,
        transfer_timeout_ms: cli.timeout,
        concurrency: cli.jobs,
        nameservers: cli.nameservers.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = Config::load(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting Ferrous AXFR v{}", env!("CARGO_PKG_VERSION"));

    let services = di::Services::new(&config);

    let domains = services.load_domains.execute(&cli.file).await?;

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping scan");
            signal_token.cancel();
        }
    });

    services.scan_domains.execute(domains, shutdown).await;

    Ok(())
}
