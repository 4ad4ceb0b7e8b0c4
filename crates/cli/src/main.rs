//! # ENS Aptos Gateway
//!
//! CCIP-Read gateway answering ENS lookups from Aptos resolver records

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use ens_apt_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "ens-apt-gateway")]
#[command(version)]
#[command(about = "CCIP-Read gateway resolving ENS names from Aptos")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let services = di::GatewayServices::new(&config)?;
    info!(
        chains = ?services.chain_keys(),
        signer = ?services.signer_address(),
        protocol = ?config.gateway.protocol,
        "Gateway services ready"
    );

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.port);
    server::start_web_server(bind_addr, services.app_state(), &config.server).await
}
