//! # Netbridge
//!
//! Management API for node-local network records (interface + bridge per node)

mod bootstrap;
mod di;
mod server;

use clap::Parser;
use netbridge_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "netbridge")]
#[command(version)]
#[command(about = "Network record management API")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// HTTP port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// SQLite database path (":memory:" for a throwaway store)
    #[arg(short = 'd', long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            port: self.port,
            database_path: self.database.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Netbridge starting");

    let pool = bootstrap::init_database(&config.database).await?;
    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repos);
    let state = use_cases.into_app_state(config.pagination.default_page_size);

    server::start_web_server(config.bind_addr(), state).await?;

    repos.close().await;
    info!("Netbridge stopped");
    Ok(())
}
