//! tally daemon — entry point for running the governance ledger service.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use config::DaemonConfig;
use tally_governance::GovernanceLedger;
use tally_rpc::RpcServer;

#[derive(Parser)]
#[command(name = "tally-daemon", about = "Governance voting ledger daemon")]
struct Cli {
    /// Address to bind the HTTP server to.
    #[arg(long, env = "TALLY_BIND")]
    bind: Option<String>,

    /// HTTP port.
    #[arg(long, env = "TALLY_PORT")]
    port: Option<u16>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "TALLY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "TALLY_LOG_FORMAT")]
    log_format: Option<String>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "TALLY_CONFIG")]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the HTTP service.
    Serve,
    /// Print the effective configuration as TOML and exit.
    PrintConfig,
}

impl Cli {
    /// Layer CLI flags over the file (or default) configuration.
    fn resolve_config(&self) -> anyhow::Result<DaemonConfig> {
        let base = match &self.config {
            Some(path) => DaemonConfig::from_toml_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => DaemonConfig::default(),
        };
        Ok(DaemonConfig {
            bind_address: self.bind.clone().unwrap_or(base.bind_address),
            port: self.port.unwrap_or(base.port),
            log_level: self.log_level.clone().unwrap_or(base.log_level),
            log_format: self.log_format.clone().unwrap_or(base.log_format),
            ..base
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    match cli.command {
        Command::PrintConfig => {
            print!("{}", config.to_toml_string());
        }
        Command::Serve => {
            tally_utils::init_tracing(&config.log_level, &config.log_format);
            if let Some(path) = &cli.config {
                tracing::info!("Loaded config from {}", path.display());
            }
            tracing::info!(
                "Starting tally ledger on {}:{}",
                config.bind_address,
                config.port
            );

            let ledger = Arc::new(GovernanceLedger::new());
            let server = RpcServer::with_ledger(&config.bind_address, config.port, ledger)
                .max_body_bytes(config.max_body_bytes);
            server.start().await?;

            tracing::info!("tally daemon exited cleanly");
        }
    }

    Ok(())
}
