// src/main.rs

use clap::Parser;
use helpdesk::cli::{Cli, Commands};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // The MCP wire protocol owns stdout, so logs go to stderr and serving
    // stays quiet unless something is wrong.
    let log_level = match &cli.command {
        None | Some(Commands::Serve) => Level::WARN,
        Some(Commands::Seed { .. }) => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let db_path = cli.db.clone().unwrap_or_else(helpdesk::config::default_db_path);

    match cli.command {
        None | Some(Commands::Serve) => helpdesk::cli::run_mcp_server(&db_path).await,
        Some(Commands::Seed { reset }) => helpdesk::cli::run_seed(&db_path, reset).await,
    }
}
