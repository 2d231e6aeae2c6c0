// src/cli/mod.rs
// Command-line interface

pub mod seed;
pub mod serve;

pub use seed::run_seed;
pub use serve::run_mcp_server;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(about = "Customer-support MCP server over SQLite")]
#[command(version)]
pub struct Cli {
    /// Database file (defaults to ~/.helpdesk/helpdesk.db)
    #[arg(long, global = true, env = "HELPDESK_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the MCP server on stdio (default when no subcommand is given)
    Serve,
    /// Create the database schema and load the sample dataset
    Seed {
        /// Delete an existing database file first
        #[arg(long)]
        reset: bool,
    },
}
