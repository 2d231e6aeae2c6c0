// src/cli/serve.rs
// MCP server entry point (stdio transport)

use crate::db::DatabasePool;
use crate::mcp::DeskServer;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Open the database and serve MCP over stdio until the client disconnects.
pub async fn run_mcp_server(db_path: &Path) -> Result<()> {
    let pool = Arc::new(DatabasePool::open(db_path).await?);
    info!("customer_support MCP server ready (db: {})", db_path.display());

    let server = DeskServer::new(pool);

    // Run with stdio transport
    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    service.waiting().await?;

    Ok(())
}
