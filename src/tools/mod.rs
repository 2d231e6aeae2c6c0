// src/tools/mod.rs
// Tool implementations, decoupled from the MCP transport

pub mod customers;
pub mod tickets;

use crate::db::DatabasePool;
use std::sync::Arc;

/// Context passed to tool functions.
///
/// The MCP server implements this for production; tests implement it over
/// an in-memory pool so tools can be exercised without a transport.
pub trait ToolContext: Send + Sync {
    fn pool(&self) -> &Arc<DatabasePool>;
}

pub use customers::{get_customer, list_customers, update_customer};
pub use tickets::{create_ticket, customer_history};
