// src/mcp/responses.rs
// Structured output types for the MCP tools
//
// Tools return `Json<T>` so rmcp emits both structured content and an
// auto-inferred output schema. `None` record fields serialize as explicit
// null, keeping "no such customer" distinct from a present record; list
// outputs keep "no tickets" as an empty array.

use crate::db::{Customer, Ticket};
use schemars::JsonSchema;
use serde::Serialize;

pub use rmcp::handler::server::wrapper::Json;

#[derive(Debug, Serialize, JsonSchema)]
pub struct CustomerOutput {
    pub message: String,
    pub customer: Option<Customer>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CustomerListOutput {
    pub message: String,
    pub customers: Vec<Customer>,
    pub total: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct TicketOutput {
    pub message: String,
    pub ticket: Option<Ticket>,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct TicketListOutput {
    pub message: String,
    pub tickets: Vec<Ticket>,
    pub total: usize,
}
