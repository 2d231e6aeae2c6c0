// src/mcp/requests.rs
// Request parameter types for the MCP tools

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCustomerRequest {
    #[schemars(description = "Numeric id of the customer to look up")]
    pub customer_id: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListCustomersRequest {
    #[schemars(description = "Status filter: 'active' or 'disabled' (default: 'active')")]
    pub status: Option<String>,
    #[schemars(description = "Maximum number of customers to return (default: 50, minimum: 1)")]
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateCustomerRequest {
    #[schemars(description = "Numeric id of the customer to update")]
    pub customer_id: i64,
    #[schemars(
        description = "Field name to new value. Allowed fields: name, email, phone, status. \
                       email and phone may be null to clear them."
    )]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTicketRequest {
    #[schemars(description = "Numeric id of the customer the ticket belongs to")]
    pub customer_id: i64,
    #[schemars(description = "Description of the problem")]
    pub issue: String,
    #[schemars(description = "Ticket priority: 'low', 'medium', or 'high' (default: 'medium')")]
    pub priority: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomerHistoryRequest {
    #[schemars(description = "Numeric id of the customer whose tickets to fetch")]
    pub customer_id: i64,
}
