// src/mcp/mod.rs
// MCP Server implementation

pub mod requests;
pub mod responses;

use crate::db::DatabasePool;
use crate::tools::{self, ToolContext};
use requests::{
    CreateTicketRequest, CustomerHistoryRequest, GetCustomerRequest, ListCustomersRequest,
    UpdateCustomerRequest,
};
use responses::{CustomerListOutput, CustomerOutput, Json, TicketListOutput, TicketOutput};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use std::sync::Arc;

/// MCP server state
#[derive(Clone)]
pub struct DeskServer {
    pub pool: Arc<DatabasePool>,
    tool_router: ToolRouter<Self>,
}

impl DeskServer {
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self {
            pool,
            tool_router: Self::tool_router(),
        }
    }
}

impl ToolContext for DeskServer {
    fn pool(&self) -> &Arc<DatabasePool> {
        &self.pool
    }
}

#[tool_router]
impl DeskServer {
    #[tool(
        description = "Look up a single customer by id. An unknown id returns no customer record rather than an error."
    )]
    async fn get_customer(
        &self,
        Parameters(req): Parameters<GetCustomerRequest>,
    ) -> Result<Json<CustomerOutput>, String> {
        tools::get_customer(self, req.customer_id).await
    }

    #[tool(
        description = "List customers filtered by status ('active' or 'disabled', default 'active'), up to a limit (default 50)."
    )]
    async fn list_customers(
        &self,
        Parameters(req): Parameters<ListCustomersRequest>,
    ) -> Result<Json<CustomerListOutput>, String> {
        tools::list_customers(self, req.status, req.limit).await
    }

    #[tool(
        description = "Apply a partial update to a customer. Allowed fields: name, email, phone, status. An unknown customer id is an error."
    )]
    async fn update_customer(
        &self,
        Parameters(req): Parameters<UpdateCustomerRequest>,
    ) -> Result<Json<CustomerOutput>, String> {
        tools::update_customer(self, req.customer_id, req.fields).await
    }

    #[tool(
        description = "Open a new support ticket for a customer. Priority is 'low', 'medium', or 'high' (default 'medium'). An unknown customer id returns no ticket rather than an error."
    )]
    async fn create_ticket(
        &self,
        Parameters(req): Parameters<CreateTicketRequest>,
    ) -> Result<Json<TicketOutput>, String> {
        tools::create_ticket(self, req.customer_id, req.issue, req.priority).await
    }

    #[tool(
        description = "Fetch a customer's full ticket history, oldest first. A customer with no tickets yields an empty list."
    )]
    async fn get_customer_history(
        &self,
        Parameters(req): Parameters<CustomerHistoryRequest>,
    ) -> Result<Json<TicketListOutput>, String> {
        tools::customer_history(self, req.customer_id).await
    }
}

#[tool_handler]
impl ServerHandler for DeskServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: rmcp::model::Implementation {
                name: "customer_support".into(),
                title: Some("Customer support data tools".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Customer support data access: look up and list customers, apply partial \
                 customer updates, open support tickets, and fetch a customer's ticket history."
                    .into(),
            ),
        }
    }
}
