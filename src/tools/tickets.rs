// src/tools/tickets.rs
// Ticket creation and customer history tools

use super::ToolContext;
use crate::db;
use crate::db::TicketPriority;
use crate::error::HelpdeskError;
use crate::mcp::responses::{Json, TicketListOutput, TicketOutput};

/// Open a new support ticket for a customer.
///
/// Priority defaults to "medium" when omitted. A blank issue is rejected.
/// An unknown customer id is not an error: nothing is written and the
/// output carries no ticket record.
pub async fn create_ticket<C: ToolContext>(
    ctx: &C,
    customer_id: i64,
    issue: String,
    priority: Option<String>,
) -> Result<Json<TicketOutput>, String> {
    if issue.trim().is_empty() {
        return Err(HelpdeskError::InvalidArgument(
            "issue must be a non-empty string".to_string(),
        )
        .into());
    }
    let priority = match priority {
        Some(p) => TicketPriority::parse(&p)?,
        None => TicketPriority::Medium,
    };

    let issue_for_db = issue.clone();
    let ticket = ctx
        .pool()
        .run(move |conn| db::create_ticket_sync(conn, customer_id, &issue_for_db, priority))
        .await?;

    let message = match &ticket {
        Some(t) => {
            tracing::info!(ticket_id = t.id, customer_id, priority = priority.as_str(), "ticket created");
            format!(
                "Ticket {} created for customer {} ({} priority)",
                t.id, customer_id, t.priority
            )
        }
        None => format!("No customer with id {customer_id}; ticket not created"),
    };
    Ok(Json(TicketOutput { message, ticket }))
}

/// Fetch a customer's full ticket history, oldest first.
///
/// A customer with no tickets and an unknown customer id both yield an
/// empty list.
pub async fn customer_history<C: ToolContext>(
    ctx: &C,
    customer_id: i64,
) -> Result<Json<TicketListOutput>, String> {
    let tickets = ctx
        .pool()
        .run(move |conn| db::customer_history_sync(conn, customer_id))
        .await?;

    tracing::debug!(customer_id, count = tickets.len(), "get_customer_history");

    let total = tickets.len();
    Ok(Json(TicketListOutput {
        message: format!("{} ticket(s) for customer {}", total, customer_id),
        tickets,
        total,
    }))
}
