// src/tools/customers.rs
// Customer lookup, listing, and partial update tools

use super::ToolContext;
use crate::db;
use crate::db::{CustomerPatch, CustomerStatus};
use crate::error::HelpdeskError;
use crate::mcp::responses::{CustomerListOutput, CustomerOutput, Json};

/// Default result cap for list_customers when the caller doesn't pass one.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Look up a single customer by id.
///
/// An unknown id is not an error: the output carries no customer record and
/// the message says so.
pub async fn get_customer<C: ToolContext>(
    ctx: &C,
    customer_id: i64,
) -> Result<Json<CustomerOutput>, String> {
    let customer = ctx
        .pool()
        .run(move |conn| db::get_customer_sync(conn, customer_id))
        .await?;

    tracing::debug!(customer_id, found = customer.is_some(), "get_customer");

    let message = match &customer {
        Some(c) => format!("Customer {}: {} ({})", c.id, c.name, c.status),
        None => format!("No customer with id {customer_id}"),
    };
    Ok(Json(CustomerOutput { message, customer }))
}

/// List customers filtered by status.
///
/// Status defaults to "active" when omitted; a present but unrecognized
/// status is rejected. Limit defaults to 50 and must be at least 1.
pub async fn list_customers<C: ToolContext>(
    ctx: &C,
    status: Option<String>,
    limit: Option<i64>,
) -> Result<Json<CustomerListOutput>, String> {
    let status = match status {
        Some(s) => CustomerStatus::parse(&s)?,
        None => CustomerStatus::Active,
    };
    let limit = limit.unwrap_or(DEFAULT_LIST_LIMIT);
    if limit < 1 {
        return Err(HelpdeskError::InvalidArgument(format!(
            "limit must be at least 1, got {limit}"
        ))
        .into());
    }

    let customers = ctx
        .pool()
        .run(move |conn| db::list_customers_sync(conn, status, limit))
        .await?;

    tracing::debug!(status = status.as_str(), limit, count = customers.len(), "list_customers");

    let total = customers.len();
    Ok(Json(CustomerListOutput {
        message: format!("{} {} customer(s)", total, status.as_str()),
        customers,
        total,
    }))
}

/// Apply a partial update to a customer.
///
/// `fields` maps column names to new values; allowed names are name, email,
/// phone, and status. Unlike the read tools, an unknown customer id here is
/// an error rather than an empty result.
pub async fn update_customer<C: ToolContext>(
    ctx: &C,
    customer_id: i64,
    fields: serde_json::Map<String, serde_json::Value>,
) -> Result<Json<CustomerOutput>, String> {
    let patch = CustomerPatch::from_fields(&fields)?;

    let customer = ctx
        .pool()
        .run(move |conn| db::update_customer_sync(conn, customer_id, &patch))
        .await?;

    tracing::info!(customer_id, fields = fields.len(), "update_customer applied");

    Ok(Json(CustomerOutput {
        message: format!("Customer {customer_id} updated"),
        customer: Some(customer),
    }))
}
