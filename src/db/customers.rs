// src/db/customers.rs
// Customer reads and partial updates

use super::types::{Customer, CustomerStatus};
use crate::error::{HelpdeskError, Result};
use rusqlite::types::Value as SqlValue;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use serde_json::Value as JsonValue;

const CUSTOMER_COLS: &str = "id, name, email, phone, status, created_at, updated_at";

/// Column names a partial update may touch. Everything else (ids,
/// timestamps, unknown names) is rejected before any SQL is built.
pub const UPDATABLE_FIELDS: &[&str] = &["name", "email", "phone", "status"];

pub fn parse_customer_row(row: &rusqlite::Row) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        status: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// Fetch a single customer by id. Returns None for an unknown id.
pub fn get_customer_sync(conn: &Connection, id: i64) -> rusqlite::Result<Option<Customer>> {
    conn.query_row(
        &format!("SELECT {CUSTOMER_COLS} FROM customers WHERE id = ?1"),
        [id],
        parse_customer_row,
    )
    .optional()
}

/// List customers with the given status, oldest id first.
pub fn list_customers_sync(
    conn: &Connection,
    status: CustomerStatus,
    limit: i64,
) -> rusqlite::Result<Vec<Customer>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {CUSTOMER_COLS} FROM customers WHERE status = ?1 ORDER BY id ASC LIMIT ?2"
    ))?;
    let rows = stmt.query_map(params![status.as_str(), limit], parse_customer_row)?;
    rows.collect()
}

/// A validated partial update: whitelisted column names paired with
/// already-checked bound values, in a fixed column order.
#[derive(Debug, Clone)]
pub struct CustomerPatch {
    fields: Vec<(&'static str, SqlValue)>,
}

impl CustomerPatch {
    /// Validate a raw field map into a patch.
    ///
    /// Rejects empty maps, field names outside [`UPDATABLE_FIELDS`], invalid
    /// status values, and non-string values. `email` and `phone` may also be
    /// set to null to clear them; `name` and `status` may not.
    pub fn from_fields(fields: &serde_json::Map<String, JsonValue>) -> Result<Self> {
        if fields.is_empty() {
            return Err(HelpdeskError::InvalidArgument(
                "no fields to update".to_string(),
            ));
        }

        let unknown: Vec<&str> = fields
            .keys()
            .map(String::as_str)
            .filter(|k| !UPDATABLE_FIELDS.contains(k))
            .collect();
        if !unknown.is_empty() {
            return Err(HelpdeskError::InvalidArgument(format!(
                "unknown field(s): {} (allowed: {})",
                unknown.join(", "),
                UPDATABLE_FIELDS.join(", ")
            )));
        }

        let mut out = Vec::with_capacity(fields.len());
        for &column in UPDATABLE_FIELDS {
            let Some(value) = fields.get(column) else {
                continue;
            };
            let bound = match column {
                "status" => match value {
                    JsonValue::String(s) => {
                        SqlValue::Text(CustomerStatus::parse(s)?.as_str().to_string())
                    }
                    _ => {
                        return Err(HelpdeskError::InvalidArgument(
                            "status must be a string".to_string(),
                        ))
                    }
                },
                "name" => match value {
                    JsonValue::String(s) if !s.trim().is_empty() => SqlValue::Text(s.clone()),
                    _ => {
                        return Err(HelpdeskError::InvalidArgument(
                            "name must be a non-empty string".to_string(),
                        ))
                    }
                },
                // email / phone
                _ => match value {
                    JsonValue::String(s) => SqlValue::Text(s.clone()),
                    JsonValue::Null => SqlValue::Null,
                    _ => {
                        return Err(HelpdeskError::InvalidArgument(format!(
                            "{column} must be a string or null"
                        )))
                    }
                },
            };
            out.push((column, bound));
        }

        Ok(Self { fields: out })
    }
}

/// Apply a partial update to a customer and return the updated row.
///
/// The whole operation runs in one transaction: existence check, UPDATE
/// (which also bumps `updated_at`), and re-read. An unknown id yields
/// `NotFound` without writing anything. Only whitelisted column names from
/// the patch are interpolated into the statement; all values are bound.
pub fn update_customer_sync(conn: &Connection, id: i64, patch: &CustomerPatch) -> Result<Customer> {
    let tx = conn.unchecked_transaction()?;

    let exists = tx
        .query_row("SELECT 1 FROM customers WHERE id = ?1", [id], |_| Ok(()))
        .optional()?
        .is_some();
    if !exists {
        return Err(HelpdeskError::NotFound(format!(
            "customer {id} does not exist"
        )));
    }

    let mut assignments: Vec<String> = patch
        .fields
        .iter()
        .enumerate()
        .map(|(i, (column, _))| format!("{} = ?{}", column, i + 1))
        .collect();
    assignments.push(format!("updated_at = {}", super::schema::NOW_EXPR));

    let sql = format!(
        "UPDATE customers SET {} WHERE id = ?{}",
        assignments.join(", "),
        patch.fields.len() + 1
    );
    let mut bound: Vec<SqlValue> = patch.fields.iter().map(|(_, v)| v.clone()).collect();
    bound.push(SqlValue::Integer(id));
    tx.execute(&sql, params_from_iter(bound))?;

    let updated = tx
        .query_row(
            &format!("SELECT {CUSTOMER_COLS} FROM customers WHERE id = ?1"),
            [id],
            parse_customer_row,
        )
        .optional()?
        .ok_or_else(|| {
            HelpdeskError::Internal(format!("customer {id} missing after update"))
        })?;

    tx.commit()?;
    Ok(updated)
}
