// src/db/tickets.rs
// Ticket creation and per-customer history

use super::types::{Ticket, TicketPriority};
use crate::error::Result;
use rusqlite::{params, Connection, OptionalExtension};

const TICKET_COLS: &str = "id, customer_id, issue, status, priority, created_at";

pub fn parse_ticket_row(row: &rusqlite::Row) -> rusqlite::Result<Ticket> {
    Ok(Ticket {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        issue: row.get(2)?,
        status: row.get(3)?,
        priority: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Create a ticket for an existing customer and return the stored row.
///
/// Returns `Ok(None)` when the customer id is unknown; nothing is written
/// in that case. The existence check and insert run in one transaction so
/// the referential check cannot race a concurrent customer delete.
pub fn create_ticket_sync(
    conn: &Connection,
    customer_id: i64,
    issue: &str,
    priority: TicketPriority,
) -> Result<Option<Ticket>> {
    let tx = conn.unchecked_transaction()?;

    let exists = tx
        .query_row("SELECT 1 FROM customers WHERE id = ?1", [customer_id], |_| Ok(()))
        .optional()?
        .is_some();
    if !exists {
        return Ok(None);
    }

    tx.execute(
        "INSERT INTO tickets (customer_id, issue, priority) VALUES (?1, ?2, ?3)",
        params![customer_id, issue, priority.as_str()],
    )?;
    let id = tx.last_insert_rowid();

    let ticket = tx.query_row(
        &format!("SELECT {TICKET_COLS} FROM tickets WHERE id = ?1"),
        [id],
        parse_ticket_row,
    )?;

    tx.commit()?;
    Ok(Some(ticket))
}

/// All tickets for a customer, oldest id first. An unknown customer id
/// yields an empty list, same as a customer with no tickets.
pub fn customer_history_sync(conn: &Connection, customer_id: i64) -> rusqlite::Result<Vec<Ticket>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TICKET_COLS} FROM tickets WHERE customer_id = ?1 ORDER BY id ASC"
    ))?;
    let rows = stmt.query_map([customer_id], parse_ticket_row)?;
    rows.collect()
}
