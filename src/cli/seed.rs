// src/cli/seed.rs
// Sample dataset loader

use crate::db::{DatabasePool, TicketPriority, TicketStatus};
use anyhow::{bail, Context, Result};
use rusqlite::params;
use std::path::Path;

const SAMPLE_CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("Alice Johnson", "alice@email.com", "555-0101", "active"),
    ("Bob Smith", "bob@email.com", "555-0102", "active"),
    ("Charlie Brown", "charlie@email.com", "555-0103", "active"),
    ("Diana Prince", "diana@email.com", "555-0104", "disabled"),
    ("Eve Martinez", "eve@email.com", "555-0105", "active"),
    ("Frank Wilson", "frank@email.com", "555-0106", "active"),
    ("Grace Lee", "grace@email.com", "555-0107", "active"),
    ("Henry Davis", "henry@email.com", "555-0108", "disabled"),
    ("Ivy Chen", "ivy@email.com", "555-0109", "active"),
    ("Jack Thompson", "jack@email.com", "555-0110", "active"),
    ("Karen White", "karen@email.com", "555-0111", "active"),
    ("Leo Garcia", "leo@email.com", "555-0112", "disabled"),
    ("Maria Rodriguez", "maria@email.com", "555-0113", "active"),
    ("Nathan Kim", "nathan@email.com", "555-0114", "active"),
    ("Olivia Taylor", "olivia@email.com", "555-0115", "active"),
];

const SAMPLE_TICKETS: &[(i64, &str, TicketStatus, TicketPriority)] = &[
    (1, "Cannot login to my account", TicketStatus::Open, TicketPriority::High),
    (1, "Password reset email not received", TicketStatus::Open, TicketPriority::Medium),
    (1, "Two-factor authentication not working", TicketStatus::Resolved, TicketPriority::High),
    (2, "Need help upgrading subscription", TicketStatus::InProgress, TicketPriority::Low),
    (2, "Billing cycle question", TicketStatus::Resolved, TicketPriority::Low),
    (3, "Billing issue - charged twice", TicketStatus::Open, TicketPriority::High),
    (3, "Refund request for duplicate charge", TicketStatus::Open, TicketPriority::High),
    (4, "Feature request: dark mode", TicketStatus::Open, TicketPriority::Low),
    (4, "Account reactivation request", TicketStatus::Open, TicketPriority::Medium),
    (5, "Password reset not working", TicketStatus::Resolved, TicketPriority::Medium),
    (6, "App crashes on startup", TicketStatus::Open, TicketPriority::High),
    (6, "Data sync issue between devices", TicketStatus::InProgress, TicketPriority::Medium),
    (7, "Cannot export reports to PDF", TicketStatus::Open, TicketPriority::Medium),
    (8, "Account was hacked", TicketStatus::Open, TicketPriority::High),
    (9, "Integration with Slack not working", TicketStatus::InProgress, TicketPriority::Medium),
    (9, "API rate limit exceeded", TicketStatus::Open, TicketPriority::Low),
    (10, "Mobile app notification issues", TicketStatus::Open, TicketPriority::Low),
    (11, "Cannot cancel subscription", TicketStatus::Open, TicketPriority::High),
    (11, "Charged after cancellation", TicketStatus::Open, TicketPriority::High),
    (13, "Need invoice for tax purposes", TicketStatus::Open, TicketPriority::Medium),
    (14, "Feature request: calendar integration", TicketStatus::Open, TicketPriority::Low),
    (15, "Slow loading times", TicketStatus::InProgress, TicketPriority::Medium),
    (15, "Search function not returning results", TicketStatus::Open, TicketPriority::High),
];

/// Create the schema and load the sample dataset.
///
/// Refuses to seed a database that already has customers unless `reset` is
/// given, in which case the database file is deleted first.
pub async fn run_seed(db_path: &Path, reset: bool) -> Result<()> {
    if reset && db_path.exists() {
        std::fs::remove_file(db_path)
            .with_context(|| format!("Failed to remove {}", db_path.display()))?;
        // WAL sidecars, if any
        for ext in ["db-wal", "db-shm"] {
            let _ = std::fs::remove_file(db_path.with_extension(ext));
        }
        tracing::info!("Removed existing database: {}", db_path.display());
    }

    let pool = DatabasePool::open(db_path).await?;

    let existing: i64 = pool
        .interact(|conn| {
            conn.query_row("SELECT COUNT(*) FROM customers", [], |row| row.get(0))
                .map_err(Into::into)
        })
        .await?;
    if existing > 0 {
        bail!(
            "database already has {} customer(s); pass --reset to start over",
            existing
        );
    }

    let (customer_count, ticket_count) = pool
        .interact(|conn| {
            let tx = conn.unchecked_transaction()?;
            for (name, email, phone, status) in SAMPLE_CUSTOMERS {
                tx.execute(
                    "INSERT INTO customers (name, email, phone, status) VALUES (?1, ?2, ?3, ?4)",
                    params![name, email, phone, status],
                )?;
            }
            for (customer_id, issue, status, priority) in SAMPLE_TICKETS {
                tx.execute(
                    "INSERT INTO tickets (customer_id, issue, status, priority) VALUES (?1, ?2, ?3, ?4)",
                    params![customer_id, issue, status.as_str(), priority.as_str()],
                )?;
            }
            tx.commit()?;
            Ok((SAMPLE_CUSTOMERS.len(), SAMPLE_TICKETS.len()))
        })
        .await?;

    println!("Seeded {} ({customer_count} customers, {ticket_count} tickets)", db_path.display());
    Ok(())
}
