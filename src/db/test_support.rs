// src/db/test_support.rs
// Shared helpers for db unit tests

use rusqlite::{params, Connection};

/// Open a fresh in-memory connection with the schema applied.
pub(crate) fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch("PRAGMA foreign_keys=ON;")
        .expect("enable foreign keys");
    super::schema::run_migrations(&conn).expect("run migrations");
    conn
}

/// Insert a customer row and return its id.
pub(crate) fn insert_customer(conn: &Connection, name: &str, status: &str) -> i64 {
    conn.execute(
        "INSERT INTO customers (name, status) VALUES (?1, ?2)",
        params![name, status],
    )
    .expect("insert customer");
    conn.last_insert_rowid()
}
