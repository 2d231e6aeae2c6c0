// src/db/mod.rs
// SQLite data access layer

pub mod customers;
pub mod pool;
pub mod schema;
pub mod tickets;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use customers::{
    get_customer_sync, list_customers_sync, update_customer_sync, CustomerPatch,
};
pub use pool::DatabasePool;
pub use tickets::{create_ticket_sync, customer_history_sync};
pub use types::{Customer, CustomerStatus, Ticket, TicketPriority, TicketStatus};
