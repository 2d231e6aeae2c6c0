// src/lib.rs

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod mcp;
pub mod tools;

pub use error::{HelpdeskError, Result};
