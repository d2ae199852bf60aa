//! Data models
//!
//! Shared between the client and any backend speaking the `employees` contract.
//! All IDs are `i64` (server-assigned INTEGER PRIMARY KEY).

pub mod employee;

// Re-exports
pub use employee::*;
