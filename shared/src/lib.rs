//! Shared types for the employee records client
//!
//! Wire models exchanged with the `employees` HTTP resource, used by the
//! client library and by the in-process test backend.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{Employee, EmployeePayload};
pub use response::{ErrorBody, StatusMessage};
