//! Employee Client - HTTP client for the `employees` resource
//!
//! Lists, creates, edits and deletes employee records over a REST API and
//! keeps the client-side state a front end renders: the edit form and the
//! table of rows from the last list fetch.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod render;

pub use api::EmployeeApi;
pub use client::{Action, EmployeeClient, ErrorPolicy, Notice};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{EmployeeFields, EmployeeForm, Field, FormMode, InvalidReason, Submission, ValidationError};
pub use http::{HttpClient, NetworkHttpClient};
pub use render::{EmployeeRow, RowAction, format_table, render_rows};

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeePayload};
