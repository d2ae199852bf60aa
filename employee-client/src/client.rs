//! EmployeeClient - the stateful client surface
//!
//! Holds the edit form and the rows of the last list fetch, and drives the
//! four user actions. Every action is request → response → re-render; there
//! is no retry and no optimistic update.
//!
//! Request failures never change the success-path flow: submit still resets
//! the form and reloads, delete still reloads. Each operation returns the
//! request's `Result` so callers (and tests) can observe the failure, and
//! [`ErrorPolicy::Surface`] additionally keeps a [`Notice`] for display.

use std::fmt;

use shared::models::Employee;
use tracing::{info, warn};

use crate::form::{EmployeeForm, Field, FormMode, Submission};
use crate::render::{EmployeeRow, render_rows};
use crate::{ClientConfig, ClientError, ClientResult, EmployeeApi, HttpClient, NetworkHttpClient};

/// What happens to request failures besides being returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Logged only; nothing is shown to the user
    #[default]
    Silent,
    /// Also kept as the client's current [`Notice`]
    Surface,
}

/// User action a notice refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update(i64),
    Edit(i64),
    Delete(i64),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Load => write!(f, "load employees"),
            Action::Create => write!(f, "create employee"),
            Action::Update(id) => write!(f, "update employee {}", id),
            Action::Edit(id) => write!(f, "load employee {}", id),
            Action::Delete(id) => write!(f, "delete employee {}", id),
        }
    }
}

/// The first failure of the latest action, kept under [`ErrorPolicy::Surface`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub action: Action,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not {}: {}", self.action, self.message)
    }
}

/// Employee records client
#[derive(Debug)]
pub struct EmployeeClient<H: HttpClient = NetworkHttpClient> {
    api: EmployeeApi<H>,
    form: EmployeeForm,
    rows: Vec<EmployeeRow>,
    policy: ErrorPolicy,
    notice: Option<Notice>,
}

impl EmployeeClient<NetworkHttpClient> {
    /// Build a network client from configuration
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(config)?;
        Ok(Self::new(http).with_error_policy(config.error_policy))
    }
}

impl<H: HttpClient> EmployeeClient<H> {
    pub fn new(http: H) -> Self {
        Self {
            api: EmployeeApi::new(http),
            form: EmployeeForm::new(),
            rows: Vec::new(),
            policy: ErrorPolicy::default(),
            notice: None,
        }
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn mode(&self) -> FormMode {
        self.form.mode()
    }

    /// Rows rendered from the last successful list fetch
    pub fn rows(&self) -> &[EmployeeRow] {
        &self.rows
    }

    /// Latest failure, only ever set under [`ErrorPolicy::Surface`]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Fetch the full list and replace every row
    ///
    /// On failure the previous rows stay. Returns the number of rows.
    pub async fn load_employees(&mut self) -> ClientResult<usize> {
        self.notice = None;
        self.refresh().await
    }

    /// Create or update from the form, then reset the form and reload
    ///
    /// Input that does not parse returns [`ClientError::InvalidInput`]
    /// before anything is sent; the form keeps its values in that case.
    pub async fn submit_form(&mut self) -> ClientResult<Employee> {
        self.notice = None;
        let submission = self.form.submission()?;

        let (action, result) = match submission {
            Submission::Create(payload) => (Action::Create, self.api.create(&payload).await),
            Submission::Update { id, payload } => {
                (Action::Update(id), self.api.update(id, &payload).await)
            }
        };

        match &result {
            Ok(emp) => info!(id = emp.id, action = %action, "employee saved"),
            Err(e) => self.record_failure(action, e),
        }

        self.reset_form();
        let _ = self.refresh().await;
        result
    }

    /// Fetch one record and copy it into the form (update mode)
    ///
    /// On failure the form is left untouched.
    pub async fn edit_employee(&mut self, id: i64) -> ClientResult<Employee> {
        self.notice = None;
        match self.api.get(id).await {
            Ok(emp) => {
                self.form.populate(&emp);
                Ok(emp)
            }
            Err(e) => {
                self.record_failure(Action::Edit(id), &e);
                Err(e)
            }
        }
    }

    /// Delete a record, then reload regardless of the outcome
    pub async fn delete_employee(&mut self, id: i64) -> ClientResult<()> {
        self.notice = None;
        let result = self.api.delete(id).await;

        match &result {
            Ok(()) => info!(id, "employee deleted"),
            Err(e) => self.record_failure(Action::Delete(id), e),
        }

        let _ = self.refresh().await;
        result
    }

    /// Clear every form input and the edit buffer id
    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    async fn refresh(&mut self) -> ClientResult<usize> {
        match self.api.list().await {
            Ok(employees) => {
                self.rows = render_rows(&employees);
                Ok(self.rows.len())
            }
            Err(e) => {
                self.record_failure(Action::Load, &e);
                Err(e)
            }
        }
    }

    fn record_failure(&mut self, action: Action, err: &ClientError) {
        warn!(action = %action, error = %err, "request failed");
        // first failure of the action wins over the follow-up reload
        if self.policy == ErrorPolicy::Surface && self.notice.is_none() {
            self.notice = Some(Notice {
                action,
                message: err.to_string(),
            });
        }
    }
}
