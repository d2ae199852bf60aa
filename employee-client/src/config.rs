//! Client configuration

use crate::{ClientResult, EmployeeClient, ErrorPolicy, NetworkHttpClient};

/// Default API root
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration for connecting to the employees API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000"), without trailing slash
    pub base_url: String,

    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout: Option<u64>,

    /// Whether failed actions are kept as a user-visible notice
    pub error_policy: ErrorPolicy,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
            error_policy: ErrorPolicy::Silent,
        }
    }

    /// Read `EMPLOYEE_API_URL`, `EMPLOYEE_API_TIMEOUT_SECS` and
    /// `EMPLOYEE_SURFACE_ERRORS` from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] over an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("EMPLOYEE_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = lookup("EMPLOYEE_API_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0);

        let surface = lookup("EMPLOYEE_SURFACE_ERRORS")
            .and_then(|v| v.trim().to_lowercase().parse::<bool>().ok())
            .unwrap_or(false);

        let mut config = Self::new(base_url.trim());
        config.timeout = timeout;
        if surface {
            config.error_policy = ErrorPolicy::Surface;
        }
        config
    }

    /// Set the request timeout; `0` means none
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = (seconds > 0).then_some(seconds);
        self
    }

    /// Set the error policy
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }

    /// Create an employee client from this configuration
    pub fn build_client(&self) -> ClientResult<EmployeeClient> {
        EmployeeClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
