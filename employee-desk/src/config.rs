//! Desk configuration, read from environment variables

use employee_client::ClientConfig;

/// employee-desk settings
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// API client settings (`EMPLOYEE_API_URL`, ...)
    pub client: ClientConfig,
    /// `EMPLOYEE_LOG_LEVEL`, default `info`
    pub log_level: String,
    /// `EMPLOYEE_LOG_DIR`; when set and existing, logs go to daily files there
    pub log_dir: Option<String>,
}

impl DeskConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            client: ClientConfig::from_lookup(&lookup),
            log_level: lookup("EMPLOYEE_LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("EMPLOYEE_LOG_DIR").filter(|dir| !dir.trim().is_empty()),
        }
    }
}
