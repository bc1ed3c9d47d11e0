//! Externally supplied credentials.
//!
//! Credentials for hosted services are never written in source or config
//! files. They are read from the environment at startup and wrapped in
//! `ApiKey`, whose `Debug` and `Display` output is redacted.

use std::fmt;

use crate::error::{MedReportError, MedReportResult};

/// An API key for a hosted collaborator. Prints as `***`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from environment variable `var`.
    ///
    /// Returns `ConfigError` if the variable is unset or blank; the error
    /// names the variable but never includes its value.
    pub fn from_env(var: &str) -> MedReportResult<Self> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(Self(value.trim().to_string())),
            _ => Err(MedReportError::ConfigError {
                reason: format!("environment variable '{}' is not set", var),
            }),
        }
    }

    /// The raw key, for use in a request header only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
