//! Unified error handling for the PowerTrader hub
//!
//! Every fallible operation in the crate returns `HubResult`. The binaries map
//! an error into a non-zero exit status after logging a diagnostic; library
//! code never retries and never swallows an error without a documented
//! fallback.

/// Main error type for the hub processes
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    #[error("File read error: {0}")]
    FileRead(String),

    #[error("File write error: {0}")]
    FileWrite(String),

    #[error("Directory creation error: {0}")]
    DirectoryCreate(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Credential file invalid: {0}")]
    CredentialsInvalid(String),

    #[error("Security error: {0}")]
    SecurityViolation(String),
}

impl HubError {
    /// Get error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            HubError::FileRead(_)
            | HubError::FileWrite(_)
            | HubError::DirectoryCreate(_) => "io",

            HubError::MalformedRecord(_) | HubError::CredentialsInvalid(_) => "input",

            HubError::SecurityViolation(_) => "security",
        }
    }
}

/// Result type alias using HubError
pub type HubResult<T> = Result<T, HubError>;
