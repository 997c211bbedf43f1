/// Error types for building a HUC12 detail report
use thiserror::Error;

/// Message shown to the caller when the unit lookup does not yield exactly one row.
pub const UNIT_NOT_FOUND_MESSAGE: &str = "ERROR: HUC12 was not found!";

/// Every variant ends the request; nothing is retried.
#[derive(Error, Debug)]
pub enum ReportError {
    /// A required request parameter was absent
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// A date parameter could not be parsed
    #[error("Invalid {name} parameter {value:?}: {reason}")]
    InvalidDate {
        name: &'static str,
        value: String,
        reason: String,
    },

    /// No unit matched (huc12, scenario)
    #[error("HUC12 {huc12} not found for scenario {scenario}")]
    NotFound { huc12: String, scenario: i64 },

    /// More than one unit matched (huc12, scenario)
    #[error("HUC12 {huc12} matched {count} units for scenario {scenario}")]
    Ambiguous {
        huc12: String,
        scenario: i64,
        count: usize,
    },

    /// The store itself failed
    #[error("Store query failed: {0}")]
    Store(#[from] anyhow::Error),
}

impl ReportError {
    /// What the caller sees in place of the report, if this error is one the
    /// request itself caused. Store failures return `None` and are left to
    /// the host to report.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            ReportError::MissingParameter(_) | ReportError::InvalidDate { .. } => Some(""),
            ReportError::NotFound { .. } | ReportError::Ambiguous { .. } => {
                Some(UNIT_NOT_FOUND_MESSAGE)
            }
            ReportError::Store(_) => None,
        }
    }
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
