//! Error types for catalog loading and schedule management.
//!
//! Parsing time descriptors and checking conflicts never fail: malformed
//! descriptor lines are dropped and missing times mean "no schedule". Errors
//! only arise at the edges of the crate.
//!
//! ## Error Categories
//!
//! - **File Errors**: catalog or configuration files that cannot be read
//! - **Parse Errors**: catalog JSON or configuration YAML that does not deserialize
//! - **Config Errors**: configuration values outside their allowed range
//! - **Lookup Errors**: a `seq` that the catalog does not contain
//! - **Selection Errors**: a course that cannot join the schedule because it
//!   collides with selected courses or exceeds the credit limit
//!
//! ## Helper Constructors
//!
//! ```rust
//! use coursegrid::ScheduleError;
//!
//! let error = ScheduleError::conflict("1234", vec!["0042".to_string()]);
//! assert!(error.is_user_correctable());
//! assert!(error.to_string().contains("0042"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for schedule operations.
pub type Result<T, E = ScheduleError> = std::result::Result<T, E>;

/// Main error type for catalog and schedule operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScheduleError {
    #[error("Cannot read {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Course {seq} conflicts with selected course(s) {}", .with.join(", "))]
    Conflict { seq: String, with: Vec<String> },

    #[error("Course {seq} is not in the catalog")]
    UnknownCourse { seq: String },

    #[error("Course {seq} would bring the schedule to {requested} credits (limit {limit})")]
    CreditLimit { seq: String, requested: u32, limit: u32 },
}

impl ScheduleError {
    /// Whether the user can resolve this error by changing their selection.
    pub fn is_user_correctable(&self) -> bool {
        match self {
            ScheduleError::Conflict { .. } | ScheduleError::CreditLimit { .. } => true,
            ScheduleError::File { .. }
            | ScheduleError::Parse { .. }
            | ScheduleError::Config { .. }
            | ScheduleError::UnknownCourse { .. } => false,
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScheduleError::File { path: path.into(), source }
    }

    /// Helper constructor for parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl ToString) -> Self {
        ScheduleError::Parse { context: context.into(), details: details.to_string() }
    }

    /// Helper constructor for configuration errors.
    pub fn config_error(reason: impl Into<String>) -> Self {
        ScheduleError::Config { reason: reason.into() }
    }

    /// Helper constructor for conflict errors.
    pub fn conflict(seq: impl Into<String>, with: Vec<String>) -> Self {
        ScheduleError::Conflict { seq: seq.into(), with }
    }
}
