//! Error types for trace generation and playback
//!
//! Generation itself is a pure function over well-formed input, so the
//! taxonomy is small:
//!
//! - Lookup and input failures ([`SortError::UnknownAlgorithm`],
//!   [`SortError::InvalidValue`], [`SortError::DuplicateId`]) fail fast before
//!   any step is produced.
//! - Navigation failures are returned by the [`Player`] when the cursor would
//!   leave the trace.
//! - [`SortError::TraceViolation`] is reported by [`StepTrace::verify`].
//!
//! [`Player`]: crate::player::Player
//! [`StepTrace::verify`]: crate::trace::StepTrace::verify

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("unknown algorithm '{key}' (expected one of: bubble, quick, merge)")]
    UnknownAlgorithm { key: String },

    #[error("invalid value '{token}': expected an integer")]
    InvalidValue { token: String },

    #[error("element id {id} appears more than once in the input")]
    DuplicateId { id: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("already at the first step")]
    AtStart,

    #[error("already at the last step")]
    AtEnd,

    #[error("step {index} is out of range (trace has {total} steps)")]
    StepOutOfRange { index: usize, total: usize },

    #[error("trace invariant broken at step {step}: {message}")]
    TraceViolation { step: usize, message: String },

    #[error("failed to install logger: {message}")]
    Logging { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SortError {
    pub fn violation(step: usize, message: impl Into<String>) -> Self {
        SortError::TraceViolation {
            step,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        SortError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Navigation errors are routine during playback and are shown as status
    /// messages rather than treated as failures
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            SortError::AtStart | SortError::AtEnd | SortError::StepOutOfRange { .. }
        )
    }
}
