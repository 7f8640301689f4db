//! Exit codes for CLI operations following Unix conventions.
//!
//! Empty analysis results are a success: "no implementations found" exits 0
//! with an empty collection. Non-zero codes are reserved for faults in the
//! invocation itself or in the process boundary.

use crate::error::AnalysisError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded, including empty results (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Malformed invocation: missing arguments or unknown verb (code 2)
    InvalidArguments = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert an `AnalysisError` to the appropriate exit code.
    pub fn from_error(error: &AnalysisError) -> Self {
        match error {
            AnalysisError::InvalidArgument { .. } => ExitCode::InvalidArguments,
            _ => ExitCode::GeneralError,
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }
}
