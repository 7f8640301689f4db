//! Error types for the analysis engine.
//!
//! Only genuine boundary faults are represented here. Unreadable or
//! unparsable source files and directory-traversal failures are recovered
//! where they occur and never become error values: a scan always produces a
//! (possibly empty) result.

use thiserror::Error;

/// Main error type for analysis operations.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to initialize Go parser: {reason}")]
    ParserInit { reason: String },

    #[error("Failed to write result to output stream: {source}")]
    OutputWrite {
        #[from]
        source: std::io::Error,
    },

    #[error("Failed to serialize result: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },
}

impl AnalysisError {
    /// Stable status code for programmatic handling of error output.
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::ParserInit { .. } => "PARSER_INIT_ERROR",
            Self::OutputWrite { .. } => "OUTPUT_WRITE_ERROR",
            Self::Serialize { .. } => "SERIALIZE_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::ConfigError { .. } => "CONFIG_ERROR",
        }
    }

    /// Convenience constructor for argument validation at the CLI boundary.
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_stable() {
        let err = AnalysisError::ParserInit {
            reason: "abi mismatch".to_string(),
        };
        assert_eq!(err.status_code(), "PARSER_INIT_ERROR");

        let err = AnalysisError::invalid_argument("root", "path does not exist");
        assert_eq!(err.status_code(), "INVALID_ARGUMENT");
    }
}
