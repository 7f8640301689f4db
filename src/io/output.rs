//! Output management for CLI commands.
//!
//! The engine's contract is one compact JSON object per invocation on
//! stdout, with all diagnostics on stderr. Writers are injectable so the
//! emitted bytes can be asserted in tests.

use crate::error::AnalysisError;
use crate::io::exit_code::ExitCode;
use serde::Serialize;
use std::io::{self, Write};

/// Writes query results and errors to the process streams.
pub struct OutputManager {
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputManager {
    pub fn new() -> Self {
        Self {
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    /// Create an output manager with custom writers for testing.
    pub fn with_writers(stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self { stdout, stderr }
    }

    /// Emit one result as a single JSON line on stdout.
    pub fn emit<T: Serialize>(&mut self, data: &T) -> Result<ExitCode, AnalysisError> {
        let line = serde_json::to_string(data)?;
        writeln!(self.stdout, "{line}")?;
        Ok(ExitCode::Success)
    }

    /// Report an error on stderr and return its exit code.
    pub fn error(&mut self, error: &AnalysisError) -> Result<ExitCode, AnalysisError> {
        writeln!(self.stderr, "Error [{}]: {error}", error.status_code())?;
        Ok(ExitCode::from_error(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Shared buffer writer so test assertions can read what was written.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_emit_writes_single_json_line() {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let mut manager =
            OutputManager::with_writers(Box::new(out.clone()), Box::new(err.clone()));

        #[derive(Serialize)]
        struct Payload {
            interfaces: Vec<String>,
        }

        let code = manager
            .emit(&Payload {
                interfaces: Vec::new(),
            })
            .unwrap();

        assert_eq!(code, ExitCode::Success);
        assert_eq!(out.contents(), "{\"interfaces\":[]}\n");
        assert!(err.contents().is_empty());
    }

    #[test]
    fn test_error_goes_to_stderr_only() {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let mut manager =
            OutputManager::with_writers(Box::new(out.clone()), Box::new(err.clone()));

        let error = AnalysisError::invalid_argument("root", "path does not exist");
        let code = manager.error(&error).unwrap();

        assert_eq!(code, ExitCode::InvalidArguments);
        assert!(out.contents().is_empty());
        assert!(err.contents().contains("INVALID_ARGUMENT"));
    }
}
