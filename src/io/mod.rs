//! CLI input/output: wire schema, output management, and exit codes.

pub mod exit_code;
pub mod output;
pub mod schema;

pub use exit_code::ExitCode;
pub use output::OutputManager;
pub use schema::{ImplementationsResponse, InterfacesResponse};
