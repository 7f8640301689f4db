//! golens: structural interface-satisfaction analysis for Go source trees.
//!
//! The engine is stateless and on-demand: every query re-scans the files it
//! needs, computes which concrete types satisfy which interfaces, and
//! answers with zero-based source locations. Nothing is cached or persisted
//! between invocations.

pub mod analysis;
pub mod config;
pub mod error;
pub mod indexing;
pub mod io;
pub mod parsing;
pub mod types;

pub use analysis::{MatchPolicy, PackageSummary, SatisfactionResolver, TypeMethodSet};
pub use config::Settings;
pub use error::{AnalysisError, AnalysisResult};
pub use types::{InterfaceDecl, InterfaceMethod, Location, MethodDecl};
