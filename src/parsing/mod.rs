//! Source parsing and per-file indexing.
//!
//! `loader` turns file bytes into syntax trees; `interfaces` and `methods`
//! extract the two per-file indexes every query is built from.

pub mod interfaces;
pub mod loader;
pub mod methods;

pub use interfaces::index_interfaces;
pub use loader::{GoLoader, ParsedFile};
pub use methods::index_methods;
