//! Directory traversal for query scopes.

pub mod walker;

pub use walker::FileWalker;
