//! Satisfaction analysis: matching policies, the resolver, and the query
//! entry points composing them.

pub mod policy;
pub mod query;
pub mod resolver;

pub use policy::{MatchPolicy, TypeMethodSet};
pub use resolver::{PackageSummary, SatisfactionResolver};
