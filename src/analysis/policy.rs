//! Matching policies between concrete method sets and interfaces.
//!
//! Three policies exist and are deliberately not unified, because different
//! queries tolerate different false-positive rates:
//!
//! - `Subset`: the type defines at least every interface method; extra
//!   methods are fine. Drives implementation discovery.
//! - `Exact`: set-equal, no missing and no extra methods. A well-defined
//!   primitive kept available for future entry points; no query uses it.
//! - `NameOverlap`: a method is associated with an interface purely by
//!   shared name, without checking the owning type's full method set. Used
//!   only by the package summary. Known to produce false positives on
//!   common names like `Close` or `String`; that weakness is part of the
//!   observable contract and must not be "fixed" into `Subset`.

use crate::types::MethodDecl;
use std::collections::{HashMap, HashSet};

/// How a type's method set is matched against an interface's method names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    Subset,
    Exact,
    NameOverlap,
}

impl MatchPolicy {
    /// Whether a type with the given method-name set satisfies an interface
    /// requiring `interface_methods` under this policy.
    pub fn satisfies(&self, type_methods: &HashSet<&str>, interface_methods: &[String]) -> bool {
        match self {
            Self::Subset => interface_methods
                .iter()
                .all(|m| type_methods.contains(m.as_str())),
            Self::Exact => {
                type_methods.len() == interface_methods.len()
                    && interface_methods
                        .iter()
                        .all(|m| type_methods.contains(m.as_str()))
            }
            Self::NameOverlap => interface_methods
                .iter()
                .any(|m| type_methods.contains(m.as_str())),
        }
    }
}

/// Per-receiver method declarations aggregated across a scope.
///
/// Receivers keep their pointer marker, so `File` and `*File` are separate
/// entries. Receiver order is encounter order; a redeclaration of the same
/// receiver/method pair (possible across build-tagged files) replaces the
/// earlier declaration.
#[derive(Debug, Default)]
pub struct TypeMethodSet {
    order: Vec<String>,
    by_receiver: HashMap<String, Vec<MethodDecl>>,
}

impl TypeMethodSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, decl: MethodDecl) {
        if !self.by_receiver.contains_key(&decl.receiver) {
            self.order.push(decl.receiver.clone());
        }
        let methods = self.by_receiver.entry(decl.receiver.clone()).or_default();
        if let Some(existing) = methods.iter_mut().find(|m| m.name == decl.name) {
            *existing = decl;
        } else {
            methods.push(decl);
        }
    }

    pub fn extend(&mut self, decls: impl IntoIterator<Item = MethodDecl>) {
        for decl in decls {
            self.insert(decl);
        }
    }

    /// Receiver type names in encounter order.
    pub fn receivers(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Method declarations of one receiver, in encounter order.
    pub fn methods_of(&self, receiver: &str) -> &[MethodDecl] {
        self.by_receiver
            .get(receiver)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Method-name set of one receiver, for policy checks.
    pub fn name_set(&self, receiver: &str) -> HashSet<&str> {
        self.methods_of(receiver)
            .iter()
            .map(|m| m.name.as_str())
            .collect()
    }

    /// Find one receiver's declaration of a named method.
    pub fn method(&self, receiver: &str, name: &str) -> Option<&MethodDecl> {
        self.methods_of(receiver).iter().find(|m| m.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
