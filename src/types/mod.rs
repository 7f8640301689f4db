//! Core data types shared across the analysis engine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tree_sitter::Point;

/// A zero-based position in a source file.
///
/// Tree-sitter reports zero-based rows and columns natively, so points are
/// used as-is on the wire (external callers expect zero-based fields).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Build a location from a tree-sitter point.
    pub fn from_point(file: &Path, point: Point) -> Self {
        Self {
            file: file.to_path_buf(),
            line: point.row as u32,
            column: point.column as u32,
        }
    }

    /// The start of the line immediately following this location.
    ///
    /// Interface-method "end" locations are placement hints for an external
    /// UI affordance, not syntactic ends. Must stay this way.
    pub fn next_line_start(&self) -> Self {
        Self {
            file: self.file.clone(),
            line: self.line + 1,
            column: 0,
        }
    }
}

/// A single named method requirement inside an interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceMethod {
    pub name: String,
    pub location: Location,
    /// Next-line placement hint, not the true end of the element.
    pub end_location: Location,
}

/// An interface declaration extracted from one file.
///
/// Identity is scoped to the declaring file: two interfaces with the same
/// name in different files are distinct and never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDecl {
    pub name: String,
    pub file: PathBuf,
    pub location: Location,
    /// Named method requirements in declaration order. Embedded interface
    /// entries are not expanded.
    pub methods: Vec<InterfaceMethod>,
}

impl InterfaceDecl {
    /// Method names in declaration order.
    pub fn method_names(&self) -> Vec<String> {
        self.methods.iter().map(|m| m.name.clone()).collect()
    }

    /// Whether this interface requires a method with the given name.
    pub fn declares(&self, method_name: &str) -> bool {
        self.methods.iter().any(|m| m.name == method_name)
    }
}

/// A concrete method declaration (function with a receiver).
///
/// `receiver` keeps the pointer marker: a method on `*File` has receiver
/// `"*File"`, distinct from the value receiver `"File"`. The two are never
/// unified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub receiver: String,
    pub name: String,
    pub location: Location,
    /// True end-of-declaration position, unlike the interface-method hint.
    pub end_location: Location,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_line_start_resets_column() {
        let loc = Location::new("a.go", 4, 17);
        let next = loc.next_line_start();
        assert_eq!(next.line, 5);
        assert_eq!(next.column, 0);
        assert_eq!(next.file, loc.file);
    }

    #[test]
    fn test_interface_declares() {
        let loc = Location::new("a.go", 0, 0);
        let iface = InterfaceDecl {
            name: "Reader".to_string(),
            file: "a.go".into(),
            location: loc.clone(),
            methods: vec![InterfaceMethod {
                name: "Read".to_string(),
                location: loc.clone(),
                end_location: loc.next_line_start(),
            }],
        };
        assert!(iface.declares("Read"));
        assert!(!iface.declares("Write"));
        assert_eq!(iface.method_names(), vec!["Read".to_string()]);
    }
}
