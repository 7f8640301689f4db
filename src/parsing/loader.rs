//! Go source loader
//!
//! Uses tree-sitter-go crate's LANGUAGE constant (converted via .into()).
//!
//! Loading is deliberately lossy: a file that has the wrong extension,
//! cannot be read, or does not parse contributes nothing and never aborts a
//! larger scan.

use crate::Settings;
use crate::error::AnalysisError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tree_sitter::{Parser, Tree};

/// A parsed source file: the original text plus its syntax tree.
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
}

impl ParsedFile {
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Source text of a node.
    pub fn text(&self, node: tree_sitter::Node) -> &str {
        &self.source[node.byte_range()]
    }
}

/// Go language loader wrapping a tree-sitter parser.
pub struct GoLoader {
    parser: Parser,
    extension: String,
}

impl GoLoader {
    /// Create a new Go loader.
    pub fn new(settings: &Settings) -> Result<Self, AnalysisError> {
        let mut parser = Parser::new();
        let lang = tree_sitter_go::LANGUAGE;
        parser
            .set_language(&lang.into())
            .map_err(|e| AnalysisError::ParserInit {
                reason: format!("Failed to set Go language: {e}"),
            })?;

        Ok(Self {
            parser,
            extension: settings.extension.clone(),
        })
    }

    /// Parse one file. Returns `None` when the file should contribute
    /// nothing: wrong extension, unreadable, invalid UTF-8, or no tree.
    pub fn load(&mut self, path: &Path) -> Option<ParsedFile> {
        let matches_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension);
        if !matches_extension {
            debug!(path = %path.display(), "skipping non-source file");
            return None;
        }

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable file");
                return None;
            }
        };

        match self.parser.parse(&source, None) {
            Some(tree) => Some(ParsedFile {
                path: path.to_path_buf(),
                source,
                tree,
            }),
            None => {
                debug!(path = %path.display(), "skipping unparsable file");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn loader() -> GoLoader {
        GoLoader::new(&Settings::default()).unwrap()
    }

    #[test]
    fn test_load_valid_go_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.go");
        fs::write(&path, "package main\n\nfunc main() {}\n").unwrap();

        let parsed = loader().load(&path).expect("valid file should parse");
        assert_eq!(parsed.root().kind(), "source_file");
        assert_eq!(parsed.path, path);
    }

    #[test]
    fn test_skip_wrong_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.rs");
        fs::write(&path, "fn main() {}").unwrap();

        assert!(loader().load(&path).is_none());
    }

    #[test]
    fn test_skip_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.go");

        assert!(loader().load(&path).is_none());
    }

    #[test]
    fn test_malformed_source_still_yields_tree() {
        // Tree-sitter produces a tree with error nodes rather than failing
        // outright, so even broken source contributes what it can.
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.go");
        fs::write(&path, "package main\n\nfunc (((").unwrap();

        assert!(loader().load(&path).is_some());
    }
}
