//! File system walker for discovering source files to analyze
//!
//! Traversal rules:
//! - vendored-dependency directories are skipped (configurable, default
//!   `vendor`)
//! - dot-prefixed directories are skipped
//! - test files are skipped
//! - only files with the configured source extension survive
//!
//! The walker is stateless: every call re-enumerates from disk. Entries in
//! file-name-sorted order so that "first match" queries are deterministic
//! for an unchanged tree.

use crate::Settings;
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Walks directories to find source files to analyze.
pub struct FileWalker<'a> {
    settings: &'a Settings,
}

impl<'a> FileWalker<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Recursively enumerate source files under `root`.
    ///
    /// Per-entry errors (unreadable subdirectory, broken symlink) are
    /// logged and skipped. An error before anything was read at all means
    /// the recursive walk itself failed; the walker then degrades to a
    /// flat scan of the root's immediate files rather than failing the
    /// query.
    pub fn walk(&self, root: &Path) -> Vec<PathBuf> {
        let settings = self.settings.clone();
        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(false)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                // The root itself is always kept, even when its own name
                // would match an exclusion rule.
                if entry.depth() == 0 {
                    return true;
                }
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                if !is_dir {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !settings.is_excluded_dir(name))
            })
            .build();

        let mut files = Vec::new();
        let mut saw_entry = false;

        for entry in walker {
            match entry {
                Ok(entry) => {
                    saw_entry = true;
                    let path = entry.path();
                    if entry.file_type().is_some_and(|ft| ft.is_file())
                        && self.wanted(path)
                    {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    if !saw_entry {
                        warn!(
                            root = %root.display(),
                            error = %e,
                            "recursive walk failed, falling back to flat scan"
                        );
                        return self.flat_scan(root);
                    }
                    warn!(error = %e, "skipping unreadable entry");
                }
            }
        }

        files
    }

    /// Non-recursive listing of the root's immediate source files.
    ///
    /// Used both as the degraded mode after a traversal failure and for
    /// package-scoped queries, which by definition look at one directory.
    pub fn flat_scan(&self, root: &Path) -> Vec<PathBuf> {
        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "cannot read directory");
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && self.wanted(path))
            .collect();
        files.sort();
        files
    }

    fn wanted(&self, path: &Path) -> bool {
        self.settings.is_source_file(path) && !self.settings.is_test_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "package p\n").unwrap();
    }

    #[test]
    fn test_walk_finds_nested_go_files() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("sub")).unwrap();

        touch(&root.join("a.go"));
        touch(&root.join("sub/b.go"));
        fs::write(root.join("notes.md"), "# notes").unwrap();

        let settings = Settings::default();
        let walker = FileWalker::new(&settings);
        let files = walker.walk(root);

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("a.go")));
        assert!(files.iter().any(|p| p.ends_with("sub/b.go")));
    }

    #[test]
    fn test_walk_skips_vendor_hidden_and_tests() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("vendor")).unwrap();
        fs::create_dir(root.join(".cache")).unwrap();

        touch(&root.join("main.go"));
        touch(&root.join("main_test.go"));
        touch(&root.join("vendor/dep.go"));
        touch(&root.join(".cache/gen.go"));

        let settings = Settings::default();
        let walker = FileWalker::new(&settings);
        let files = walker.walk(root);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("main.go"));
    }

    #[test]
    fn test_walk_order_is_deterministic() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        touch(&root.join("zz.go"));
        touch(&root.join("aa.go"));
        touch(&root.join("mm.go"));

        let settings = Settings::default();
        let walker = FileWalker::new(&settings);

        let first = walker.walk(root);
        let second = walker.walk(root);
        assert_eq!(first, second);
        assert!(first[0].ends_with("aa.go"));
        assert!(first[2].ends_with("zz.go"));
    }

    #[test]
    fn test_flat_scan_ignores_subdirectories() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir(root.join("sub")).unwrap();

        touch(&root.join("a.go"));
        touch(&root.join("a_test.go"));
        touch(&root.join("sub/b.go"));

        let settings = Settings::default();
        let walker = FileWalker::new(&settings);
        let files = walker.flat_scan(root);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.go"));
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("does-not-exist");

        let settings = Settings::default();
        let walker = FileWalker::new(&settings);
        assert!(walker.walk(&root).is_empty());
    }
}
