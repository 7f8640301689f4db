//! Configuration for the analysis engine.
//!
//! Layered loading: built-in defaults, then an optional `golens.toml` in
//! the working directory, then environment variables prefixed with
//! `GOLENS_` (double underscore separates nested levels, e.g.
//! `GOLENS_DEBUG=true`).
//!
//! The engine itself is stateless; settings only shape what the scan looks
//! at, never what it remembers.

use crate::error::{AnalysisError, AnalysisResult};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "golens.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Global debug mode (verbose scan diagnostics on stderr)
    #[serde(default = "default_false")]
    pub debug: bool,

    /// File extension of the analyzed language
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Directory names holding third-party/vendored code, skipped during
    /// traversal
    #[serde(default = "default_vendor_dirs")]
    pub vendor_dirs: Vec<String>,

    /// File-name suffix identifying test files, skipped during traversal
    #[serde(default = "default_test_suffix")]
    pub test_file_suffix: String,
}

fn default_false() -> bool {
    false
}

fn default_extension() -> String {
    "go".to_string()
}

fn default_vendor_dirs() -> Vec<String> {
    vec!["vendor".to_string()]
}

fn default_test_suffix() -> String {
    "_test.go".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: default_false(),
            extension: default_extension(),
            vendor_dirs: default_vendor_dirs(),
            test_file_suffix: default_test_suffix(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, config file, and environment.
    pub fn load() -> AnalysisResult<Self> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed("GOLENS_").split("__"))
            .extract()
            .map_err(|e| AnalysisError::ConfigError {
                reason: e.to_string(),
            })
    }

    /// Load settings from a specific config file path.
    pub fn load_from(path: &Path) -> AnalysisResult<Self> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("GOLENS_").split("__"))
            .extract()
            .map_err(|e| AnalysisError::ConfigError {
                reason: e.to_string(),
            })
    }

    /// Whether `path` names a source file of the analyzed language.
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    /// Whether `path` names a test file (excluded from every scan).
    pub fn is_test_file(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&self.test_file_suffix))
    }

    /// Whether a directory with this name is excluded from traversal.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        name.starts_with('.') || self.vendor_dirs.iter().any(|v| v == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.extension, "go");
        assert_eq!(settings.vendor_dirs, vec!["vendor".to_string()]);
        assert_eq!(settings.test_file_suffix, "_test.go");
        assert!(!settings.debug);
    }

    #[test]
    fn test_source_file_detection() {
        let settings = Settings::default();
        assert!(settings.is_source_file(&PathBuf::from("pkg/reader.go")));
        assert!(!settings.is_source_file(&PathBuf::from("pkg/reader.rs")));
        assert!(!settings.is_source_file(&PathBuf::from("Makefile")));
    }

    #[test]
    fn test_test_file_detection() {
        let settings = Settings::default();
        assert!(settings.is_test_file(&PathBuf::from("pkg/reader_test.go")));
        assert!(!settings.is_test_file(&PathBuf::from("pkg/reader.go")));
    }

    #[test]
    fn test_excluded_dirs() {
        let settings = Settings::default();
        assert!(settings.is_excluded_dir("vendor"));
        assert!(settings.is_excluded_dir(".git"));
        assert!(!settings.is_excluded_dir("internal"));
    }
}
