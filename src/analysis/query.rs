//! The five query entry points.
//!
//! Each query is a pure function of (settings, arguments) over the files on
//! disk at call time: indexes are rebuilt from scratch on every call and no
//! state is kept between calls. Running the same query twice against an
//! unchanged tree yields identical results.
//!
//! Unreadable and unparsable files are skipped silently; an empty result is
//! a successful outcome, never an error. The only error surfaced from here
//! is parser initialization failure.

use crate::Settings;
use crate::error::AnalysisResult;
use crate::indexing::FileWalker;
use crate::parsing::{GoLoader, index_interfaces, index_methods};
use crate::types::{InterfaceDecl, MethodDecl};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::policy::{MatchPolicy, TypeMethodSet};
use super::resolver::{PackageSummary, SatisfactionResolver};

/// Every interface declaration in one file.
pub fn file_interfaces(settings: &Settings, file: &Path) -> AnalysisResult<Vec<InterfaceDecl>> {
    let mut loader = GoLoader::new(settings)?;
    Ok(match loader.load(file) {
        Some(parsed) => index_interfaces(&parsed),
        None => Vec::new(),
    })
}

/// Methods in one file whose receiver type satisfies (subset policy) at
/// least one interface discovered anywhere under the file's directory.
///
/// Interfaces are tried in encounter order; the first satisfied one claims
/// the type and all of the type's methods in this file are reported with
/// their true spans.
pub fn file_implementations(settings: &Settings, file: &Path) -> AnalysisResult<Vec<MethodDecl>> {
    let mut loader = GoLoader::new(settings)?;

    let Some(parsed) = loader.load(file) else {
        return Ok(Vec::new());
    };

    let mut types = TypeMethodSet::new();
    types.extend(index_methods(&parsed));
    if types.is_empty() {
        return Ok(Vec::new());
    }

    let dir = file.parent().filter(|p| !p.as_os_str().is_empty());
    let dir = dir.unwrap_or_else(|| Path::new("."));
    debug!(dir = %dir.display(), "collecting interfaces for file query");

    let walker = FileWalker::new(settings);
    // Interfaces without named methods (empty interfaces, embedded-only
    // interfaces) are vacuously satisfied by every type and would claim
    // methods that implement nothing; they take no part in matching.
    let interfaces: Vec<InterfaceDecl> = collect_interfaces(&mut loader, &walker.walk(dir))
        .into_iter()
        .filter(|iface| !iface.methods.is_empty())
        .collect();
    debug!(count = interfaces.len(), "interfaces discovered");

    let resolver = SatisfactionResolver::new(MatchPolicy::Subset);
    let mut implementations = Vec::new();

    for receiver in types.receivers() {
        match resolver.first_satisfied(&types, receiver, &interfaces) {
            Some(iface) => {
                debug!(receiver, interface = %iface.name, "type satisfies interface");
                implementations.extend(types.methods_of(receiver).iter().cloned());
            }
            None => {
                debug!(receiver, "type satisfies no interface");
            }
        }
    }

    Ok(implementations)
}

/// Every interface anywhere under `root` declaring `method_name`.
///
/// Interfaces are returned with their method lists filtered down to the
/// matching entries; no deduplication across interfaces.
pub fn tree_interfaces(
    settings: &Settings,
    root: &Path,
    method_name: &str,
) -> AnalysisResult<Vec<InterfaceDecl>> {
    let mut loader = GoLoader::new(settings)?;
    let walker = FileWalker::new(settings);

    let mut matches = Vec::new();
    for iface in collect_interfaces(&mut loader, &walker.walk(root)) {
        let methods: Vec<_> = iface
            .methods
            .iter()
            .filter(|m| m.name == method_name)
            .cloned()
            .collect();
        if !methods.is_empty() {
            matches.push(InterfaceDecl { methods, ..iface });
        }
    }

    Ok(matches)
}

/// Implementations of `method_name` under `root`.
///
/// The first interface encountered that declares the method is taken as the
/// contract (no tie-break among interfaces sharing the name); every type in
/// the tree whose method set satisfies it (subset policy) contributes its
/// declaration of that one method.
pub fn tree_implementations(
    settings: &Settings,
    root: &Path,
    method_name: &str,
) -> AnalysisResult<Vec<MethodDecl>> {
    let mut loader = GoLoader::new(settings)?;
    let walker = FileWalker::new(settings);

    let mut target: Option<InterfaceDecl> = None;
    let mut types = TypeMethodSet::new();

    for path in walker.walk(root) {
        let Some(parsed) = loader.load(&path) else {
            continue;
        };
        if target.is_none() {
            target = index_interfaces(&parsed)
                .into_iter()
                .find(|iface| iface.declares(method_name));
        }
        types.extend(index_methods(&parsed));
    }

    let Some(target) = target else {
        debug!(method_name, "no interface declares the method");
        return Ok(Vec::new());
    };
    debug!(interface = %target.name, file = %target.file.display(), "matching against interface");

    let resolver = SatisfactionResolver::new(MatchPolicy::Subset);
    let interface_methods = target.method_names();

    let mut implementations = Vec::new();
    for receiver in resolver.satisfying_receivers(&types, &interface_methods) {
        if let Some(decl) = types.method(receiver, method_name) {
            implementations.push(decl.clone());
        }
    }

    Ok(implementations)
}

/// Package-level summary relation for one directory (non-recursive).
///
/// Combines the directory's interfaces with its per-file implementation
/// discoveries under the name-overlap association.
pub fn package_summary(settings: &Settings, dir: &Path) -> AnalysisResult<PackageSummary> {
    let mut loader = GoLoader::new(settings)?;
    let walker = FileWalker::new(settings);
    let files = walker.flat_scan(dir);

    let interfaces = collect_interfaces(&mut loader, &files);

    let mut implementations = Vec::new();
    for file in &files {
        implementations.extend(file_implementations(settings, file)?);
    }

    Ok(PackageSummary::derive(&interfaces, &implementations))
}

/// Parse each file and gather its interface declarations, in file order.
fn collect_interfaces(loader: &mut GoLoader, files: &[PathBuf]) -> Vec<InterfaceDecl> {
    let mut interfaces = Vec::new();
    for path in files {
        if let Some(parsed) = loader.load(path) {
            interfaces.extend(index_interfaces(&parsed));
        }
    }
    interfaces
}
