//! Satisfaction resolution between method sets and interfaces.
//!
//! Pure derivation over already-extracted indexes; nothing here touches the
//! filesystem and nothing survives past one query.

use crate::types::{InterfaceDecl, MethodDecl};
use serde::Serialize;
use std::collections::BTreeMap;

use super::policy::{MatchPolicy, TypeMethodSet};

/// Applies one matching policy between types and interfaces.
#[derive(Debug, Clone, Copy)]
pub struct SatisfactionResolver {
    policy: MatchPolicy,
}

impl SatisfactionResolver {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Whether `receiver`'s method set satisfies `interface_methods`.
    pub fn satisfies(
        &self,
        types: &TypeMethodSet,
        receiver: &str,
        interface_methods: &[String],
    ) -> bool {
        self.policy
            .satisfies(&types.name_set(receiver), interface_methods)
    }

    /// The first interface (in the given encounter order) that `receiver`
    /// satisfies, if any. Ties between interfaces that share method names
    /// are not disambiguated further.
    pub fn first_satisfied<'a>(
        &self,
        types: &TypeMethodSet,
        receiver: &str,
        interfaces: &'a [InterfaceDecl],
    ) -> Option<&'a InterfaceDecl> {
        let names = types.name_set(receiver);
        interfaces
            .iter()
            .find(|iface| self.policy.satisfies(&names, &iface.method_names()))
    }

    /// Every receiver (in encounter order) satisfying the given interface.
    pub fn satisfying_receivers<'a>(
        &self,
        types: &'a TypeMethodSet,
        interface_methods: &[String],
    ) -> Vec<&'a str> {
        types
            .receivers()
            .filter(|receiver| self.satisfies(types, receiver, interface_methods))
            .collect()
    }
}

/// The package-level summary relation consumed by the external UI.
///
/// Built under the name-overlap association: a discovered implementation
/// method is attributed to an interface whenever the interface declares a
/// method of the same name, regardless of whether the owning type satisfies
/// that interface. Two unrelated interfaces sharing a name like `Close`
/// will both claim unrelated methods; that imprecision is intentional.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub interface_implementations: BTreeMap<String, Vec<String>>,
    pub method_to_interface: BTreeMap<String, String>,
}

impl PackageSummary {
    /// Derive the summary from the interfaces and implementations found in
    /// one package directory.
    ///
    /// Interfaces are visited in sorted-name order and implementations in
    /// encounter order, so the output is stable across runs. Repeated name
    /// matches append repeatedly; duplicates in the per-interface list are
    /// preserved.
    pub fn derive(interfaces: &[InterfaceDecl], implementations: &[MethodDecl]) -> Self {
        let mut summary = Self::default();

        let mut ordered: Vec<&InterfaceDecl> = interfaces.iter().collect();
        ordered.sort_by(|a, b| a.name.cmp(&b.name));

        for iface in ordered {
            for method in &iface.methods {
                for implementation in implementations {
                    if implementation.name == method.name {
                        summary
                            .interface_implementations
                            .entry(iface.name.clone())
                            .or_default()
                            .push(implementation.name.clone());
                        summary
                            .method_to_interface
                            .insert(implementation.name.clone(), iface.name.clone());
                    }
                }
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{InterfaceMethod, Location};

    fn iface(name: &str, file: &str, methods: &[&str]) -> InterfaceDecl {
        let loc = Location::new(file, 0, 0);
        InterfaceDecl {
            name: name.to_string(),
            file: file.into(),
            location: loc.clone(),
            methods: methods
                .iter()
                .enumerate()
                .map(|(i, m)| InterfaceMethod {
                    name: m.to_string(),
                    location: Location::new(file, i as u32 + 1, 1),
                    end_location: Location::new(file, i as u32 + 2, 0),
                })
                .collect(),
        }
    }

    fn method(receiver: &str, name: &str) -> MethodDecl {
        let loc = Location::new("impl.go", 0, 0);
        MethodDecl {
            receiver: receiver.to_string(),
            name: name.to_string(),
            location: loc.clone(),
            end_location: loc,
        }
    }

    #[test]
    fn test_first_satisfied_respects_encounter_order() {
        let interfaces = vec![
            iface("Reader", "a.go", &["Read"]),
            iface("Closer", "b.go", &["Close"]),
        ];
        let mut types = TypeMethodSet::new();
        types.insert(method("*File", "Read"));
        types.insert(method("*File", "Close"));

        let resolver = SatisfactionResolver::new(MatchPolicy::Subset);
        let chosen = resolver
            .first_satisfied(&types, "*File", &interfaces)
            .unwrap();
        // *File satisfies both; encounter order wins.
        assert_eq!(chosen.name, "Reader");
    }

    #[test]
    fn test_satisfying_receivers_under_subset() {
        let reader = iface("Reader", "a.go", &["Read", "Close"]);
        let mut types = TypeMethodSet::new();
        types.insert(method("*File", "Read"));
        types.insert(method("*File", "Close"));
        types.insert(method("Buffer", "Read"));

        let resolver = SatisfactionResolver::new(MatchPolicy::Subset);
        let receivers = resolver.satisfying_receivers(&types, &reader.method_names());
        assert_eq!(receivers, vec!["*File"]);
    }

    #[test]
    fn test_summary_flags_shared_names_across_interfaces() {
        // Two unrelated interfaces both declare Close; the implementation
        // gets attributed by name alone.
        let interfaces = vec![
            iface("Closer", "a.go", &["Close"]),
            iface("Resource", "b.go", &["Close", "Open"]),
        ];
        let implementations = vec![method("*File", "Close")];

        let summary = PackageSummary::derive(&interfaces, &implementations);
        assert_eq!(
            summary.interface_implementations["Closer"],
            vec!["Close".to_string()]
        );
        assert_eq!(
            summary.interface_implementations["Resource"],
            vec!["Close".to_string()]
        );
        // Sorted interface order means Resource wrote last.
        assert_eq!(summary.method_to_interface["Close"], "Resource");
    }

    #[test]
    fn test_summary_keeps_duplicate_matches() {
        let interfaces = vec![iface("Closer", "a.go", &["Close"])];
        let implementations = vec![method("*File", "Close"), method("Conn", "Close")];

        let summary = PackageSummary::derive(&interfaces, &implementations);
        assert_eq!(
            summary.interface_implementations["Closer"],
            vec!["Close".to_string(), "Close".to_string()]
        );
    }

    #[test]
    fn test_summary_empty_without_overlap() {
        let interfaces = vec![iface("Runner", "a.go", &["Run"])];
        let implementations = vec![method("*File", "Close")];

        let summary = PackageSummary::derive(&interfaces, &implementations);
        assert!(summary.interface_implementations.is_empty());
        assert!(summary.method_to_interface.is_empty());
    }
}
