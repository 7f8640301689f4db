//! Wire schema for query results.
//!
//! External callers parse these structures positionally: field names,
//! camelCase spelling, zero-based locations, and the per-verb shapes are a
//! compatibility contract and must not drift.
//!
//! `endLocation` appears only on the file-scoped verbs. For interface
//! methods it is the next-line placement hint; for implementations it is
//! the true end of the declaration.

use crate::types::{InterfaceDecl, Location, MethodDecl};
use serde::Serialize;

/// One interface-method row of `find-interfaces` / `find-file-interfaces`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceHit {
    /// The method's name (not the interface's)
    pub name: String,
    pub interface_name: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_location: Option<Location>,
}

/// One implementation row of `find-implementations` /
/// `find-file-implementations`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationHit {
    pub method_name: String,
    pub receiver_type: String,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_location: Option<Location>,
}

#[derive(Debug, Serialize)]
pub struct InterfacesResponse {
    pub interfaces: Vec<InterfaceHit>,
}

#[derive(Debug, Serialize)]
pub struct ImplementationsResponse {
    pub implementations: Vec<ImplementationHit>,
}

impl InterfacesResponse {
    /// Flatten interface declarations into per-method rows, one row per
    /// method entry, with the next-line end-location hint included.
    pub fn with_end_locations(interfaces: Vec<InterfaceDecl>) -> Self {
        Self {
            interfaces: Self::flatten(interfaces, true),
        }
    }

    /// Flatten into per-method rows without end locations (tree-scoped
    /// verb shape).
    pub fn without_end_locations(interfaces: Vec<InterfaceDecl>) -> Self {
        Self {
            interfaces: Self::flatten(interfaces, false),
        }
    }

    fn flatten(interfaces: Vec<InterfaceDecl>, include_end: bool) -> Vec<InterfaceHit> {
        interfaces
            .into_iter()
            .flat_map(|iface| {
                let interface_name = iface.name;
                iface.methods.into_iter().map(move |method| InterfaceHit {
                    name: method.name,
                    interface_name: interface_name.clone(),
                    location: method.location,
                    end_location: include_end.then_some(method.end_location),
                })
            })
            .collect()
    }
}

impl ImplementationsResponse {
    pub fn with_end_locations(methods: Vec<MethodDecl>) -> Self {
        Self {
            implementations: Self::rows(methods, true),
        }
    }

    pub fn without_end_locations(methods: Vec<MethodDecl>) -> Self {
        Self {
            implementations: Self::rows(methods, false),
        }
    }

    fn rows(methods: Vec<MethodDecl>, include_end: bool) -> Vec<ImplementationHit> {
        methods
            .into_iter()
            .map(|method| ImplementationHit {
                method_name: method.name,
                receiver_type: method.receiver,
                location: method.location,
                end_location: include_end.then_some(method.end_location),
            })
            .collect()
    }
}
