//! Interface extraction from a Go syntax tree.
//!
//! One `InterfaceDecl` per `type_spec` whose underlying type is an
//! `interface_type`, anywhere in the file (including inside function
//! bodies). Method requirements are read in declaration order from
//! `method_elem` children; embedded interface entries (`type_elem`) carry
//! no method name and are deliberately not expanded.

use crate::types::{InterfaceDecl, InterfaceMethod, Location};
use tree_sitter::Node;

use super::loader::ParsedFile;

/// Extract every interface declaration from one parsed file.
pub fn index_interfaces(file: &ParsedFile) -> Vec<InterfaceDecl> {
    let mut interfaces = Vec::new();
    visit(file.root(), file, &mut interfaces);
    interfaces
}

fn visit(node: Node, file: &ParsedFile, interfaces: &mut Vec<InterfaceDecl>) {
    if node.kind() == "type_spec" {
        if let Some(decl) = process_type_spec(node, file) {
            interfaces.push(decl);
        }
    }

    for child in node.children(&mut node.walk()) {
        visit(child, file, interfaces);
    }
}

/// Build an `InterfaceDecl` if this type spec declares an interface type.
fn process_type_spec(node: Node, file: &ParsedFile) -> Option<InterfaceDecl> {
    let name_node = node.child_by_field_name("name")?;
    let type_node = node.child_by_field_name("type")?;
    if type_node.kind() != "interface_type" {
        return None;
    }

    let name = file.text(name_node).to_string();
    let location = Location::from_point(&file.path, node.start_position());

    let mut methods = Vec::new();
    for child in type_node.children(&mut type_node.walk()) {
        if child.kind() == "method_elem" {
            if let Some(method) = process_method_elem(child, file) {
                methods.push(method);
            }
        }
    }

    Some(InterfaceDecl {
        name,
        file: file.path.clone(),
        location,
        methods,
    })
}

/// Extract one named method requirement from a `method_elem` node.
fn process_method_elem(node: Node, file: &ParsedFile) -> Option<InterfaceMethod> {
    let name = node
        .children(&mut node.walk())
        .find(|n| n.kind() == "field_identifier")
        .map(|n| file.text(n).to_string())?;

    let location = Location::from_point(&file.path, node.start_position());
    // Placement hint for the external UI: start of the next line, not the
    // element's syntactic end.
    let end_location = location.next_line_start();

    Some(InterfaceMethod {
        name,
        location,
        end_location,
    })
}
