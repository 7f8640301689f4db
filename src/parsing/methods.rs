//! Concrete method extraction from a Go syntax tree.
//!
//! One `MethodDecl` per `method_declaration` node. The receiver name keeps
//! the pointer marker (`*T` vs `T`); receivers that are neither a named
//! type nor a pointer to one yield no name and the declaration is left
//! unindexed.

use crate::types::{Location, MethodDecl};
use tree_sitter::Node;

use super::loader::ParsedFile;

/// Extract every method declaration from one parsed file, in source order.
pub fn index_methods(file: &ParsedFile) -> Vec<MethodDecl> {
    let mut methods = Vec::new();
    visit(file.root(), file, &mut methods);
    methods
}

fn visit(node: Node, file: &ParsedFile, methods: &mut Vec<MethodDecl>) {
    if node.kind() == "method_declaration" {
        if let Some(decl) = process_method_declaration(node, file) {
            methods.push(decl);
        }
    }

    for child in node.children(&mut node.walk()) {
        visit(child, file, methods);
    }
}

fn process_method_declaration(node: Node, file: &ParsedFile) -> Option<MethodDecl> {
    let name_node = node.child_by_field_name("name")?;
    let receiver_node = node.child_by_field_name("receiver")?;

    let receiver = receiver_type_name(receiver_node, file)?;

    Some(MethodDecl {
        receiver,
        name: file.text(name_node).to_string(),
        location: Location::from_point(&file.path, node.start_position()),
        end_location: Location::from_point(&file.path, node.end_position()),
    })
}

/// Resolve the receiver type name from a receiver parameter list.
///
/// `func (f File) ...` yields `File`; `func (f *File) ...` yields `*File`.
/// Any other receiver shape (generic instantiations, parenthesized types)
/// yields `None`.
fn receiver_type_name(receiver: Node, file: &ParsedFile) -> Option<String> {
    let param = receiver
        .children(&mut receiver.walk())
        .find(|n| n.kind() == "parameter_declaration")?;

    for child in param.children(&mut param.walk()) {
        match child.kind() {
            "type_identifier" => return Some(file.text(child).to_string()),
            "pointer_type" => {
                return child
                    .children(&mut child.walk())
                    .find(|n| n.kind() == "type_identifier")
                    .map(|n| format!("*{}", file.text(n)));
            }
            _ => {}
        }
    }
    None
}
