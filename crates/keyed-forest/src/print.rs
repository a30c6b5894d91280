//! Diagnostic tree rendering.
//!
//! Test and debug collaborator, not part of the production contract.

use std::fmt::Debug;

use crate::tree::RbTree;

/// Renders the tree as an indented multi-line string: key, color, and the
/// bracketed value list per node, `∅` for absent children.
pub fn print<V: Debug>(tree: &RbTree<V>) -> String {
    print_node(tree, tree.root_key(), "")
}

fn print_node<V: Debug>(tree: &RbTree<V>, node: Option<u128>, tab: &str) -> String {
    match node {
        None => "∅".to_string(),
        Some(key) => match tree.node(key) {
            Err(_) => format!("Node[{key}] <missing>"),
            Ok(n) => {
                let color = if n.is_black() { "black" } else { "red" };
                let left = print_node(tree, n.left, &format!("{tab}  "));
                let right = print_node(tree, n.right, &format!("{tab}  "));
                format!(
                    "Node[{key}] {color} {:?}\n{tab}L={left}\n{tab}R={right}",
                    n.values
                )
            }
        },
    }
}
