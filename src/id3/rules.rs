//! Converts a tree into `IF ... THEN ...` rules.
use std::collections::BTreeSet;

use super::node::Node;


/// Returns one rule per leaf reachable from `root`.
///
/// A rule reads
/// `IF <attr> EQUALS <value> AND <attr> EQUALS <value> THEN <label>`.
/// A tree made of a single leaf yields the bare rule `" THEN <label>"`.
pub fn extract_rules(root: &Node) -> BTreeSet<String> {
    let mut path = Vec::new();
    let mut rules = BTreeSet::new();
    traverse(root, &mut path, &mut rules);
    rules
}


fn traverse(node: &Node, path: &mut Vec<String>, rules: &mut BTreeSet<String>) {
    match node {
        Node::Leaf { label } => {
            path.push(format!(" THEN {label}"));
            rules.insert(path.concat());
            path.pop();
        },
        Node::Internal { attribute, children } => {
            let joiner = if path.is_empty() { "IF " } else { " AND " };
            path.push(format!("{joiner}{attribute} EQUALS "));
            for (value, child) in children {
                path.push(value.clone());
                traverse(child, path, rules);
                path.pop();
            }
            path.pop();
        },
    }
}
