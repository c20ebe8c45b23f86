//! Defines the inner representation
//! of the decision tree.
use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;


/// Enumeration of internal and leaf nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// A node that splits on `attribute`.
    /// There is one child per value the attribute takes
    /// in the training data.
    Internal {
        /// The attribute tested at this node.
        attribute: String,
        /// Child per attribute value.
        children: BTreeMap<String, Node>,
    },


    /// A node that predicts `label`.
    Leaf {
        /// The predicted label.
        label: String,
    },
}


impl Node {
    /// Construct a leaf node that predicts `label`.
    #[inline]
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Self::Leaf { label: label.into() }
    }


    /// Construct an internal node.
    #[inline]
    pub fn internal<S: Into<String>>(
        attribute: S,
        children: BTreeMap<String, Node>,
    ) -> Self
    {
        Self::Internal { attribute: attribute.into(), children, }
    }


    /// Returns `true` if this node has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Internal { children, .. } => {
                children.values().map(Node::n_leaves).sum()
            },
            Self::Leaf { .. } => 1_usize,
        }
    }


    /// Returns the depth of this sub-tree.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Internal { children, .. } => {
                1 + children.values()
                    .map(Node::depth)
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0_usize,
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Internal { attribute, children } => {
                let attribute = escape(attribute);
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attribute} ?\" ];\n",
                )];

                let mut next_id = id + 1;
                for (value, child) in children {
                    let child_id = next_id;
                    let (mut child_info, ret_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);

                    let value = escape(value);
                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    );
                    info.push(edge);
                    next_id = ret_id;
                }

                (info, next_id)
            },
            Self::Leaf { label } => {
                let label = escape(label);
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


// Escape a string for a double-quoted Graphviz label.
fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
