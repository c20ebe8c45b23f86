//! Defines the decision tree produced by `Id3`.
use serde::{Serialize, Deserialize};

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use super::node::Node;
use super::rules::extract_rules;


/// The outcome of classifying one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction<'a> {
    /// The tree reached a leaf with this label.
    Classified(&'a str),
    /// The row has a value no branch accounts for,
    /// or lacks an attribute the tree tests.
    Skipped,
}


impl<'a> Prediction<'a> {
    /// Returns the predicted label, if any.
    pub fn label(&self) -> Option<&'a str> {
        match *self {
            Self::Classified(label) => Some(label),
            Self::Skipped => None,
        }
    }
}


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
/// It is never modified after [`Id3::fit`](crate::Id3::fit) returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
}


impl From<Node> for DecisionTree {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl DecisionTree {
    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Classify `row`, whose columns are located through `name_to_index`.
    pub fn classify(&self, row: &[String], name_to_index: &HashMap<String, usize>)
        -> Prediction<'_>
    {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => {
                    return Prediction::Classified(label.as_str());
                },
                Node::Internal { attribute, children } => {
                    let child = name_to_index.get(attribute)
                        .and_then(|&k| row.get(k))
                        .and_then(|value| children.get(value));
                    match child {
                        Some(child) => { node = child; },
                        None => { return Prediction::Skipped; },
                    }
                },
            }
        }
    }


    /// Returns one `IF ... THEN ...` rule per leaf.
    pub fn rules(&self) -> BTreeSet<String> {
        extract_rules(&self.root)
    }


    /// Serialize this tree to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }


    /// Deserialize a tree written by [`DecisionTree::to_json`].
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}
