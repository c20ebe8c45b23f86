//! The ID3 decision tree learner.
//!
//! [`Id3Builder`] fixes the parameters (target attribute and `alpha`),
//! [`Id3::fit`] grows a [`DecisionTree`],
//! and the tree is then used to classify rows and to extract rules.

/// Defines the generalized entropy.
pub mod entropy;
/// Defines the builder of `Id3`.
pub mod builder;
/// Defines the induction algorithm.
pub mod id3_algorithm;
/// Defines the tree produced by `Id3`.
pub mod tree;

/// Defines the node representation of `DecisionTree`.
mod node;
mod rules;


pub use entropy::{entropy, GeneralizedEntropy};
pub use builder::Id3Builder;
pub use id3_algorithm::Id3;
pub use node::Node;
pub use tree::{DecisionTree, Prediction};
pub use rules::extract_rules;
