#![warn(missing_docs)]

//!
//! A crate that induces a classification decision tree
//! from categorical training data.
//!
//! The tree is grown by the ID3 algorithm.
//! Each node splits on the attribute that maximizes the information gain
//! measured by a **generalized entropy**,
//! a family of impurity measures parameterized by a real exponent `alpha`.
//!
//! - [`Id3Builder`] / [`Id3`]
//!     Builds the tree from a training [`Dataset`].
//!
//! - [`DecisionTree`]
//!     Classifies rows, extracts human-readable `IF ... THEN ...` rules,
//!     and writes itself to Graphviz/JSON.
//!
//! - [`research::evaluate`]
//!     Measures the success rate and the (narrow) false-positive rate
//!     of a tree against a labeled dataset.
//!
//! # Example
//! ```no_run
//! use alpha_id3::prelude::*;
//!
//! let train = DatasetReader::new()
//!     .file("/path/to/train.csv")
//!     .target_feature("Play")
//!     .read()
//!     .unwrap();
//!
//! let id3 = Id3Builder::new(&train)
//!     .target("Play")
//!     .alpha(2.0)
//!     .build()
//!     .unwrap();
//! let tree = id3.fit(&train).unwrap();
//!
//! for rule in tree.rules() {
//!     println!("{rule}");
//! }
//! ```

pub mod error;
pub mod config;
pub mod logging;
pub mod sample;
pub mod id3;
pub mod research;
pub mod prelude;


pub use error::{Error, Result, ConfigError, DatasetError};
pub use config::Config;

pub use sample::{
    Dataset,
    DatasetReader,
    LabelDistribution,
    UniqueValueCatalog,
};

pub use id3::{
    entropy,
    GeneralizedEntropy,
    Id3,
    Id3Builder,
    Node,
    DecisionTree,
    Prediction,
};

pub use research::{
    evaluate,
    Evaluation,
    Tally,
};
