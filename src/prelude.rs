//! Exports the learner, the data types, and the evaluation tools.
//!
pub use crate::sample::{
    Dataset,
    DatasetReader,
    LabelDistribution,
    UniqueValueCatalog,
};


pub use crate::id3::{
    // Learner
    Id3,
    Id3Builder,
    GeneralizedEntropy,


    // Tree
    DecisionTree,
    Node,
    Prediction,
};


pub use crate::research::{
    evaluate,
    Evaluation,
    Report,
};


pub use crate::config::Config;
pub use crate::error::{Error, Result};
