//! This directory provides the tools that measure a grown tree.
//! - Success rate
//! - False-positive rate
//! - A console report of both, on training and test data

/// Provides the evaluation of a tree against labeled data.
pub mod evaluation;

/// Provides the console report.
pub mod report;

pub use evaluation::{
    evaluate,
    Evaluation,
    Tally,
    ATTACK,
    ATTACK_CATEGORIES,
    NORMAL,
};

pub use report::Report;
