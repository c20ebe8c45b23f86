//! Classifies every row of a dataset and aggregates the outcomes.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use tracing::info;

use crate::error::Result;
use crate::sample::Dataset;
use crate::id3::{DecisionTree, Prediction};


/// The coarse label of a tree trained on an attack/normal target.
pub const ATTACK: &str = "attack";
/// The label of normal traffic.
pub const NORMAL: &str = "normal";
/// The fine-grained attack categories a coarse `"attack"` prediction covers.
pub const ATTACK_CATEGORIES: [&str; 4] = ["U2R", "R2L", "Probing", "DoS"];


#[inline(always)]
fn is_attack(label: &str) -> bool {
    ATTACK_CATEGORIES.contains(&label)
}


/// Raw counts of an evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Number of rows, skipped ones included.
    pub n_rows: usize,
    /// Rows whose prediction matches the ground truth,
    /// or predicts `"attack"` for one of the attack categories.
    pub success: usize,
    /// Attack rows predicted as `"normal"`.
    pub false_positive: usize,
    /// Normal rows predicted as `"normal"`.
    pub true_normal: usize,
    /// Rows the tree could not classify.
    pub skipped: usize,
}


impl Tally {
    /// Count one row whose ground truth is `truth`.
    pub fn record(mut self, prediction: Prediction<'_>, truth: &str) -> Self {
        self.n_rows += 1;

        let Some(label) = prediction.label() else {
            self.skipped += 1;
            return self;
        };

        if label == truth || (label == ATTACK && is_attack(truth)) {
            self.success += 1;
            if truth == NORMAL && label == NORMAL {
                self.true_normal += 1;
            }
        } else if is_attack(truth) && label == NORMAL {
            self.false_positive += 1;
        }
        self
    }


    /// Sum of two tallies.
    pub fn merge(self, other: Self) -> Self {
        Self {
            n_rows:         self.n_rows + other.n_rows,
            success:        self.success + other.success,
            false_positive: self.false_positive + other.false_positive,
            true_normal:    self.true_normal + other.true_normal,
            skipped:        self.skipped + other.skipped,
        }
    }
}


/// The result of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    tally: Tally,
}


impl From<Tally> for Evaluation {
    fn from(tally: Tally) -> Self {
        Self { tally }
    }
}


impl Evaluation {
    /// Returns the raw counts.
    pub fn tally(&self) -> Tally {
        self.tally
    }


    /// `100 * success / n_rows`.
    /// Skipped rows count in the denominator.
    /// An empty dataset has a success rate of `0`.
    pub fn success_rate(&self) -> f64 {
        let Tally { n_rows, success, .. } = self.tally;
        if n_rows == 0 { return 0f64; }
        100f64 * (success as f64 / n_rows as f64)
    }


    /// `100 * false_positive / (false_positive + true_normal)`.
    ///
    /// Note that the denominator is **not** the number of negatives.
    /// The rate is `0` when the denominator is `0`.
    pub fn false_positive_rate(&self) -> f64 {
        let Tally { false_positive, true_normal, .. } = self.tally;
        let denominator = false_positive + true_normal;
        if denominator == 0 { return 0f64; }
        false_positive as f64 / denominator as f64 * 100f64
    }
}


/// Classify each row of `dataset` with `tree`
/// and compare the prediction against the column `target`.
///
/// The column is located through `dataset`'s own header,
/// so a projected or reordered dataset is handled correctly.
///
/// Rows are folded in parallel over the read-only tree.
/// The tally is a sum of integer counts,
/// so the result equals a sequential pass in row order.
pub fn evaluate<S: AsRef<str>>(
    tree: &DecisionTree,
    dataset: &Dataset,
    target: S,
) -> Result<Evaluation>
{
    let truth = dataset.index_of(target)?;
    let name_to_index = dataset.name_to_index();

    let tally = dataset.rows()
        .par_iter()
        .fold(Tally::default, |tally, row| {
            let prediction = tree.classify(row, name_to_index);
            tally.record(prediction, &row[truth])
        })
        .reduce(Tally::default, Tally::merge);

    info!(
        "Evaluated {} rows: {} successes, {} skipped",
        tally.n_rows, tally.success, tally.skipped,
    );
    Ok(Evaluation::from(tally))
}
