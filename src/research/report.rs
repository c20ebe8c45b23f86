use colored::Colorize;

use std::fmt;

use super::evaluation::Evaluation;


/// The four figures printed at the end of a run.
/// The order is: training success rate, training false-positive rate,
/// test false-positive rate, test success rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    train: Evaluation,
    test: Evaluation,
}


impl Report {
    /// Create a new instance of `Report`.
    pub fn new(train: Evaluation, test: Evaluation) -> Self {
        Self { train, test }
    }


    /// Returns the evaluation on the training data.
    pub fn train(&self) -> &Evaluation {
        &self.train
    }


    /// Returns the evaluation on the test data.
    pub fn test(&self) -> &Evaluation {
        &self.test
    }
}


impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rate = |x: f64| format!("{x:?}%").as_str().bold();

        writeln!(
            f,
            "The success rate on the {} data is {}.",
            "training".green(),
            rate(self.train.success_rate()),
        )?;
        writeln!(
            f,
            "The false positive rate on the {} data is {}.",
            "training".green(),
            rate(self.train.false_positive_rate()),
        )?;
        writeln!(
            f,
            "The false positive rate on the {} data is {}.",
            "test".yellow(),
            rate(self.test.false_positive_rate()),
        )?;
        write!(
            f,
            "The success rate on the {} data is {}.",
            "test".yellow(),
            rate(self.test.success_rate()),
        )
    }
}
