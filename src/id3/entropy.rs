//! The generalized entropy and the information gain built on it.
use std::fmt;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::sample::{Dataset, LabelDistribution};


/// Returns the generalized entropy of the label counts in `labels`,
/// where `n` is the number of rows they were counted over.
///
/// ```text
///           sum_y ( p(y)^alpha - 1 )
/// H(p) = ---------------------------,   p(y) = count(y) / n.
///            2^(1 - alpha) - 1
/// ```
///
/// The denominator vanishes at `alpha == 1`,
/// so this function returns [`Error::DegenerateAlpha`] there
/// (and for a non-finite `alpha`).
/// A pure distribution scores `0` for every valid `alpha`.
/// For `n == 0` the result is `0`.
pub fn entropy(n: usize, labels: &LabelDistribution, alpha: f64)
    -> Result<f64>
{
    check_alpha(alpha)?;
    Ok(generalized_entropy(n, labels, alpha))
}


#[inline(always)]
pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    if alpha == 1f64 || !alpha.is_finite() {
        return Err(Error::DegenerateAlpha { alpha });
    }
    Ok(())
}


#[inline]
fn generalized_entropy(n: usize, labels: &LabelDistribution, alpha: f64)
    -> f64
{
    if n == 0 { return 0f64; }
    let n = n as f64;

    let sum = labels.iter()
        .map(|(_, count)| (count as f64 / n).powf(alpha) - 1f64)
        .sum::<f64>();

    sum / (2f64.powf(1f64 - alpha) - 1f64)
}


/// The impurity measure used by [`Id3`](crate::Id3).
/// The exponent is checked once on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralizedEntropy {
    alpha: f64,
}


impl GeneralizedEntropy {
    /// Construct a new instance of `GeneralizedEntropy`.
    /// Fails with [`Error::DegenerateAlpha`] for `alpha == 1`.
    pub fn new(alpha: f64) -> Result<Self> {
        check_alpha(alpha)?;
        Ok(Self { alpha })
    }


    /// Returns the exponent.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }


    /// Impurity of the label counts `labels` over `n` rows.
    #[inline]
    pub fn impurity(&self, n: usize, labels: &LabelDistribution) -> f64 {
        generalized_entropy(n, labels, self.alpha)
    }


    /// Size-weighted average impurity of `partitions`,
    /// where `n` is the number of rows over all partitions.
    pub fn weighted_impurity(
        &self,
        n: usize,
        partitions: &BTreeMap<String, Dataset>,
        target: &str,
    ) -> Result<f64>
    {
        let n = n as f64;
        let mut avg = 0f64;
        for part in partitions.values() {
            let dist = part.label_distribution(target)?;
            let m = part.shape().0;
            avg += m as f64 / n * self.impurity(m, &dist);
        }
        Ok(avg)
    }


    /// Information gain of splitting `dataset` on `attribute`.
    /// That is, the impurity of `dataset` minus
    /// the weighted impurity of its partitions.
    pub fn information_gain(
        &self,
        dataset: &Dataset,
        attribute: &str,
        target: &str,
    ) -> Result<f64>
    {
        let n = dataset.shape().0;
        let dist = dataset.label_distribution(target)?;
        let partitions = dataset.partition(attribute)?;

        let parent = self.impurity(n, &dist);
        let avg = self.weighted_impurity(n, &partitions, target)?;
        Ok(parent - avg)
    }
}


impl fmt::Display for GeneralizedEntropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generalized entropy (alpha = {})", self.alpha)
    }
}
