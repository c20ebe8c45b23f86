use crate::error::{ConfigError, Result};
use crate::sample::Dataset;
use super::entropy::GeneralizedEntropy;
use super::id3_algorithm::Id3;


/// The exponent set as default.
pub const DEFAULT_ALPHA: f64 = 2.0;


/// A struct that builds `Id3`.
/// `Id3Builder` keeps parameters for constructing `Id3`.
///
/// # Example
///
/// ```no_run
/// use alpha_id3::prelude::*;
///
/// # let train = Dataset::from_csv("/path/to/train.csv").unwrap();
/// let id3 = Id3Builder::new(&train)
///     .target("Play")
///     .alpha(0.5)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct Id3Builder<'a> {
    sample: &'a Dataset,
    target: Option<String>,
    alpha: f64,
}


impl<'a> Id3Builder<'a> {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, [`Id3Builder`] sets `alpha` to
    /// `DEFAULT_ALPHA == 2.0`.
    /// The target attribute has no default.
    pub fn new(sample: &'a Dataset) -> Self {
        Self { sample, target: None, alpha: DEFAULT_ALPHA, }
    }


    /// Set the class attribute.
    pub fn target<S: AsRef<str>>(mut self, name: S) -> Self {
        self.target = Some(name.as_ref().to_string());
        self
    }


    /// Set the exponent of the generalized entropy.
    /// `alpha == 1` is rejected by [`Id3Builder::build`].
    #[inline]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }


    /// Build an `Id3`.
    /// This method consumes `self`.
    ///
    /// The candidate attributes are the header
    /// of the dataset given to [`Id3Builder::new`] minus the target,
    /// in header order.
    pub fn build(self) -> Result<Id3> {
        let criterion = GeneralizedEntropy::new(self.alpha)?;

        let target = self.target.ok_or_else(|| ConfigError::Invalid {
            message: "The target attribute is not set".to_string(),
        })?;
        self.sample.index_of(&target)?;

        let attributes = self.sample.header()
            .iter()
            .filter(|name| **name != target)
            .cloned()
            .collect::<Vec<_>>();

        Ok(Id3::from_components(attributes, target, criterion))
    }
}
