use tracing::{debug, info};

use crate::error::{DatasetError, Error, Result};
use crate::sample::{Dataset, UniqueValueCatalog};
use super::{
    entropy::GeneralizedEntropy,
    node::Node,
    tree::DecisionTree,
};

use std::fmt;
use std::collections::BTreeMap;


/// The ID3 algorithm.
/// Given a set of categorical training examples,
/// [`Id3`] outputs a [`DecisionTree`]
/// whose nodes split on the attribute that maximizes
/// the information gain under a [`GeneralizedEntropy`].
///
/// [`Id3`] is constructed
/// by [`Id3Builder`](crate::Id3Builder).
///
/// # Example
/// ```no_run
/// use alpha_id3::prelude::*;
///
/// let train = DatasetReader::new()
///     .file("/path/to/train.csv")
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let id3 = Id3Builder::new(&train)
///     .target("class")
///     .alpha(2.0)
///     .build()
///     .unwrap();
/// let tree = id3.fit(&train).unwrap();
///
/// let evaluation = evaluate(&tree, &train, "class").unwrap();
/// println!("success rate (train) is: {}", evaluation.success_rate());
/// ```
pub struct Id3 {
    attributes: Vec<String>,
    target: String,
    criterion: GeneralizedEntropy,
}


impl Id3 {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn from_components(
        attributes: Vec<String>,
        target: String,
        criterion: GeneralizedEntropy,
    ) -> Self
    {
        Self { attributes, target, criterion, }
    }


    /// Returns the candidate attributes in the order they are tried.
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Returns the target attribute.
    pub fn target(&self) -> &str {
        &self.target
    }


    /// Returns the impurity measure.
    pub fn criterion(&self) -> GeneralizedEntropy {
        self.criterion
    }


    /// Grow a tree on `dataset`.
    ///
    /// The branches of every internal node are the values
    /// the split attribute takes somewhere in `dataset`.
    pub fn fit(&self, dataset: &Dataset) -> Result<DecisionTree> {
        if dataset.is_empty() {
            return Err(DatasetError::NoRow.into());
        }
        dataset.index_of(&self.target)?;
        for attribute in self.attributes.iter() {
            dataset.index_of(attribute)?;
        }

        info!(
            "Growing a tree on {} rows with {}",
            dataset.shape().0, self.criterion,
        );

        let catalog = UniqueValueCatalog::from_dataset(dataset);
        let remaining = self.attributes.iter()
            .map(String::as_str)
            .collect::<Vec<_>>();
        let root = self.grow(&catalog, dataset, &remaining[..])?;

        info!(
            "Grown a tree with {} leaves (depth {})",
            root.n_leaves(), root.depth(),
        );
        Ok(DecisionTree::from(root))
    }


    /// Construct the sub-tree for `dataset`,
    /// splitting only on the attributes in `remaining`.
    fn grow(
        &self,
        catalog: &UniqueValueCatalog,
        dataset: &Dataset,
        remaining: &[&str],
    ) -> Result<Node>
    {
        let dist = dataset.label_distribution(&self.target)?;

        if let Some(label) = dist.pure_label() {
            return Ok(Node::leaf(label));
        }

        let majority = dist.majority()
            .ok_or(DatasetError::NoRow)?;

        if remaining.is_empty() {
            return Ok(Node::leaf(majority));
        }

        let n = dataset.shape().0;
        let impurity = self.criterion.impurity(n, &dist);

        // Find the attribute that maximizes the information gain.
        // On ties, the attribute tried first wins.
        let mut best: Option<(usize, f64, BTreeMap<String, Dataset>)> = None;
        for (k, attribute) in remaining.iter().enumerate() {
            let partitions = dataset.partition(attribute)?;
            let avg = self.criterion
                .weighted_impurity(n, &partitions, &self.target)?;
            let gain = impurity - avg;

            let is_better = match &best {
                None => true,
                Some((_, best_gain, _)) => gain > *best_gain,
            };
            if is_better {
                best = Some((k, gain, partitions));
            }
        }

        let Some((k, gain, mut partitions)) = best else {
            return Ok(Node::leaf(majority));
        };
        let attribute = remaining[k];
        debug!("Split {n} rows on `{attribute}` (gain = {gain})");

        let rest = remaining.iter()
            .enumerate()
            .filter_map(|(i, att)| (i != k).then_some(*att))
            .collect::<Vec<_>>();

        let values = catalog.values(attribute)
            .ok_or_else(|| Error::unknown_attribute(attribute))?;

        // Every value seen in the training data gets a branch.
        // The values absent from this node predict its majority label.
        let mut children = BTreeMap::new();
        for value in values {
            let child = match partitions.remove(value) {
                Some(part) => self.grow(catalog, &part, &rest[..])?,
                None => Node::leaf(majority),
            };
            children.insert(value.clone(), child);
        }

        Ok(Node::internal(attribute, children))
    }
}


impl fmt::Display for Id3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # ID3\n\n\
            - Target: {}\n\
            - Splitting criterion: {}\n\
            - Attributes:\
            ",
            self.target,
            self.criterion,
        )?;

        for (k, name) in self.attributes.iter().enumerate() {
            writeln!(f, "\t{: >3}. {name}", k + 1)?;
        }

        write!(f, "----------")
    }
}
