use serde::{Serialize, Deserialize};

use std::collections::{BTreeMap, BTreeSet};

use super::dataset::Dataset;


/// The distinct values observed for each attribute
/// of the top-level training dataset.
///
/// The catalog decides which branches an internal node has,
/// even when a recursive partition no longer contains
/// rows for some of the values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueValueCatalog {
    values: BTreeMap<String, BTreeSet<String>>,
}


impl UniqueValueCatalog {
    /// Scan every row and every attribute of `dataset` once.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let header = dataset.header();
        let mut columns = vec![BTreeSet::new(); header.len()];

        for row in dataset.rows() {
            for (set, value) in columns.iter_mut().zip(row) {
                if !set.contains(value) {
                    set.insert(value.clone());
                }
            }
        }

        let values = header.iter()
            .cloned()
            .zip(columns)
            .collect();
        Self { values }
    }


    /// Returns the values seen for `attribute`.
    pub fn values<S: AsRef<str>>(&self, attribute: S)
        -> Option<&BTreeSet<String>>
    {
        self.values.get(attribute.as_ref())
    }


    /// Iterate over the attribute names in the catalog.
    pub fn attributes(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }
}
