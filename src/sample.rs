//! Tabular, categorical data.
//!
//! A [`Dataset`] holds string-valued rows under an ordered header.
//! The ID3 learner reads it but never mutates it;
//! partitioning produces new datasets that share the header.

// Provides the dataset struct.
pub(crate) mod dataset;
// Provides a struct that reads a file.
pub(crate) mod dataset_reader;
// Provides label counting.
pub(crate) mod label_distribution;
// Provides the per-attribute value sets.
pub(crate) mod catalog;


pub use dataset::Dataset;
pub use dataset_reader::DatasetReader;
pub use label_distribution::LabelDistribution;
pub use catalog::UniqueValueCatalog;
