//! Error types shared by the whole crate.
//!
//! Every variant here is fatal for a training run.
//! A row that cannot be classified is **not** an error;
//! see [`Prediction::Skipped`](crate::Prediction::Skipped).
use std::path::PathBuf;
use thiserror::Error;


/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;


/// Errors raised while reading the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON
    /// or misses a required key.
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// The configuration is well-formed but inconsistent.
    #[error("Invalid config: {message}")]
    Invalid {
        /// Human readable description.
        message: String,
    },
}


/// Errors raised while loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be opened or read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The file has no header row.
    #[error("Dataset {path} is empty (no header row)")]
    Empty {
        /// Path of the dataset file.
        path: PathBuf,
    },
    /// The dataset has no row to learn from.
    #[error("Dataset has no row")]
    NoRow,
    /// The header lists no attribute at all.
    #[error("Dataset has no attribute")]
    NoAttribute,
    /// The header lists the same attribute twice.
    #[error("Duplicate attribute `{name}` in header")]
    DuplicateAttribute {
        /// The repeated attribute name.
        name: String,
    },
    /// A row does not have as many values as the header.
    #[error("Row at line {line} has {found} values, expected {expected}")]
    RowLength {
        /// 1-based line number (or row number for in-memory data).
        line: usize,
        /// Length of the header.
        expected: usize,
        /// Length of the row.
        found: usize,
    },
    /// A cell has no value.
    #[error("Missing value for `{column}` at row {row}")]
    MissingValue {
        /// Column name.
        column: String,
        /// 0-based row index.
        row: usize,
    },
    /// Conversion from a `polars::DataFrame` failed.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}


/// The error type of this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`DatasetError`].
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    /// A projected or target attribute does not exist in the header.
    #[error("Unknown attribute `{name}`")]
    UnknownAttribute {
        /// The attribute name that was looked up.
        name: String,
    },
    /// The generalized entropy is undefined for this `alpha`.
    #[error("The generalized entropy is undefined for alpha = {alpha}")]
    DegenerateAlpha {
        /// The rejected exponent.
        alpha: f64,
    },
    /// The value typed for `alpha` is not a real number.
    #[error("Cannot read alpha from `{input}`")]
    InvalidAlphaInput {
        /// The raw input.
        input: String,
    },
    /// I/O error while writing an output file or reading the prompt.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}


impl Error {
    pub(crate) fn unknown_attribute<S: AsRef<str>>(name: S) -> Self {
        Self::UnknownAttribute { name: name.as_ref().to_string() }
    }
}
