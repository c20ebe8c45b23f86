//! Run configuration.
//!
//! The configuration is a JSON object such as
//! ```json
//! {
//!     "data_file": "data/train.csv",
//!     "test_file": "data/test.csv",
//!     "data_project_columns": ["Weather", "Wind", "Play"],
//!     "target_attribute": "Play"
//! }
//! ```
//! An optional `"dot_file"` names a Graphviz file
//! to which the tree is written.
use serde::{Serialize, Deserialize};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;


/// Paths and attribute names needed for one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// CSV file used for training.
    pub data_file: PathBuf,
    /// CSV file used for testing.
    pub test_file: PathBuf,
    /// Columns kept from both files, in this order.
    pub data_project_columns: Vec<String>,
    /// The class column.
    pub target_attribute: String,
    /// Where to write the Graphviz rendering of the tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dot_file: Option<PathBuf>,
}


impl Config {
    /// Read and validate the configuration stored in `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let config: Self = serde_json::from_str(&text)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }


    /// Check that the projection is non-empty and keeps the target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_project_columns.is_empty() {
            return Err(ConfigError::Invalid {
                message: "`data_project_columns` is empty".to_string(),
            });
        }

        let keeps_target = self.data_project_columns.iter()
            .any(|col| *col == self.target_attribute);
        if !keeps_target {
            return Err(ConfigError::Invalid {
                message: format!(
                    "target `{}` is not in `data_project_columns`",
                    self.target_attribute,
                ),
            });
        }
        Ok(())
    }
}
