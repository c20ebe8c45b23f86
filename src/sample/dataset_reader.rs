use std::path::Path;

use crate::error::{Error, ConfigError};
use super::dataset::Dataset;


/// A struct that returns [`Dataset`].
/// Using this struct, one can read a CSV file,
/// keep some of its columns, and check the target column exists.
/// # Example
/// ```no_run
/// use alpha_id3::DatasetReader;
///
/// let filename = "/path/to/csv/file.csv";
/// let dataset = DatasetReader::new()
///     .file(filename)
///     .project(["Weather", "Wind", "Play"])
///     .target_feature("Play")
///     .read()
///     .unwrap();
/// ```
pub struct DatasetReader<P> {
    file: Option<P>,
    columns: Option<Vec<String>>,
    target: Option<String>,
}


impl<P> Default for DatasetReader<P> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P> DatasetReader<P> {
    /// Construct a new instance of [`DatasetReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            columns: None,
            target: None,
        }
    }


    /// Keep only these columns, in this order.
    /// By default, every column is kept.
    pub fn project<I, S>(mut self, columns: I) -> Self
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let columns = columns.into_iter()
            .map(|col| col.as_ref().to_string())
            .collect();
        self.columns = Some(columns);
        self
    }


    /// Set the column name that is used for target label.
    pub fn target_feature<S: AsRef<str>>(mut self, column: S) -> Self {
        self.target = Some(column.as_ref().to_string());
        self
    }
}


impl<P> DatasetReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments.
    /// This method consumes `self`.
    pub fn read(self) -> crate::Result<Dataset> {
        let file = self.file.ok_or_else(|| ConfigError::Invalid {
            message: "The dataset file is not set".to_string(),
        })?;

        let mut dataset = Dataset::from_csv(file)?;
        if let Some(columns) = self.columns {
            dataset = dataset.project(&columns[..])?;
        }

        if let Some(target) = self.target {
            if dataset.index_of(&target).is_err() {
                return Err(Error::UnknownAttribute { name: target });
            }
        }
        Ok(dataset)
    }
}
