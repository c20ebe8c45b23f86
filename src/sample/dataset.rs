use polars::prelude::{DataFrame, DataType};
use tracing::info;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::error::{Error, DatasetError};
use super::label_distribution::LabelDistribution;


/// Ordered attribute names together with the name -> index map.
#[derive(Debug, PartialEq, Eq)]
struct Schema {
    index_to_name: Vec<String>,
    name_to_index: HashMap<String, usize>,
}


impl Schema {
    fn new(header: Vec<String>) -> Result<Self, DatasetError> {
        if header.is_empty() {
            return Err(DatasetError::NoAttribute);
        }

        let mut name_to_index = HashMap::with_capacity(header.len());
        for (i, name) in header.iter().enumerate() {
            if name_to_index.insert(name.clone(), i).is_some() {
                return Err(DatasetError::DuplicateAttribute {
                    name: name.clone(),
                });
            }
        }

        Ok(Self { index_to_name: header, name_to_index, })
    }
}


/// Struct `Dataset` holds categorical rows under a header.
///
/// Every row has exactly one value per header position.
/// Sub-datasets made by [`Dataset::partition`] share
/// the header and the name <-> index mapping of their parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: Arc<Schema>,
    rows: Vec<Vec<String>>,
}


impl Dataset {
    /// Construct a new `Dataset` from a header and rows.
    ///
    /// Fails if the header is empty, repeats a name,
    /// or if a row length differs from the header length.
    pub fn new<S>(header: Vec<S>, rows: Vec<Vec<String>>)
        -> Result<Self, DatasetError>
        where S: Into<String>
    {
        let header = header.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();
        let schema = Schema::new(header)?;

        let expected = schema.index_to_name.len();
        if let Some((i, row)) = rows.iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected)
        {
            return Err(DatasetError::RowLength {
                line: i + 1,
                expected,
                found: row.len(),
            });
        }

        Ok(Self { schema: Arc::new(schema), rows, })
    }


    /// Read a CSV format file to `Dataset` type.
    /// The first non-empty line is the header.
    /// Values are separated by `,` and surrounding spaces are dropped.
    pub fn from_csv<P>(file: P) -> Result<Self, DatasetError>
        where P: AsRef<Path>
    {
        let path = file.as_ref();
        let io_error = |source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_error)?;
        let mut lines = BufReader::new(file).lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line));

        let mut header = None;
        for (_, line) in lines.by_ref() {
            let line = line.map_err(io_error)?;
            if line.trim().is_empty() { continue; }

            header = Some(split_line(&line));
            break;
        }
        let header = header.ok_or_else(|| DatasetError::Empty {
            path: path.to_path_buf(),
        })?;
        let schema = Schema::new(header)?;
        let expected = schema.index_to_name.len();

        let mut rows = Vec::new();
        for (line_no, line) in lines {
            let line = line.map_err(io_error)?;
            if line.trim().is_empty() { continue; }

            let row = split_line(&line);
            if row.len() != expected {
                return Err(DatasetError::RowLength {
                    line: line_no,
                    expected,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        info!(
            "Loaded {} rows x {} columns from {}",
            rows.len(), expected, path.display(),
        );
        Ok(Self { schema: Arc::new(schema), rows, })
    }


    /// Convert a `polars::DataFrame` into `Dataset`.
    /// Every column is cast to its string representation.
    pub fn from_dataframe(data: &DataFrame) -> Result<Self, DatasetError> {
        let header = data.get_column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let n_rows = data.height();

        let mut rows = vec![Vec::with_capacity(header.len()); n_rows];
        for series in data.get_columns() {
            let series = series.cast(&DataType::Utf8)?;
            let values = series.utf8()?;
            for (row, value) in values.into_iter().enumerate() {
                let value = value.ok_or_else(|| DatasetError::MissingValue {
                    column: series.name().to_string(),
                    row,
                })?;
                rows[row].push(value.to_string());
            }
        }

        Self::new(header, rows)
    }


    /// Returns the attribute names in column order.
    pub fn header(&self) -> &[String] {
        &self.schema.index_to_name[..]
    }


    /// Returns the rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows[..]
    }


    /// Returns the pair of the number of rows and the number of columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.schema.index_to_name.len())
    }


    /// Returns `true` if the dataset has no row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Returns the column index of the attribute `name`.
    pub fn index_of<S: AsRef<str>>(&self, name: S) -> crate::Result<usize> {
        let name = name.as_ref();
        self.schema.name_to_index.get(name)
            .copied()
            .ok_or_else(|| Error::unknown_attribute(name))
    }


    /// Returns the attribute name of column `index`.
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.schema.index_to_name.get(index).map(String::as_str)
    }


    /// Returns the name -> index mapping.
    pub fn name_to_index(&self) -> &HashMap<String, usize> {
        &self.schema.name_to_index
    }


    /// Returns the values of the attribute `name`, one per row.
    pub fn column<S: AsRef<str>>(&self, name: S) -> crate::Result<Vec<&str>> {
        let k = self.index_of(name)?;
        let column = self.rows.iter()
            .map(|row| row[k].as_str())
            .collect();
        Ok(column)
    }


    /// Keep the named columns only, in the given order.
    /// The name <-> index mapping is rebuilt for the new header.
    pub fn project<S: AsRef<str>>(&self, columns: &[S])
        -> crate::Result<Self>
    {
        let indices = columns.iter()
            .map(|name| self.index_of(name))
            .collect::<crate::Result<Vec<_>>>()?;

        let header = columns.iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();
        let rows = self.rows.iter()
            .map(|row| {
                indices.iter()
                    .map(|&k| row[k].clone())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        Ok(Self::new(header, rows)?)
    }


    /// Group the rows by their value at `attribute`.
    ///
    /// Only the values that occur in this dataset get a group.
    /// Each group keeps the original row order and shares
    /// this dataset's header.
    pub fn partition<S: AsRef<str>>(&self, attribute: S)
        -> crate::Result<BTreeMap<String, Self>>
    {
        let k = self.index_of(attribute)?;

        let mut groups: BTreeMap<String, Vec<Vec<String>>> = BTreeMap::new();
        for row in self.rows.iter() {
            groups.entry(row[k].clone())
                .or_default()
                .push(row.clone());
        }

        let partitions = groups.into_iter()
            .map(|(value, rows)| {
                let schema = Arc::clone(&self.schema);
                (value, Self { schema, rows, })
            })
            .collect();
        Ok(partitions)
    }


    /// Count the occurrences of each value of `target`.
    pub fn label_distribution<S: AsRef<str>>(&self, target: S)
        -> crate::Result<LabelDistribution>
    {
        let k = self.index_of(target)?;
        let dist = self.rows.iter()
            .map(|row| row[k].as_str())
            .collect();
        Ok(dist)
    }
}


fn split_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(|x| x.trim().to_string())
        .collect()
}
