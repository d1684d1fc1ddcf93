use std::io::Read;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::LoadError;

/// One CSV line keyed by the header row's column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl DataRow {
    /// Value of the first column named `column`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx].as_str())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.columns
            .iter()
            .zip(self.values.iter())
            .map(|(c, v)| (c.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Serialize for DataRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// Rows of a CSV file in line order, sharing the header's column set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    columns: Arc<[String]>,
    rows: Vec<DataRow>,
}

impl DataSet {
    pub fn parse_str(text: &str) -> Result<DataSet, LoadError> {
        Self::from_reader(text.as_bytes())
    }

    /// Parses comma separated text whose first record is the header.
    ///
    /// Ragged rows are not an error: short rows are padded with empty cells
    /// and cells past the header width are dropped.
    pub fn from_reader<R: Read>(reader: R) -> Result<DataSet, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let mut builder = DataSetBuilder::from_headers(reader.headers()?.iter());
        for record in reader.records() {
            builder.push_record(record?.iter());
        }

        Ok(builder.finish())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for DataSet {
    fn default() -> Self {
        DataSetBuilder::from_headers(Vec::<String>::new()).finish()
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataRow;
    type IntoIter = std::slice::Iter<'a, DataRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for DataSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Assembles a [`DataSet`] record by record, for readers that produce
/// records themselves.
pub struct DataSetBuilder {
    columns: Arc<[String]>,
    rows: Vec<DataRow>,
}

impl DataSetBuilder {
    pub fn from_headers<H>(headers: H) -> DataSetBuilder
    where
        H: IntoIterator,
        H::Item: AsRef<str>,
    {
        let columns: Vec<String> = headers.into_iter().map(|s| s.as_ref().to_owned()).collect();

        DataSetBuilder {
            columns: columns.into(),
            rows: Vec::new(),
        }
    }

    pub fn push_record<R>(&mut self, record: R)
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let width = self.columns.len();
        let mut values: Vec<String> = record
            .into_iter()
            .take(width)
            .map(|s| s.as_ref().to_owned())
            .collect();
        values.resize(width, String::new());

        self.rows.push(DataRow {
            columns: Arc::clone(&self.columns),
            values,
        });
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn finish(self) -> DataSet {
        DataSet {
            columns: self.columns,
            rows: self.rows,
        }
    }
}
