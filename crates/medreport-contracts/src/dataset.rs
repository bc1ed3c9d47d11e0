//! Records, datasets, and source identifiers.
//!
//! A `Record` is one row of a tabular source. Its fields keep the column
//! order of the source it came from and cannot be modified after
//! construction. A `Dataset` is the ordered concatenation of records from
//! every source that loaded, with `columns` holding the union of all source
//! columns in first-seen order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a tabular source, e.g. a file path relative to the data dir.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceId(pub String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One cell of a record. `value` is `None` for null/empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub column: String,
    pub value: Option<String>,
}

impl Field {
    pub fn new(column: impl Into<String>, value: Option<String>) -> Self {
        Self { column: column.into(), value }
    }
}

/// A single immutable row of the combined dataset.
///
/// Columns the row's source did not define are simply absent; they are
/// never filled in at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Build a record from fields in source column order.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Build a record where every field has a non-null value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| Field::new(k, Some(v.into())))
                .collect(),
        }
    }

    /// The value stored under `column`, or `None` if the column is absent
    /// from this record or holds a null.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.column == column)
            .and_then(|f| f.value.as_deref())
    }

    /// True if this record's source defined `column`, even as null.
    pub fn has_column(&self, column: &str) -> bool {
        self.fields.iter().any(|f| f.column == column)
    }

    /// Fields in source column order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The ordered concatenation of all successfully loaded sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from records, deriving the column union from them.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut dataset = Self::new();
        for record in records {
            dataset.push(record);
        }
        dataset
    }

    /// Build a dataset with an explicit column list (e.g. a CSV header).
    ///
    /// Columns that appear only in the records are still added to the union.
    pub fn with_columns(columns: Vec<String>, records: Vec<Record>) -> Self {
        let mut dataset = Self { columns: Vec::new(), records: Vec::new() };
        for column in columns {
            dataset.add_column(&column);
        }
        for record in records {
            dataset.push(record);
        }
        dataset
    }

    /// Append one record at the end, extending the column union if needed.
    pub fn push(&mut self, record: Record) {
        for field in record.fields() {
            self.add_column(&field.column);
        }
        self.records.push(record);
    }

    /// Append all rows of `other` after the rows of `self`, preserving order.
    ///
    /// No deduplication is performed.
    pub fn append(&mut self, other: Dataset) {
        for column in &other.columns {
            self.add_column(column);
        }
        self.records.extend(other.records);
    }

    /// Union of all source columns, in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn add_column(&mut self, column: &str) {
        if !self.columns.iter().any(|c| c == column) {
            self.columns.push(column.to_string());
        }
    }
}
