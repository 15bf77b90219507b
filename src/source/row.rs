use std::collections::BTreeMap;

use crate::error::{ContactResult, DataAccessError};

/// A single cell value, mirroring SQLite's storage classes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// One row from the record source: a column-name to value mapping.
///
/// The accessors are the typed decoding boundary: an absent column is always
/// a [`DataAccessError`], while a null cell is normalized per accessor
/// (empty string, `None`, or zero). Integer cells read as text yield their
/// decimal representation, matching how the platform hands out row ids.
#[derive(Debug, Clone, Default)]
pub struct Row {
    values: BTreeMap<String, Value>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mainly for constructing rows by hand.
    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: Value) {
        self.values.insert(column.into(), value);
    }

    /// Text value, with a null cell read as the empty string.
    pub fn text_or_empty(&self, column: &str) -> ContactResult<String> {
        Ok(self.text(column)?.unwrap_or_default())
    }

    /// Text value, with a null cell read as `None`.
    pub fn opt_text(&self, column: &str) -> ContactResult<Option<String>> {
        self.text(column)
    }

    /// Text value that must be present and non-null.
    pub fn require_text(&self, column: &str) -> ContactResult<String> {
        self.text(column)?.ok_or_else(|| DataAccessError::NullColumn {
            column: column.to_string(),
        })
    }

    /// Integer value, with a null cell read as zero.
    pub fn integer_or_zero(&self, column: &str) -> ContactResult<i64> {
        match self.get(column)? {
            Value::Null => Ok(0),
            Value::Integer(i) => Ok(*i),
            _ => Err(DataAccessError::ColumnType {
                column: column.to_string(),
                expected: "integer",
            }),
        }
    }

    fn text(&self, column: &str) -> ContactResult<Option<String>> {
        match self.get(column)? {
            Value::Null => Ok(None),
            Value::Text(t) => Ok(Some(t.clone())),
            Value::Integer(i) => Ok(Some(i.to_string())),
            _ => Err(DataAccessError::ColumnType {
                column: column.to_string(),
                expected: "text",
            }),
        }
    }

    fn get(&self, column: &str) -> ContactResult<&Value> {
        self.values
            .get(column)
            .ok_or_else(|| DataAccessError::MissingColumn {
                column: column.to_string(),
            })
    }
}
