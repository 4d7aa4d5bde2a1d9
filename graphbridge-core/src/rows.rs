//! Generic row and value representation.
//!
//! Drivers hand back a [`NativeResultSet`]; data accessors translate it into
//! the platform's [`Row`] representation. Graph results routinely carry
//! nested structure, so [`Value`] includes list and map variants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A single database value in the platform's generic representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 text
    Text(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// Timestamp in UTC
    Timestamp(DateTime<Utc>),
    /// Ordered list of values (graph paths, collected properties)
    List(Vec<Value>),
    /// Keyed map of values (graph nodes and relationships)
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the integer content, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

/// Result rows exactly as the driver produced them.
///
/// This is the raw shape a [`crate::connector::ConnectionHandle`] returns;
/// only a data accessor turns it into [`Row`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NativeResultSet {
    /// Column names in result order
    pub columns: Vec<String>,
    /// One `Vec<Value>` per result row, matching `columns` positionally
    pub rows: Vec<Vec<Value>>,
}

impl NativeResultSet {
    /// Creates an empty result set with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends one row of native values.
    pub fn push_row(&mut self, values: Vec<Value>) {
        self.rows.push(values);
    }
}

/// One row in the platform's generic representation.
///
/// Column names are shared across all rows of a result to keep translation
/// cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<Vec<String>>,
    values: Vec<Value>,
}

impl Row {
    /// Creates a row over shared column names.
    pub fn new(columns: Arc<Vec<String>>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    /// Looks a value up by column name.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|name| name == column)
            .and_then(|index| self.values.get(index))
    }

    /// Looks a value up by position.
    pub fn get_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Column names for this row.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the row has no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
