//! Dynamic row types for query results.
//! Rows carry no schema of their own; column names travel alongside them
//! in [`ResultSet`], taken from the statement metadata.

use std::fmt;

use rusqlite::types::{FromSqlError, ValueRef};

/// Owned copy of one SQLite value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// Text that is not valid UTF-8 is rejected, not repaired.
impl TryFrom<ValueRef<'_>> for Cell {
    type Error = FromSqlError;

    fn try_from(value: ValueRef<'_>) -> Result<Self, Self::Error> {
        Ok(match value {
            ValueRef::Null => Cell::Null,
            ValueRef::Integer(i) => Cell::Integer(i),
            ValueRef::Real(f) => Cell::Real(f),
            ValueRef::Text(_) => Cell::Text(value.as_str()?.to_owned()),
            ValueRef::Blob(bytes) => Cell::Blob(bytes.to_vec()),
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("None"),
            Self::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part: 1.0 rather than 1
            Self::Real(r) => write!(f, "{:?}", r),
            Self::Text(s) => f.write_str(s),
            Self::Blob(b) => write!(f, "X'{}'", hex::encode(b)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

/// Column names plus every fetched row, in engine scan order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
