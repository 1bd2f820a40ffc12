//! Trait abstraction for database values and typed row extraction.
//!
//! `DatabaseValue` hides the backend's value representation; `RowReader`
//! pulls typed columns out of a result row, reporting the relation and column
//! on mismatch.

use std::fmt::Debug;

use cozo::{DataValue, Num};

use super::schema::SchemaRelation;
use super::DbError;

/// Trait for database values that can be extracted to Rust types.
pub trait DatabaseValue: Clone + Debug {
    /// Extract as String if the value is string-like.
    fn as_string(&self) -> Option<String>;

    /// Extract as i64 if the value is an integer.
    fn as_i64(&self) -> Option<i64>;

    /// Extract as f64 if the value is numeric.
    fn as_f64(&self) -> Option<f64>;

    /// Whether the value is null.
    fn is_null(&self) -> bool;

    /// Get type name for error messages.
    fn type_name(&self) -> &'static str;
}

impl DatabaseValue for DataValue {
    fn as_string(&self) -> Option<String> {
        match self {
            DataValue::Str(s) => Some(s.to_string()),
            _ => None,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            DataValue::Num(Num::Int(i)) => Some(*i),
            _ => None,
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            DataValue::Num(Num::Int(i)) => Some(*i as f64),
            DataValue::Num(Num::Float(f)) => Some(*f),
            _ => None,
        }
    }

    fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::Bool(_) => "bool",
            DataValue::Num(Num::Int(_)) => "int",
            DataValue::Num(Num::Float(_)) => "float",
            DataValue::Str(_) => "string",
            DataValue::Bytes(_) => "bytes",
            DataValue::List(_) => "list",
            _ => "other",
        }
    }
}

/// Typed access to one result row laid out as `relation.all_fields()`.
pub struct RowReader<'a, V: DatabaseValue = DataValue> {
    relation: &'a SchemaRelation,
    row: &'a [V],
}

impl<'a, V: DatabaseValue> RowReader<'a, V> {
    pub fn new(relation: &'a SchemaRelation, row: &'a [V]) -> Self {
        Self { relation, row }
    }

    fn value(&self, column: &str) -> Result<&'a V, DbError> {
        self.relation
            .column_index(column)
            .and_then(|idx| self.row.get(idx))
            .ok_or_else(|| DbError::MissingColumn {
                name: format!("{}.{}", self.relation.name, column),
            })
    }

    fn invalid(&self, column: &str, expected: &'static str, found: &V) -> DbError {
        DbError::InvalidValue {
            relation: self.relation.name.to_string(),
            column: column.to_string(),
            expected,
            found: found.type_name(),
        }
    }

    pub fn string(&self, column: &str) -> Result<String, DbError> {
        let value = self.value(column)?;
        value
            .as_string()
            .ok_or_else(|| self.invalid(column, "string", value))
    }

    pub fn opt_string(&self, column: &str) -> Result<Option<String>, DbError> {
        let value = self.value(column)?;
        if value.is_null() {
            return Ok(None);
        }
        value
            .as_string()
            .map(Some)
            .ok_or_else(|| self.invalid(column, "string", value))
    }

    pub fn int(&self, column: &str) -> Result<i64, DbError> {
        let value = self.value(column)?;
        value.as_i64().ok_or_else(|| self.invalid(column, "int", value))
    }

    pub fn opt_int(&self, column: &str) -> Result<Option<i64>, DbError> {
        let value = self.value(column)?;
        if value.is_null() {
            return Ok(None);
        }
        value
            .as_i64()
            .map(Some)
            .ok_or_else(|| self.invalid(column, "int", value))
    }

    pub fn float(&self, column: &str) -> Result<f64, DbError> {
        let value = self.value(column)?;
        value.as_f64().ok_or_else(|| self.invalid(column, "float", value))
    }

    pub fn opt_float(&self, column: &str) -> Result<Option<f64>, DbError> {
        let value = self.value(column)?;
        if value.is_null() {
            return Ok(None);
        }
        value
            .as_f64()
            .map(Some)
            .ok_or_else(|| self.invalid(column, "float", value))
    }
}

/// Conversions from Rust values into bound script parameters.
pub fn int_value(i: i64) -> DataValue {
    DataValue::Num(Num::Int(i))
}

pub fn float_value(f: f64) -> DataValue {
    DataValue::Num(Num::Float(f))
}

pub fn string_value(s: &str) -> DataValue {
    DataValue::Str(s.into())
}

pub fn opt_int_value(i: Option<i64>) -> DataValue {
    i.map(int_value).unwrap_or(DataValue::Null)
}

pub fn opt_float_value(f: Option<f64>) -> DataValue {
    f.map(float_value).unwrap_or(DataValue::Null)
}

pub fn opt_string_value(s: Option<&str>) -> DataValue {
    s.map(string_value).unwrap_or(DataValue::Null)
}
