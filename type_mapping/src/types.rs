//! Owned SQL values
//!
//! Staged writes outlive the entity they were built from, so their bind
//! parameters are captured as owned [`SqlValue`]s.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
    Json(serde_json::Value),
    Null,
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<String> for SqlValue {
    fn from(val: String) -> Self {
        SqlValue::Text(val)
    }
}

impl From<&str> for SqlValue {
    fn from(val: &str) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<i64> for SqlValue {
    fn from(val: i64) -> Self {
        SqlValue::Integer(val)
    }
}

impl From<i32> for SqlValue {
    fn from(val: i32) -> Self {
        SqlValue::Integer(val as i64)
    }
}

impl From<f64> for SqlValue {
    fn from(val: f64) -> Self {
        SqlValue::Real(val)
    }
}

impl From<bool> for SqlValue {
    fn from(val: bool) -> Self {
        SqlValue::Boolean(val)
    }
}

impl From<Uuid> for SqlValue {
    fn from(val: Uuid) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(val: NaiveDate) -> Self {
        SqlValue::Text(val.format("%Y-%m-%d").to_string())
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(val: DateTime<Utc>) -> Self {
        SqlValue::Text(val.to_rfc3339())
    }
}

impl From<serde_json::Value> for SqlValue {
    fn from(val: serde_json::Value) -> Self {
        match val {
            serde_json::Value::Null => SqlValue::Null,
            serde_json::Value::Bool(b) => SqlValue::Boolean(b),
            serde_json::Value::String(s) => SqlValue::Text(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqlValue::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    SqlValue::Real(f)
                } else {
                    SqlValue::Text(n.to_string())
                }
            }
            other => SqlValue::Json(other),
        }
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}
