//! Serialization utilities
//!
//! This module converts a serializable entity into a column -> value map.

use crate::types::SqlValue;
use serde::Serialize;
use std::collections::HashMap;

/// Convert serializable data into a column -> [`SqlValue`] payload.
///
/// The data must serialize to a JSON object; field names become column names.
pub fn serialize_to_sql_payload<T: Serialize>(
    data: &T,
) -> Result<HashMap<String, SqlValue>, serde_json::Error> {
    match serde_json::to_value(data)? {
        serde_json::Value::Object(map) => Ok(map
            .into_iter()
            .map(|(key, value)| (key, SqlValue::from(value)))
            .collect()),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "expected a struct to serialize into columns, got {}",
            other
        ))),
    }
}
