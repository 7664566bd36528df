//! SQL type conversion utilities
//!
//! This module handles conversion between Rust types
//! and their SQLite column declarations.

/// Map Rust type names to SQLite column types for DDL generation.
///
/// `Option<T>` maps to the type of `T`; nullability is decided by the caller
/// through [`is_optional_type`]. Unknown types (text-encoded enums, for
/// instance) fall back to `TEXT`.
pub fn rust_type_to_sqlite_type(rust_type: &str) -> &'static str {
    let normalized = rust_type.replace(' ', "");
    match inner_type(&normalized) {
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "isize" => "INTEGER",
        "f32" | "f64" => "REAL",
        "bool" => "BOOLEAN",
        "String" | "&str" => "TEXT",
        "Uuid" | "uuid::Uuid" => "TEXT",
        "NaiveDate" | "chrono::NaiveDate" => "DATE",
        "NaiveDateTime"
        | "chrono::NaiveDateTime"
        | "DateTime<Utc>"
        | "chrono::DateTime<chrono::Utc>" => "TIMESTAMP",
        // JSON is kept in a TEXT column so SQLite never applies numeric affinity to it
        "serde_json::Value" | "Value" => "TEXT",
        "Vec<u8>" => "BLOB",
        _ => "TEXT",
    }
}

/// Check if a Rust type is Optional (nullable in SQL)
pub fn is_optional_type(rust_type: &str) -> bool {
    let normalized = rust_type.replace(' ', "");
    normalized.starts_with("Option<") || normalized.starts_with("std::option::Option<")
}

/// Strip a single `Option<...>` wrapper from a whitespace-free type string
pub fn inner_type(rust_type: &str) -> &str {
    rust_type
        .strip_prefix("std::option::Option<")
        .or_else(|| rust_type.strip_prefix("Option<"))
        .and_then(|rest| rest.strip_suffix('>'))
        .unwrap_or(rust_type)
}
