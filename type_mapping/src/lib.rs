//! Unified type mapping between Rust types and SQLite
//! This crate provides the mapping logic shared by the derive macro and the runtime store

pub mod keywords;
pub mod serialize;
pub mod sql;
pub mod types;

pub use keywords::is_reserved_keyword;
pub use serialize::serialize_to_sql_payload;
pub use sql::{inner_type, is_optional_type, rust_type_to_sqlite_type};
pub use types::SqlValue;
