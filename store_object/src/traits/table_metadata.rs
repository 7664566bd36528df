//! Table metadata
//!
//! Static description of how an entity maps onto its table.

use crate::traits::SoftDeletable;
use crate::EntityId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use std::fmt::Debug;

/// Metadata about an entity's table and its pre-built SQL.
///
/// Derive it with the `#[model]` attribute macro, which adds every derive an
/// entity needs:
///
/// ```rust,ignore
/// use store_object::model;
///
/// #[model]
/// #[table(name = "hotels")]
/// pub struct Hotel {
///     #[primary_key]
///     pub id: i64,
///
///     #[unique]
///     pub tax_id: String,
///
///     #[soft_delete]
///     pub is_active: bool,
/// }
/// ```
///
/// Columns are bound in declaration order. Serialized field names must match
/// column names, so entities must not rename fields through serde.
pub trait TableMetadata:
    Clone + Send + Sync + Debug + Serialize + DeserializeOwned
{
    /// The table name in the database
    fn table_name() -> &'static str;

    /// The primary key column
    fn primary_key_field() -> &'static str;

    /// Every column, in declaration order
    fn columns() -> &'static [&'static str];

    /// The active-flag column, if the entity supports soft deletion
    fn soft_delete_field() -> Option<&'static str>;

    /// Extract ID from model instance
    fn extract_id(&self) -> EntityId;

    /// `SELECT <columns> FROM <table>`
    fn select_base_sql() -> &'static str;

    /// Lookup by id, ignoring the active flag
    fn get_by_id_sql() -> &'static str;

    /// Lookup by id, active rows only
    fn get_active_by_id_sql() -> &'static str;

    fn list_all_sql() -> &'static str;

    fn list_active_sql() -> &'static str;

    fn count_all_sql() -> &'static str;

    fn count_active_sql() -> &'static str;

    /// Insert binding every column, identifier included
    fn insert_sql() -> &'static str;

    /// Insert binding every column except the identifier, which the database assigns
    fn insert_generated_key_sql() -> &'static str;

    /// Update binding every non-key column, then the identifier
    fn update_sql() -> &'static str;

    fn create_table_sql() -> &'static str;

    fn create_indexes_sql() -> &'static [&'static str];

    fn drop_table_sql() -> String {
        format!("DROP TABLE IF EXISTS \"{}\"", Self::table_name())
    }

    fn supports_soft_delete() -> bool {
        Self::soft_delete_field().is_some()
    }

    fn has_column(name: &str) -> bool {
        Self::columns().contains(&name)
    }

    /// Every column except the primary key, in declaration order
    fn value_columns() -> Vec<&'static str> {
        Self::columns()
            .iter()
            .copied()
            .filter(|column| *column != Self::primary_key_field())
            .collect()
    }
}

/// Everything the generic repository needs from a type: table metadata, the
/// active-flag capability and row decoding.
pub trait Entity:
    TableMetadata + SoftDeletable + for<'r> sqlx::FromRow<'r, SqliteRow> + Unpin + 'static
{
}

impl<T> Entity for T where
    T: TableMetadata + SoftDeletable + for<'r> sqlx::FromRow<'r, SqliteRow> + Unpin + 'static
{
}
