//! Column lookups
//!
//! Building blocks for the specialized repositories: equality and `IN`
//! filters on a single column, respecting the active flag.

use super::core::GenericRepository;
use crate::context::{bind_sql_value, WriteKind};
use crate::errors::StoreError;
use crate::traits::Entity;
use crate::SqlValue;

impl<T: Entity> GenericRepository<T> {
    fn lookup_sql(&self, condition: String, include_inactive: bool) -> String {
        let mut sql = format!("{} WHERE {}", T::select_base_sql(), condition);
        if let Some(active) = Self::active_filter(include_inactive) {
            sql.push_str(" AND ");
            sql.push_str(&active);
        }
        sql.push_str(&format!(" ORDER BY \"{}\"", T::primary_key_field()));
        sql
    }

    /// Every entity whose `column` equals `value`, ordered by id
    pub async fn find_by_column(
        &self,
        column: &str,
        value: impl Into<SqlValue>,
        include_inactive: bool,
    ) -> Result<Vec<T>, StoreError> {
        let column = self.checked_column(column)?;
        let sql = self.lookup_sql(format!("\"{}\" = ?1", column), include_inactive);
        crate::debug_log!("find_by_column on {}: {}", T::table_name(), sql);

        let query = sqlx::query_as::<_, T>(&sql);
        let value: SqlValue = value.into();
        let query = bind_sql_value!(query, value);
        query
            .fetch_all(self.pool())
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "find_by_column", e))
    }

    /// First entity (lowest id) whose `column` equals `value`
    pub async fn find_one_by_column(
        &self,
        column: &str,
        value: impl Into<SqlValue>,
        include_inactive: bool,
    ) -> Result<Option<T>, StoreError> {
        let column = self.checked_column(column)?;
        let sql = format!(
            "{} LIMIT 1",
            self.lookup_sql(format!("\"{}\" = ?1", column), include_inactive)
        );

        let query = sqlx::query_as::<_, T>(&sql);
        let value: SqlValue = value.into();
        let query = bind_sql_value!(query, value);
        query
            .fetch_optional(self.pool())
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "find_one_by_column", e))
    }

    /// Whether any row has `column` equal to `value`
    pub async fn exists_by_column(
        &self,
        column: &str,
        value: impl Into<SqlValue>,
        include_inactive: bool,
    ) -> Result<bool, StoreError> {
        let column = self.checked_column(column)?;
        let mut condition = format!("\"{}\" = ?1", column);
        if let Some(active) = Self::active_filter(include_inactive) {
            condition.push_str(" AND ");
            condition.push_str(&active);
        }
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM \"{}\" WHERE {})",
            T::table_name(),
            condition
        );

        let query = sqlx::query_scalar::<_, i64>(&sql);
        let value: SqlValue = value.into();
        let query = bind_sql_value!(query, value);
        let found = query
            .fetch_one(self.pool())
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "exists_by_column", e))?;
        Ok(found != 0)
    }

    /// Whether a write staged on this repository's context, and not saved yet,
    /// sets `column` to `value`
    pub async fn is_staged_with(
        &self,
        column: &str,
        value: impl Into<SqlValue>,
    ) -> Result<bool, StoreError> {
        let column = self.checked_column(column)?;
        let value: SqlValue = value.into();
        let value_columns = T::value_columns();

        let staged = self.context.staged_writes().await;
        Ok(staged
            .iter()
            .filter(|write| write.table == T::table_name())
            .any(|write| {
                // Only a plain insert binds the primary key first
                let position = match write.kind {
                    WriteKind::Insert => T::columns().iter().position(|c| *c == column),
                    WriteKind::InsertGeneratedKey | WriteKind::Update => {
                        value_columns.iter().position(|c| *c == column)
                    }
                };
                position.and_then(|i| write.params.get(i)) == Some(&value)
            }))
    }

    /// Every entity whose `column` is one of `values`, ordered by id.
    /// An empty `values` returns nothing without querying.
    pub async fn find_by_column_in(
        &self,
        column: &str,
        values: Vec<SqlValue>,
        include_inactive: bool,
    ) -> Result<Vec<T>, StoreError> {
        let column = self.checked_column(column)?;
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = (1..=values.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = self.lookup_sql(
            format!("\"{}\" IN ({})", column, placeholders),
            include_inactive,
        );
        crate::debug_log!("find_by_column_in on {}: {}", T::table_name(), sql);

        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in values {
            query = bind_sql_value!(query, value);
        }
        query
            .fetch_all(self.pool())
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "find_by_column_in", e))
    }
}
