use crate::context::{DbContext, StagedWrite, WriteKind};
use crate::errors::StoreError;
use crate::traits::Entity;
use crate::validation::ValidatedFieldName;
use crate::{DbPool, SqlValue};
use std::marker::PhantomData;
use type_mapping::serialize_to_sql_payload;

/// Generic repository over one entity type.
///
/// Reads run against the context's pool; writes are staged on the context and
/// committed by `save_changes`.
pub struct GenericRepository<T: Entity> {
    pub(crate) context: DbContext,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: Entity> Clone for GenericRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.context.clone())
    }
}

impl<T: Entity> std::fmt::Debug for GenericRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericRepository")
            .field("table", &T::table_name())
            .field("context", &self.context)
            .finish()
    }
}

impl<T: Entity> GenericRepository<T> {
    pub fn new(context: DbContext) -> Self {
        Self {
            context,
            _phantom: PhantomData,
        }
    }

    pub fn context(&self) -> &DbContext {
        &self.context
    }

    pub fn pool(&self) -> &DbPool {
        self.context.pool()
    }

    /// Repository for another entity on the same context, so its writes join
    /// this repository's unit of work.
    pub fn related<U: Entity>(&self) -> GenericRepository<U> {
        GenericRepository::new(self.context.clone())
    }

    /// Stage the update of an entity as it is now
    pub(crate) async fn stage_update(&self, entity: &T) -> Result<(), StoreError> {
        let mut params = self.column_values(entity, false)?;
        params.push(SqlValue::Integer(entity.extract_id()));

        self.context
            .stage(StagedWrite {
                table: T::table_name(),
                kind: WriteKind::Update,
                sql: T::update_sql(),
                params,
            })
            .await;
        Ok(())
    }

    /// Stage the insertion of an entity; an id of 0 lets the database assign one
    pub(crate) async fn stage_insert(&self, entity: &T) -> Result<(), StoreError> {
        let generated_key = entity.extract_id() == 0;
        let params = self.column_values(entity, !generated_key)?;

        let (kind, sql) = if generated_key {
            (WriteKind::InsertGeneratedKey, T::insert_generated_key_sql())
        } else {
            (WriteKind::Insert, T::insert_sql())
        };

        self.context
            .stage(StagedWrite {
                table: T::table_name(),
                kind,
                sql,
                params,
            })
            .await;
        Ok(())
    }

    /// Column values in declaration order, optionally without the primary key
    fn column_values(&self, entity: &T, with_primary_key: bool) -> Result<Vec<SqlValue>, StoreError> {
        let mut payload = serialize_to_sql_payload(entity)
            .map_err(|e| StoreError::serialization(T::table_name(), e))?;

        T::columns()
            .iter()
            .filter(|column| with_primary_key || **column != T::primary_key_field())
            .map(|column| {
                payload.remove(*column).ok_or_else(|| {
                    StoreError::serialization(
                        T::table_name(),
                        format!("column '{}' missing from serialized entity", column),
                    )
                })
            })
            .collect()
    }

    /// Ensure `column` belongs to the entity before it is spliced into SQL
    pub(crate) fn checked_column(&self, column: &str) -> Result<&'static str, StoreError> {
        ValidatedFieldName::new(column)
            .map_err(|e| StoreError::validation(T::table_name(), column, e.to_string()))?;

        T::columns()
            .iter()
            .copied()
            .find(|known| *known == column)
            .ok_or_else(|| {
                StoreError::validation(T::table_name(), column, "unknown column")
            })
    }

    /// `WHERE` suffix restricting to active rows, if requested
    pub(crate) fn active_filter(include_inactive: bool) -> Option<String> {
        match (include_inactive, T::soft_delete_field()) {
            (false, Some(field)) => Some(format!("\"{}\" = 1", field)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{travel_pool, Traveler, Trip};
    use crate::TableMetadata;

    #[tokio::test]
    async fn generated_key_insert_omits_the_identifier() {
        let repo = GenericRepository::<Traveler>::new(DbContext::new(travel_pool().await));
        repo.stage_insert(&Traveler::new("ana@example.com")).await.unwrap();

        let staged = repo.context().staged_writes().await;
        assert_eq!(staged.len(), 1);
        assert_eq!(staged[0].kind, WriteKind::InsertGeneratedKey);
        assert_eq!(
            staged[0].params,
            vec![
                SqlValue::Text("ana@example.com".to_string()),
                SqlValue::Null,
                SqlValue::Boolean(true),
            ]
        );
    }

    #[tokio::test]
    async fn explicit_key_insert_binds_every_column() {
        let repo = GenericRepository::<Traveler>::new(DbContext::new(travel_pool().await));
        let mut traveler = Traveler::new("bo@example.com");
        traveler.id = 42;
        repo.stage_insert(&traveler).await.unwrap();

        let staged = repo.context().staged_writes().await;
        assert_eq!(staged[0].kind, WriteKind::Insert);
        assert_eq!(staged[0].params[0], SqlValue::Integer(42));
        assert_eq!(staged[0].params.len(), 4);
    }

    #[tokio::test]
    async fn update_binds_identifier_last() {
        let repo = GenericRepository::<Trip>::new(DbContext::new(travel_pool().await));
        let mut trip = Trip::new(3, "Lima");
        trip.id = 9;
        repo.stage_update(&trip).await.unwrap();

        let staged = repo.context().staged_writes().await;
        assert_eq!(staged[0].sql, Trip::update_sql());
        assert_eq!(staged[0].params.last(), Some(&SqlValue::Integer(9)));
    }

    #[tokio::test]
    async fn unknown_columns_are_rejected() {
        let repo = GenericRepository::<Trip>::new(DbContext::new(travel_pool().await));
        assert_eq!(repo.checked_column("destination").unwrap(), "destination");
        assert!(matches!(
            repo.checked_column("destination; DROP TABLE trips"),
            Err(StoreError::Validation { .. })
        ));
        let err = repo.checked_column("budget").unwrap_err();
        assert_eq!(err.to_string(), "Validation error on 'trips.budget': unknown column");
    }

    #[tokio::test]
    async fn related_repositories_share_the_context() {
        let travelers = GenericRepository::<Traveler>::new(DbContext::new(travel_pool().await));
        let trips = travelers.related::<Trip>();
        trips.stage_insert(&Trip::new(1, "Cusco")).await.unwrap();
        assert_eq!(travelers.context().pending_changes().await, 1);
    }
}
