use crate::domain::Review;
use crate::repositories::forward_repository;
use store_object::{DbContext, EntityId, GenericRepository, StoreError, TableMetadata};

#[derive(Debug, Clone)]
pub struct ReviewRepository {
    repo: GenericRepository<Review>,
}

forward_repository!(ReviewRepository, Review);

impl ReviewRepository {
    pub fn new(context: DbContext) -> Self {
        Self {
            repo: GenericRepository::new(context),
        }
    }

    pub fn generic(&self) -> &GenericRepository<Review> {
        &self.repo
    }

    pub async fn list_by_hotel(&self, hotel_id: EntityId) -> Result<Vec<Review>, StoreError> {
        self.repo.find_by_column("hotel_id", hotel_id, false).await
    }

    /// Mean rating of the hotel's active reviews; exactly 0 when there are none
    pub async fn average_rating(&self, hotel_id: EntityId) -> Result<f64, StoreError> {
        let sql = format!(
            "SELECT AVG(\"rating\") FROM \"{}\" WHERE \"hotel_id\" = ?1 AND \"is_active\" = 1",
            Review::table_name()
        );

        let average = sqlx::query_scalar::<_, Option<f64>>(&sql)
            .bind(hotel_id)
            .fetch_one(self.repo.pool())
            .await
            .map_err(|e| StoreError::database_operation(Review::table_name(), "average_rating", e))?;

        Ok(average.unwrap_or(0.0))
    }
}
