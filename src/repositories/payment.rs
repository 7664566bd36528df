use crate::domain::Payment;
use crate::repositories::forward_repository;
use store_object::{DbContext, EntityId, GenericRepository, StoreError};

#[derive(Debug, Clone)]
pub struct PaymentRepository {
    repo: GenericRepository<Payment>,
}

forward_repository!(PaymentRepository, Payment);

impl PaymentRepository {
    pub fn new(context: DbContext) -> Self {
        Self {
            repo: GenericRepository::new(context),
        }
    }

    pub fn generic(&self) -> &GenericRepository<Payment> {
        &self.repo
    }

    /// The most recent active payment of a reservation
    pub async fn get_by_reservation(
        &self,
        reservation_id: EntityId,
    ) -> Result<Option<Payment>, StoreError> {
        let mut payments = self
            .repo
            .find_by_column("reservation_id", reservation_id, false)
            .await?;
        Ok(payments.pop())
    }

    pub async fn get_by_provider_reference(
        &self,
        provider_reference: &str,
    ) -> Result<Option<Payment>, StoreError> {
        self.repo
            .find_one_by_column("provider_reference", provider_reference, false)
            .await
    }

    /// Whether the key was already used, by an active payment or not
    pub async fn exists_by_idempotency_key(&self, key: &str) -> Result<bool, StoreError> {
        self.repo.exists_by_column("idempotency_key", key, true).await
    }
}
