use serde::{Deserialize, Serialize};
use store_object::model;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
    Refunded,
}

/// A payment against a reservation, as reported by the payment provider
#[model]
#[table(name = "payments")]
pub struct Payment {
    #[primary_key]
    pub id: i64,

    #[references(reservations)]
    pub reservation_id: i64,

    pub amount_cents: i64,

    /// ISO 4217 code
    pub currency: String,

    #[unique]
    pub provider_reference: String,

    #[unique]
    pub idempotency_key: String,

    pub status: PaymentStatus,

    #[soft_delete]
    pub is_active: bool,
}

impl Payment {
    /// A pending payment with a fresh idempotency key
    pub fn new(
        reservation_id: i64,
        amount_cents: i64,
        currency: &str,
        provider_reference: &str,
    ) -> Self {
        Self {
            id: 0,
            reservation_id,
            amount_cents,
            currency: currency.to_ascii_uppercase(),
            provider_reference: provider_reference.to_string(),
            idempotency_key: Uuid::new_v4().to_string(),
            status: PaymentStatus::Pending,
            is_active: true,
        }
    }
}
