//! Fixtures shared by the unit tests of this crate

use crate::{model, DbPool, TableMetadata};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

#[model]
#[table(name = "travelers")]
pub struct Traveler {
    #[primary_key]
    pub id: i64,

    #[unique]
    pub email: String,

    pub nickname: Option<String>,

    #[soft_delete]
    pub is_active: bool,
}

impl Traveler {
    pub fn new(email: &str) -> Self {
        Self {
            id: 0,
            email: email.to_string(),
            nickname: None,
            is_active: true,
        }
    }
}

#[model]
#[table(name = "trips")]
pub struct Trip {
    #[primary_key]
    pub id: i64,

    #[references(travelers)]
    pub traveler_id: i64,

    #[index]
    pub destination: String,

    #[soft_delete]
    pub is_active: bool,
}

impl Trip {
    pub fn new(traveler_id: i64, destination: &str) -> Self {
        Self {
            id: 0,
            traveler_id,
            destination: destination.to_string(),
            is_active: true,
        }
    }
}

/// Single-connection in-memory pool; the database lives as long as the pool
pub async fn memory_pool() -> DbPool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap()
}

/// Pool with the `travelers` and `trips` tables created
pub async fn travel_pool() -> DbPool {
    let pool = memory_pool().await;
    create::<Traveler>(&pool).await;
    create::<Trip>(&pool).await;
    pool
}

async fn create<T: TableMetadata>(pool: &DbPool) {
    sqlx::query(T::create_table_sql())
        .execute(pool)
        .await
        .unwrap();
    for index in T::create_indexes_sql() {
        sqlx::query(index).execute(pool).await.unwrap();
    }
}
