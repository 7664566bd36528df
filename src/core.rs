//! Core travelstore functionality
//!
//! `TravelStore` owns the connection pool; each request-scoped operation
//! opens a `RequestScope`, whose repositories share one unit of work.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use store_object::{DbContext, DbPool, StoreError};
use tracing::info;

use crate::errors::TravelStoreError;
use crate::repositories::{
    CommodityRepository, HotelRepository, PackageRepository, PaymentRepository,
    ReservationRepository, ReviewRepository, RoomTypeRepository, UserRepository,
};
use config::DatabaseConfig;

/// Main coordinator that manages the database connection pool
#[derive(Debug, Clone)]
pub struct TravelStore {
    pool: DbPool,
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

impl TravelStore {
    /// Create new TravelStore with database connection
    pub async fn new(config: DatabaseConfig) -> Result<Self, TravelStoreError> {
        config.validate()?;

        let options = SqliteConnectOptions::from_str(&config.url)?.foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds));

        // An in-memory database disappears with its last connection
        if is_memory_url(&config.url) {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        } else {
            pool_options =
                pool_options.idle_timeout(Duration::from_secs(config.idle_timeout_seconds));
            if config.max_lifetime_seconds > 0 {
                pool_options =
                    pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
            }
        }

        let pool = pool_options.connect_with(options).await?;
        info!(
            max_connections = config.max_connections,
            in_memory = is_memory_url(&config.url),
            "Connected to database"
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// A fresh database context with an empty change tracker
    pub fn context(&self) -> DbContext {
        DbContext::new(self.pool.clone())
    }

    /// Open a request scope: repositories built from it share one unit of work
    pub fn scope(&self) -> RequestScope {
        RequestScope::new(self.context())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), TravelStoreError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// The repositories of one request-scoped operation
#[derive(Debug, Clone)]
pub struct RequestScope {
    context: DbContext,
}

impl RequestScope {
    pub fn new(context: DbContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &DbContext {
        &self.context
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.context.clone())
    }

    pub fn hotels(&self) -> HotelRepository {
        HotelRepository::new(self.context.clone())
    }

    pub fn room_types(&self) -> RoomTypeRepository {
        RoomTypeRepository::new(self.context.clone())
    }

    pub fn packages(&self) -> PackageRepository {
        PackageRepository::new(self.context.clone())
    }

    pub fn reservations(&self) -> ReservationRepository {
        ReservationRepository::new(self.context.clone())
    }

    pub fn payments(&self) -> PaymentRepository {
        PaymentRepository::new(self.context.clone())
    }

    pub fn reviews(&self) -> ReviewRepository {
        ReviewRepository::new(self.context.clone())
    }

    pub fn commodities(&self) -> CommodityRepository {
        CommodityRepository::new(self.context.clone())
    }

    /// Commit everything staged through this scope's repositories
    pub async fn save_changes(&self) -> Result<bool, StoreError> {
        self.context.save_changes().await
    }
}
