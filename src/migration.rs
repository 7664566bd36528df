//! Database migration functionality
//!
//! This module provides automatic table creation for the entities managed by
//! travelstore.

use crate::core::TravelStore;
use crate::domain::{
    Commodity, CommodityService, Hotel, Package, Payment, Reservation, Review, RoomType, User,
};
use crate::errors::TravelStoreError;
use store_object::{StoreError, TableMetadata};
use tracing::{debug, info};

impl TravelStore {
    /// Automatically create table and indexes for a model
    /// If recreate is true, drops existing table first
    pub async fn auto_migrate<T>(&self, recreate: bool) -> Result<(), TravelStoreError>
    where
        T: TableMetadata,
    {
        let table_name = T::table_name();

        if recreate {
            let drop_sql = T::drop_table_sql();
            debug!(table = table_name, sql = %drop_sql, "Dropping table");
            sqlx::query(&drop_sql)
                .execute(self.pool())
                .await
                .map_err(|e| StoreError::database_operation(table_name, "drop_table", e))?;
        }

        debug!(table = table_name, sql = T::create_table_sql(), "Creating table");
        sqlx::query(T::create_table_sql())
            .execute(self.pool())
            .await
            .map_err(|e| StoreError::database_operation(table_name, "create_table", e))?;

        for index_sql in T::create_indexes_sql() {
            debug!(table = table_name, sql = index_sql, "Creating index");
            sqlx::query(index_sql)
                .execute(self.pool())
                .await
                .map_err(|e| StoreError::database_operation(table_name, "create_index", e))?;
        }

        info!(table = table_name, recreate, "Migrated table");
        Ok(())
    }

    /// Create every table in dependency order.
    /// With `recreate`, tables are first dropped in reverse order.
    pub async fn migrate_all(&self, recreate: bool) -> Result<(), TravelStoreError> {
        if recreate {
            self.drop_all().await?;
        }

        self.auto_migrate::<User>(false).await?;
        self.auto_migrate::<Hotel>(false).await?;
        self.auto_migrate::<RoomType>(false).await?;
        self.auto_migrate::<Package>(false).await?;
        self.auto_migrate::<Reservation>(false).await?;
        self.auto_migrate::<Payment>(false).await?;
        self.auto_migrate::<Review>(false).await?;
        self.auto_migrate::<Commodity>(false).await?;
        self.auto_migrate::<CommodityService>(false).await?;
        Ok(())
    }

    async fn drop_all(&self) -> Result<(), TravelStoreError> {
        let drops = [
            (CommodityService::table_name(), CommodityService::drop_table_sql()),
            (Commodity::table_name(), Commodity::drop_table_sql()),
            (Review::table_name(), Review::drop_table_sql()),
            (Payment::table_name(), Payment::drop_table_sql()),
            (Reservation::table_name(), Reservation::drop_table_sql()),
            (Package::table_name(), Package::drop_table_sql()),
            (RoomType::table_name(), RoomType::drop_table_sql()),
            (Hotel::table_name(), Hotel::drop_table_sql()),
            (User::table_name(), User::drop_table_sql()),
        ];

        for (table, sql) in drops {
            debug!(table, sql = %sql, "Dropping table");
            sqlx::query(&sql)
                .execute(self.pool())
                .await
                .map_err(|e| StoreError::database_operation(table, "drop_table", e))?;
        }
        Ok(())
    }
}
