//! Error types for the travelstore crate
//!
//! Repository operations return `store_object::StoreError`; this module covers
//! bootstrapping: connecting, migrating, configuration and logging.

use config::ConfigError;
use store_object::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TravelStoreError {
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
