//! # travelstore
//!
//! Data-access layer of a travel-booking backend: hotels, room types,
//! packages, reservations, payments, reviews, users and amenities, stored in
//! SQLite through a generic repository with soft-delete semantics.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use travelstore::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = TravelStore::new(DatabaseConfig::in_memory()).await?;
//!     store.migrate_all(false).await?;
//!
//!     let scope = store.scope();
//!     let users = scope.users();
//!     users
//!         .register(User::new("ana@example.com", "Ana Ruiz", "argon2-hash"), "customer")
//!         .await?;
//!     scope.save_changes().await?;
//!
//!     let ana = users.get_by_email("ana@example.com").await?;
//!     println!("Registered: {:?}", ana.map(|u| u.id));
//!
//!     // Soft delete: the row stays, default reads skip it
//!     if let Some(id) = scope.context().last_generated_key("users").await {
//!         users.soft_delete(id).await?;
//!         scope.save_changes().await?;
//!         assert!(users.get_by_id(id, false).await?.is_none());
//!         assert!(users.get_by_id(id, true).await?.is_some());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod migration;
pub mod prelude;
pub mod repositories;

// Re-export the main public types for convenience
pub use crate::core::{RequestScope, TravelStore};
pub use errors::TravelStoreError;
pub use logging::init_logging;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, LogFormat, LoggingConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use store_object;
pub use table_derive;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
