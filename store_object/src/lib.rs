//! Store Object - core data-access layer for travelstore
//!
//! This crate provides the entity capability contract, the request-scoped
//! database context (unit of work) and the generic soft-delete repository.

// Lets `#[model]` / `#[derive(TableMetadata)]` expand to `::store_object::...`
// inside this crate as well.
extern crate self as store_object;

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod context;
pub mod errors;
pub mod generic_repository;
pub mod prelude;
pub mod traits;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{DbContext, GeneratedKey, StagedWrite, WriteKind};
pub use errors::StoreError;
pub use generic_repository::GenericRepository;
pub use traits::{Entity, Repository, SoftDeletable, TableMetadata};
pub use validation::{ValidatedFieldName, ValidationError};

pub use table_derive::{model, TableMetadata};
pub use type_mapping::{self, SqlValue};

use sqlx::SqlitePool;

pub type DbPool = SqlitePool;

/// Numeric identifier shared by every entity
pub type EntityId = i64;
