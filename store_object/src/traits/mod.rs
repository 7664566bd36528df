//! Traits for database operations
//!
//! This module contains the entity capability contract and the repository
//! interface of the data-access layer.

pub mod core;
pub mod soft_deletable;
pub mod table_metadata;

pub use self::core::Repository;
pub use soft_deletable::SoftDeletable;
pub use table_metadata::{Entity, TableMetadata};
