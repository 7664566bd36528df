//! Convenience re-exports for common store-object usage

// Core traits
pub use crate::traits::{Entity, Repository, SoftDeletable, TableMetadata};

// Error types
pub use crate::errors::StoreError;

// Unit of work and the generic repository
pub use crate::context::DbContext;
pub use crate::generic_repository::GenericRepository;

// Validation
pub use crate::validation::{ValidatedFieldName, ValidationError};

pub use crate::{model, DbPool, EntityId, SqlValue};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
