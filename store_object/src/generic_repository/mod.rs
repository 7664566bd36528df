//! Generic repository implementation
//!
//! This module provides CRUD with soft-delete semantics for any entity.

pub mod core;
pub mod lookup;
pub mod repository;
pub mod soft_deletable;

pub use self::core::GenericRepository;
