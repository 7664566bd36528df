//! Soft-delete capability
//!
//! Every persisted entity exposes a mutable active flag. "Deleting" an entity
//! flips the flag; the row itself is never removed.

/// Capability implemented by entities with an active flag.
///
/// Derived by `#[derive(TableMetadata)]` for the field marked `#[soft_delete]`.
pub trait SoftDeletable {
    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);
}
