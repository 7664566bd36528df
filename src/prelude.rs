//! Convenience re-exports for common travelstore usage
//!
//! # Example
//!
//! ```rust
//! use travelstore::prelude::*;
//!
//! // Entities, repositories, the unit of work and the store are in scope
//! ```

// Core components
pub use crate::core::{RequestScope, TravelStore};
pub use crate::errors::TravelStoreError;
pub use crate::logging::init_logging;

// Entities and repositories
pub use crate::domain::{
    Commodity, CommodityService, CommodityWithServices, Hotel, HotelWithRoomTypes, Package,
    PackageWithHotel, Payment, PaymentStatus, Reservation, ReservationDetails, ReservationStatus,
    Review, RoomType, User, UserRole,
};
pub use crate::repositories::{
    CommodityRepository, HotelRepository, PackageRepository, PaymentRepository,
    ReservationRepository, ReviewRepository, RoomTypeRepository, UserRepository,
};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, LogFormat, LoggingConfig};

// Re-export commonly used store-object types for convenience
pub use store_object::prelude::*;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
