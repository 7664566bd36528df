//! Domain entities
//!
//! One canonical type per concept. Every entity has an `i64` identifier
//! (`0` until the database assigns one) and an `is_active` flag for soft
//! deletion.

pub mod commodity;
pub mod hotel;
pub mod package;
pub mod payment;
pub mod reservation;
pub mod review;
pub mod room_type;
pub mod user;

pub use commodity::{Commodity, CommodityService, CommodityWithServices};
pub use hotel::{Hotel, HotelWithRoomTypes};
pub use package::{Package, PackageWithHotel};
pub use payment::{Payment, PaymentStatus};
pub use reservation::{Reservation, ReservationDetails, ReservationStatus};
pub use review::Review;
pub use room_type::RoomType;
pub use user::{User, UserRole};
