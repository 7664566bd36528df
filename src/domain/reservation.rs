use super::{Package, RoomType, User};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use store_object::model;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[model]
#[table(name = "reservations")]
pub struct Reservation {
    #[primary_key]
    pub id: i64,

    #[references(users)]
    pub user_id: i64,

    #[references(hotels)]
    pub hotel_id: i64,

    #[references(room_types)]
    pub room_type_id: i64,

    #[references(packages)]
    pub package_id: Option<i64>,

    pub check_in: NaiveDate,

    pub check_out: NaiveDate,

    pub guests: i32,

    pub total_cents: i64,

    pub status: ReservationStatus,

    #[soft_delete]
    pub is_active: bool,
}

impl Reservation {
    /// A pending reservation without a package
    pub fn new(
        user_id: i64,
        hotel_id: i64,
        room_type_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
        guests: i32,
        total_cents: i64,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            hotel_id,
            room_type_id,
            package_id: None,
            check_in,
            check_out,
            guests,
            total_cents,
            status: ReservationStatus::Pending,
            is_active: true,
        }
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// A reservation with its related rows loaded one level deep.
///
/// A related row that is inactive (or missing) is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub user: Option<User>,
    pub room_type: Option<RoomType>,
    pub package: Option<Package>,
}
