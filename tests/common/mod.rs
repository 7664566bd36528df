#![allow(dead_code)]

use chrono::NaiveDate;
use travelstore::prelude::*;

/// In-memory store with every table created
pub async fn store() -> TravelStore {
    let store = TravelStore::new(DatabaseConfig::in_memory())
        .await
        .expect("connect to in-memory database");
    store.migrate_all(false).await.expect("migrate");
    store
}

pub fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).expect("valid date")
}

pub fn user(id: i64, email: &str) -> User {
    let mut user = User::new(email, "Test Traveler", "hash");
    user.id = id;
    user
}

pub fn hotel(id: i64, tax_id: &str, city: &str) -> Hotel {
    let mut hotel = Hotel::new("Hotel Sol", tax_id, city, "Av. Central 100", 4);
    hotel.id = id;
    hotel
}

pub fn room_type(id: i64, hotel_id: i64, name: &str) -> RoomType {
    let mut room_type = RoomType::new(hotel_id, name, 2, 12_000);
    room_type.id = id;
    room_type
}

pub fn package(id: i64, hotel_id: i64, name: &str) -> Package {
    let mut package = Package::new(hotel_id, name, 50_000, 3);
    package.id = id;
    package
}

pub fn reservation(id: i64, user_id: i64, hotel_id: i64, room_type_id: i64) -> Reservation {
    let mut reservation =
        Reservation::new(user_id, hotel_id, room_type_id, date(3, 10), date(3, 13), 2, 36_000);
    reservation.id = id;
    reservation
}

/// Users 1 and 2, hotel 1 in Cusco with room types 1 and 2, package 1
pub async fn seed_catalog(scope: &RequestScope) {
    let users = scope.users();
    users.add(user(1, "ana@example.com")).await.unwrap();
    users.add(user(2, "bo@example.com")).await.unwrap();

    scope.hotels().add(hotel(1, "TAX-001", "Cusco")).await.unwrap();

    let room_types = scope.room_types();
    room_types.add(room_type(1, 1, "Double")).await.unwrap();
    room_types.add(room_type(2, 1, "Suite")).await.unwrap();

    scope.packages().add(package(1, 1, "Sacred Valley")).await.unwrap();

    assert!(scope.save_changes().await.unwrap());
}
