use super::Hotel;
use serde::Serialize;
use store_object::model;

/// A priced stay offered by a hotel
#[model]
#[table(name = "packages")]
pub struct Package {
    #[primary_key]
    pub id: i64,

    #[references(hotels)]
    pub hotel_id: i64,

    pub name: String,

    pub description: Option<String>,

    pub price_cents: i64,

    pub nights: i32,

    #[soft_delete]
    pub is_active: bool,
}

impl Package {
    pub fn new(hotel_id: i64, name: &str, price_cents: i64, nights: i32) -> Self {
        Self {
            id: 0,
            hotel_id,
            name: name.to_string(),
            description: None,
            price_cents,
            nights,
            is_active: true,
        }
    }
}

/// A package with its hotel, `None` when the hotel is inactive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageWithHotel {
    pub package: Package,
    pub hotel: Option<Hotel>,
}
