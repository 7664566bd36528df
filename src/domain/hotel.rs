use super::RoomType;
use serde::Serialize;
use store_object::model;

#[model]
#[table(name = "hotels")]
pub struct Hotel {
    #[primary_key]
    pub id: i64,

    pub name: String,

    #[unique]
    pub tax_id: String,

    #[index]
    pub city: String,

    pub address: String,

    pub stars: i32,

    pub description: Option<String>,

    #[soft_delete]
    pub is_active: bool,
}

impl Hotel {
    pub fn new(name: &str, tax_id: &str, city: &str, address: &str, stars: i32) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            tax_id: tax_id.to_string(),
            city: city.to_string(),
            address: address.to_string(),
            stars,
            description: None,
            is_active: true,
        }
    }
}

/// A hotel with its active room types
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelWithRoomTypes {
    pub hotel: Hotel,
    pub room_types: Vec<RoomType>,
}
