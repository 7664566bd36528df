use store_object::model;

#[model]
#[table(name = "room_types")]
pub struct RoomType {
    #[primary_key]
    pub id: i64,

    #[references(hotels)]
    pub hotel_id: i64,

    pub name: String,

    pub capacity: i32,

    pub nightly_rate_cents: i64,

    #[soft_delete]
    pub is_active: bool,
}

impl RoomType {
    pub fn new(hotel_id: i64, name: &str, capacity: i32, nightly_rate_cents: i64) -> Self {
        Self {
            id: 0,
            hotel_id,
            name: name.to_string(),
            capacity,
            nightly_rate_cents,
            is_active: true,
        }
    }
}
