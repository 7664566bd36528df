use store_object::model;

#[model]
#[table(name = "reviews")]
pub struct Review {
    #[primary_key]
    pub id: i64,

    #[references(hotels)]
    pub hotel_id: i64,

    #[references(users)]
    pub user_id: i64,

    /// 1 to 5
    pub rating: i32,

    pub comment: Option<String>,

    #[soft_delete]
    pub is_active: bool,
}

impl Review {
    pub fn new(hotel_id: i64, user_id: i64, rating: i32) -> Self {
        Self {
            id: 0,
            hotel_id,
            user_id,
            rating,
            comment: None,
            is_active: true,
        }
    }
}
