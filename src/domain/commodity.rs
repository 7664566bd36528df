use serde::Serialize;
use store_object::model;

/// An amenity a hotel offers (spa, parking, restaurant, ...)
#[model]
#[table(name = "commodities")]
pub struct Commodity {
    #[primary_key]
    pub id: i64,

    #[references(hotels)]
    pub hotel_id: i64,

    pub name: String,

    #[soft_delete]
    pub is_active: bool,
}

impl Commodity {
    pub fn new(hotel_id: i64, name: &str) -> Self {
        Self {
            id: 0,
            hotel_id,
            name: name.to_string(),
            is_active: true,
        }
    }
}

/// A priced service provided under an amenity
#[model]
#[table(name = "commodity_services")]
pub struct CommodityService {
    #[primary_key]
    pub id: i64,

    #[references(commodities)]
    pub commodity_id: i64,

    pub name: String,

    pub price_cents: i64,

    #[soft_delete]
    pub is_active: bool,
}

impl CommodityService {
    pub fn new(commodity_id: i64, name: &str, price_cents: i64) -> Self {
        Self {
            id: 0,
            commodity_id,
            name: name.to_string(),
            price_cents,
            is_active: true,
        }
    }
}

/// An amenity with its active services
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommodityWithServices {
    pub commodity: Commodity,
    pub services: Vec<CommodityService>,
}
