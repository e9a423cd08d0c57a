//! Normalization of Place Details responses into the flat record written to
//! the output dataset.

use serde::{Deserialize, Serialize};

use crate::types::RawPlaceDetail;

/// A normalized place ready for the output dataset.
///
/// Field order is the serialized key order. Absent scalars serialize as
/// `null`; they are never dropped from the object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    pub name: Option<String>,
    pub address: Option<String>,
    pub coordinates: Coordinates,
    pub rating: Option<f64>,
    pub total_ratings: Option<u32>,
    pub price_level: Option<u8>,
    pub phone_number: Option<String>,
    pub website: Option<String>,
    /// Weekly hours, one line per day. `None` when the provider omits them.
    pub opening_hours: Option<Vec<String>>,
    pub place_id: String,
    pub types: Vec<String>,
    pub features: Features,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub wheelchair_accessible: bool,
    pub serves_vegetarian: bool,
    pub delivery: bool,
    pub dine_in: bool,
    pub takeout: bool,
}

/// Converts a raw Place Details `result` into a [`PlaceDetail`].
///
/// `place_id` is the identifier the details were requested for; the field
/// mask does not ask the provider to echo it back.
#[must_use]
pub fn normalize_place(place_id: &str, raw: RawPlaceDetail) -> PlaceDetail {
    let location = raw.geometry.and_then(|g| g.location).unwrap_or_default();

    PlaceDetail {
        name: raw.name,
        address: raw.formatted_address,
        coordinates: Coordinates {
            lat: location.lat,
            lng: location.lng,
        },
        rating: raw.rating,
        total_ratings: raw.user_ratings_total,
        price_level: raw.price_level,
        phone_number: raw.formatted_phone_number,
        website: raw.website,
        opening_hours: raw.opening_hours.and_then(|h| h.weekday_text),
        place_id: place_id.to_owned(),
        types: raw.types.unwrap_or_default(),
        features: Features {
            wheelchair_accessible: raw.wheelchair_accessible_entrance.unwrap_or(false),
            serves_vegetarian: raw.serves_vegetarian_food.unwrap_or(false),
            delivery: raw.delivery.unwrap_or(false),
            dine_in: raw.dine_in.unwrap_or(false),
            takeout: raw.takeout.unwrap_or(false),
        },
    }
}
