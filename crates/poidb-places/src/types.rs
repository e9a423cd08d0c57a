//! Places API response types.
//!
//! Both endpoints wrap their payload in a `{"status": "...", ...}` envelope
//! with an optional human-readable `error_message`.

use serde::Deserialize;

/// Provider status code from a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ApiStatus {
    Ok,
    ZeroResults,
    /// Any other status (`OVER_QUERY_LIMIT`, `REQUEST_DENIED`, `INVALID_REQUEST`, ...).
    Other(String),
}

impl From<String> for ApiStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            _ => Self::Other(status),
        }
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiStatus::Ok => write!(f, "OK"),
            ApiStatus::ZeroResults => write!(f, "ZERO_RESULTS"),
            ApiStatus::Other(status) => write!(f, "{status}"),
        }
    }
}

// ---------------------------------------------------------------------------
// nearbysearch
// ---------------------------------------------------------------------------

/// One page of a Nearby Search response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    /// Continuation token; only valid after a short provider-side delay.
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// A search hit. Only the identifier is needed to fetch details.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub result: Option<RawPlaceDetail>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// The nested `result` object of a Place Details response, restricted to the
/// requested field mask. Every field may be missing or `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPlaceDetail {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub price_level: Option<u8>,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<RawOpeningHours>,
    pub types: Option<Vec<String>>,
    pub wheelchair_accessible_entrance: Option<bool>,
    pub serves_vegetarian_food: Option<bool>,
    pub delivery: Option<bool>,
    pub dine_in: Option<bool>,
    pub takeout: Option<bool>,
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOpeningHours {
    pub weekday_text: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawGeometry {
    pub location: Option<RawLatLng>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct RawLatLng {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
