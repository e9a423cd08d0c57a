pub mod api;
pub mod client;
pub mod detail;
pub mod error;
pub mod normalize;
pub mod pacing;
pub mod search;
pub mod types;

pub use api::{NearbyQuery, PlacesApi};
pub use client::PlacesClient;
pub use detail::{fetch_place_detail, DetailFailure, DetailOutcome};
pub use error::PlacesError;
pub use normalize::{normalize_place, Coordinates, Features, PlaceDetail};
pub use pacing::Pacer;
pub use search::CategorySearch;
pub use types::{ApiStatus, DetailResponse, PlaceSummary, RawPlaceDetail, SearchResponse};
