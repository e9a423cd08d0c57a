use std::future::Future;

use crate::error::PlacesError;
use crate::types::{DetailResponse, SearchResponse};

/// Parameters for one Nearby Search request.
#[derive(Debug, Clone, Copy)]
pub struct NearbyQuery<'a> {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: u32,
    pub category: &'a str,
    pub page_token: Option<&'a str>,
}

/// The two provider endpoints the collector depends on.
///
/// Implementations return the parsed response envelope; interpreting the
/// provider status is left to the caller.
pub trait PlacesApi {
    fn nearby_search(
        &self,
        query: &NearbyQuery<'_>,
    ) -> impl Future<Output = Result<SearchResponse, PlacesError>> + Send;

    fn place_details(
        &self,
        place_id: &str,
    ) -> impl Future<Output = Result<DetailResponse, PlacesError>> + Send;
}
