//! HTTP client for the Places `nearbysearch` and `details` endpoints.
//!
//! Wraps `reqwest` with API key management, URL construction, and typed
//! envelope deserialization. Provider statuses are returned to the caller
//! untouched; only transport and parse failures become [`PlacesError`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::api::{NearbyQuery, PlacesApi};
use crate::error::PlacesError;
use crate::types::{DetailResponse, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Field mask sent with every details request.
pub const DETAIL_FIELDS: [&str; 15] = [
    "name",
    "formatted_address",
    "rating",
    "user_ratings_total",
    "price_level",
    "formatted_phone_number",
    "website",
    "opening_hours/weekday_text",
    "type",
    "wheelchair_accessible_entrance",
    "serves_vegetarian_food",
    "delivery",
    "dine_in",
    "takeout",
    "geometry/location",
];

/// Client for the Places API.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    search_url: Url,
    details_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends rather than replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(invalid("URL cannot be used as a base".to_owned()));
        }
        let search_url = base
            .join("nearbysearch/json")
            .map_err(|e| invalid(e.to_string()))?;
        let details_url = base
            .join("details/json")
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            search_url,
            details_url,
        })
    }

    /// Builds a request URL with the API key and percent-encoded parameters.
    fn build_url(&self, endpoint: &Url, extra: &[(&str, &str)]) -> Url {
        let mut url = endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    fn search_request_url(&self, query: &NearbyQuery<'_>) -> Url {
        let location = format!("{},{}", query.latitude, query.longitude);
        let radius = query.radius_m.to_string();
        let mut params = vec![
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("type", query.category),
        ];
        if let Some(token) = query.page_token {
            params.push(("pagetoken", token));
        }
        self.build_url(&self.search_url, &params)
    }

    fn details_request_url(&self, place_id: &str) -> Url {
        let fields = DETAIL_FIELDS.join(",");
        self.build_url(
            &self.details_url,
            &[("place_id", place_id), ("fields", &fields)],
        )
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body.
    ///
    /// `context` names the request in deserialization errors; the URL is not
    /// used because it carries the API key.
    async fn request_json<T>(&self, url: Url, context: String) -> Result<T, PlacesError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize { context, source: e })
    }
}

impl PlacesApi for PlacesClient {
    async fn nearby_search(&self, query: &NearbyQuery<'_>) -> Result<SearchResponse, PlacesError> {
        let url = self.search_request_url(query);
        let context = format!(
            "nearbysearch(type={}, location={},{})",
            query.category, query.latitude, query.longitude
        );
        self.request_json(url, context).await
    }

    async fn place_details(&self, place_id: &str) -> Result<DetailResponse, PlacesError> {
        let url = self.details_request_url(place_id);
        self.request_json(url, format!("details(place_id={place_id})"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> PlacesClient {
        PlacesClient::with_base_url("test-key", 30, "poidb-test", base_url)
            .expect("client construction should not fail")
    }

    fn downtown(page_token: Option<&str>) -> NearbyQuery<'_> {
        NearbyQuery {
            latitude: 40.4406,
            longitude: -79.9959,
            radius_m: 2000,
            category: "restaurant",
            page_token,
        }
    }

    #[test]
    fn search_url_without_token() {
        let client = test_client("https://maps.example.com/api/place");
        let url = client.search_request_url(&downtown(None));
        assert_eq!(
            url.as_str(),
            "https://maps.example.com/api/place/nearbysearch/json?key=test-key&location=40.4406%2C-79.9959&radius=2000&type=restaurant"
        );
    }

    #[test]
    fn search_url_with_token() {
        let client = test_client("https://maps.example.com/api/place/");
        let url = client.search_request_url(&downtown(Some("NEXT")));
        assert!(
            url.as_str().ends_with("&type=restaurant&pagetoken=NEXT"),
            "unexpected url: {url}"
        );
    }

    #[test]
    fn details_url_requests_fixed_field_mask() {
        let client = test_client("https://maps.example.com/api/place");
        let url = client.details_request_url("ChIJ123");
        assert!(url
            .as_str()
            .starts_with("https://maps.example.com/api/place/details/json?key=test-key&place_id=ChIJ123&fields="));
        let fields = url
            .query_pairs()
            .find(|(k, _)| k == "fields")
            .map(|(_, v)| v.into_owned())
            .expect("fields param");
        assert_eq!(fields.split(',').count(), DETAIL_FIELDS.len());
        assert!(fields.contains("opening_hours/weekday_text"));
        assert!(fields.contains("geometry/location"));
    }

    #[test]
    fn place_id_is_percent_encoded() {
        let client = test_client("https://maps.example.com");
        let url = client.details_request_url("a&b=c");
        assert!(url.as_str().contains("place_id=a%26b%3Dc"), "{url}");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = PlacesClient::with_base_url("k", 30, "ua", "not a url");
        assert!(
            matches!(result, Err(PlacesError::InvalidBaseUrl { .. })),
            "expected InvalidBaseUrl"
        );
    }
}
