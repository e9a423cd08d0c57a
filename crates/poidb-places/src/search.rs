//! Paginated Nearby Search for one area and one category.

use crate::api::{NearbyQuery, PlacesApi};
use crate::pacing::Pacer;
use crate::types::{ApiStatus, PlaceSummary};

/// Maximum number of pages requested for one category.
///
/// The provider serves at most three pages per query; the guard only trips
/// on a token that keeps cycling.
pub const MAX_PAGES: usize = 10;

#[derive(Debug)]
enum Cursor {
    Start,
    Next(String),
    Done,
}

/// A lazy, finite sequence of search result pages.
///
/// Each call to [`CategorySearch::next_page`] issues at most one request.
/// The sequence ends on the last page, on `ZERO_RESULTS`, on any other
/// provider status, or on a transport/parse failure. Failures are logged and
/// end the sequence; pages already returned stay valid. Once finished the
/// search cannot be restarted.
pub struct CategorySearch<'a, A: ?Sized> {
    api: &'a A,
    pacer: &'a Pacer,
    area: &'a str,
    latitude: f64,
    longitude: f64,
    radius_m: u32,
    category: &'a str,
    cursor: Cursor,
    pages: usize,
}

impl<'a, A: PlacesApi + ?Sized> CategorySearch<'a, A> {
    /// `area` is only used to label log lines.
    #[must_use]
    pub fn new(
        api: &'a A,
        pacer: &'a Pacer,
        area: &'a str,
        latitude: f64,
        longitude: f64,
        radius_m: u32,
        category: &'a str,
    ) -> Self {
        Self {
            api,
            pacer,
            area,
            latitude,
            longitude,
            radius_m,
            category,
            cursor: Cursor::Start,
            pages: 0,
        }
    }

    /// Number of search requests issued so far.
    #[must_use]
    pub fn pages_requested(&self) -> usize {
        self.pages
    }

    /// Fetches the next page of summaries that carry a place identifier.
    ///
    /// Returns `None` once the sequence has ended. A page may be empty.
    pub async fn next_page(&mut self) -> Option<Vec<PlaceSummary>> {
        let token = match std::mem::replace(&mut self.cursor, Cursor::Done) {
            Cursor::Done => return None,
            Cursor::Start => None,
            Cursor::Next(token) => {
                if self.pages >= MAX_PAGES {
                    tracing::warn!(
                        area = self.area,
                        category = self.category,
                        max_pages = MAX_PAGES,
                        "pagination limit reached; ignoring further continuation tokens"
                    );
                    return None;
                }
                self.pacer.before_page_token().await;
                Some(token)
            }
        };
        self.pages += 1;

        let query = NearbyQuery {
            latitude: self.latitude,
            longitude: self.longitude,
            radius_m: self.radius_m,
            category: self.category,
            page_token: token.as_deref(),
        };

        let response = match self.api.nearby_search(&query).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    area = self.area,
                    category = self.category,
                    page = self.pages,
                    error = %e,
                    "nearby search failed"
                );
                return None;
            }
        };

        match response.status {
            ApiStatus::Ok => {}
            ApiStatus::ZeroResults => {
                tracing::debug!(
                    area = self.area,
                    category = self.category,
                    page = self.pages,
                    "nearby search returned no results"
                );
                return None;
            }
            ApiStatus::Other(status) => {
                tracing::error!(
                    area = self.area,
                    category = self.category,
                    page = self.pages,
                    %status,
                    error_message = response.error_message.as_deref().unwrap_or(""),
                    "nearby search rejected by provider"
                );
                return None;
            }
        }

        if let Some(next) = response.next_page_token.filter(|t| !t.is_empty()) {
            self.cursor = Cursor::Next(next);
        }

        let page = response
            .results
            .into_iter()
            .filter(|summary| {
                if summary.place_id.is_some() {
                    true
                } else {
                    tracing::warn!(
                        area = self.area,
                        category = self.category,
                        name = summary.name.as_deref().unwrap_or(""),
                        "skipping search result without place_id"
                    );
                    false
                }
            })
            .collect();

        Some(page)
    }
}
