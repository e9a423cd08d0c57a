//! Place Details lookups behind a shared concurrency gate.

use tokio::sync::Semaphore;

use crate::api::PlacesApi;
use crate::error::PlacesError;
use crate::normalize::{normalize_place, PlaceDetail};
use crate::types::ApiStatus;

/// Result of one details lookup.
#[derive(Debug)]
pub enum DetailOutcome {
    Found(Box<PlaceDetail>),
    /// The provider answered `ZERO_RESULTS`.
    NotFound,
    Failed(DetailFailure),
}

#[derive(Debug)]
pub enum DetailFailure {
    /// The provider answered with a status other than `OK` or `ZERO_RESULTS`.
    Rejected {
        status: String,
        message: Option<String>,
    },
    /// Transport, HTTP status, or body parse failure.
    Request(PlacesError),
    /// The concurrency gate was closed before a permit was granted.
    GateClosed,
}

impl DetailOutcome {
    /// Returns the place for `Found`, `None` for every other outcome.
    #[must_use]
    pub fn into_found(self) -> Option<PlaceDetail> {
        match self {
            Self::Found(place) => Some(*place),
            Self::NotFound | Self::Failed(_) => None,
        }
    }
}

/// Fetches and normalizes the details for `place_id`.
///
/// At most `gate`'s permit count of lookups are in flight at once across
/// every caller sharing the same semaphore. Never returns an error: rejected
/// statuses and request failures are logged once and reported as
/// [`DetailOutcome::Failed`]. Nothing is retried.
pub async fn fetch_place_detail<A>(api: &A, gate: &Semaphore, place_id: &str) -> DetailOutcome
where
    A: PlacesApi + ?Sized,
{
    let response = {
        let Ok(_permit) = gate.acquire().await else {
            tracing::error!(place_id, "detail gate closed; skipping place");
            return DetailOutcome::Failed(DetailFailure::GateClosed);
        };
        api.place_details(place_id).await
    };

    let response = match response {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(place_id, error = %e, "failed to fetch place details");
            return DetailOutcome::Failed(DetailFailure::Request(e));
        }
    };

    match response.status {
        ApiStatus::Ok => {
            let raw = response.result.unwrap_or_default();
            DetailOutcome::Found(Box::new(normalize_place(place_id, raw)))
        }
        ApiStatus::ZeroResults => DetailOutcome::NotFound,
        ApiStatus::Other(status) => {
            tracing::error!(
                place_id,
                %status,
                error_message = response.error_message.as_deref().unwrap_or(""),
                "place details rejected by provider"
            );
            DetailOutcome::Failed(DetailFailure::Rejected {
                status,
                message: response.error_message,
            })
        }
    }
}
