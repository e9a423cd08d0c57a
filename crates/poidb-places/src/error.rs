use thiserror::Error;

/// Errors returned by the Places API client.
///
/// Provider-level statuses (`ZERO_RESULTS`, `REQUEST_DENIED`, ...) are not
/// errors at this layer; they arrive inside the parsed response envelope.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network, TLS, timeout, or non-2xx HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected envelope.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
