use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone)]
pub struct AppConfig {
    /// Provider credential. Never validated locally: an absent key is sent as
    /// an empty string and surfaces as provider-side rejections.
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    pub log_level: String,
    pub plan_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub search_radius_m: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_details: usize,
    pub detail_batch_size: usize,
    pub batch_delay_ms: u64,
    pub page_token_delay_ms: u64,
    pub category_delay_ms: u64,
}

impl AppConfig {
    #[must_use]
    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    #[must_use]
    pub fn page_token_delay(&self) -> Duration {
        Duration::from_millis(self.page_token_delay_ms)
    }

    #[must_use]
    pub fn category_delay(&self) -> Duration {
        Duration::from_millis(self.category_delay_ms)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("log_level", &self.log_level)
            .field("plan_path", &self.plan_path)
            .field("output_path", &self.output_path)
            .field("search_radius_m", &self.search_radius_m)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_concurrent_details", &self.max_concurrent_details)
            .field("detail_batch_size", &self.detail_batch_size)
            .field("batch_delay_ms", &self.batch_delay_ms)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("category_delay_ms", &self.category_delay_ms)
            .finish()
    }
}
