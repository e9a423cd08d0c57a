//! Fixed-interval pacing between provider requests.
//!
//! The Places API throttles bursts and rejects continuation tokens that are
//! used too soon after they are issued. [`Pacer`] owns every deliberate pause
//! in a run so the search and fetch code stays free of sleeps, and tests can
//! run with [`Pacer::disabled`].

use std::time::Duration;

/// Delay schedule applied between provider requests.
///
/// | Pause | Default | When |
/// |-------|---------|------|
/// | batch | 1 s | after each sub-batch of detail fetches |
/// | page token | 2 s | before a request that uses a continuation token |
/// | category | 1 s | after each category search of an area |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    batch_delay: Duration,
    page_token_delay: Duration,
    category_delay: Duration,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(1),
            Duration::from_secs(2),
            Duration::from_secs(1),
        )
    }
}

impl Pacer {
    #[must_use]
    pub const fn new(
        batch_delay: Duration,
        page_token_delay: Duration,
        category_delay: Duration,
    ) -> Self {
        Self {
            batch_delay,
            page_token_delay,
            category_delay,
        }
    }

    /// A pacer that never sleeps.
    #[must_use]
    pub const fn disabled() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }

    #[must_use]
    pub const fn batch_delay(&self) -> Duration {
        self.batch_delay
    }

    #[must_use]
    pub const fn page_token_delay(&self) -> Duration {
        self.page_token_delay
    }

    #[must_use]
    pub const fn category_delay(&self) -> Duration {
        self.category_delay
    }

    pub async fn after_batch(&self) {
        pause(self.batch_delay).await;
    }

    /// Waits until a freshly issued continuation token becomes valid.
    pub async fn before_page_token(&self) {
        pause(self.page_token_delay).await;
    }

    pub async fn after_category(&self) {
        pause(self.category_delay).await;
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn default_schedule_matches_provider_guidance() {
        let pacer = Pacer::default();
        assert_eq!(pacer.batch_delay(), Duration::from_secs(1));
        assert_eq!(pacer.page_token_delay(), Duration::from_secs(2));
        assert_eq!(pacer.category_delay(), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn disabled_pacer_returns_immediately() {
        let pacer = Pacer::disabled();
        let started = Instant::now();
        pacer.after_batch().await;
        pacer.before_page_token().await;
        pacer.after_category().await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn each_pause_waits_its_own_interval() {
        let pacer = Pacer::new(
            Duration::from_millis(20),
            Duration::from_millis(40),
            Duration::ZERO,
        );

        let started = Instant::now();
        pacer.before_page_token().await;
        assert!(started.elapsed() >= Duration::from_millis(40));

        let started = Instant::now();
        pacer.after_batch().await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
