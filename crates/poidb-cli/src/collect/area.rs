//! Per-area orchestration: categories in order, pages in order, detail
//! fetches fanned out one sub-batch at a time.

use futures::future::join_all;
use poidb_core::Area;
use poidb_places::{
    fetch_place_detail, CategorySearch, DetailOutcome, Pacer, PlaceDetail, PlacesApi,
};
use tokio::sync::Semaphore;

/// Everything one area search needs, borrowed for the length of the run.
pub(crate) struct Collector<'a, A: ?Sized> {
    pub api: &'a A,
    /// Shared by every detail fetch in the run, whatever area or category
    /// issued it.
    pub gate: &'a Semaphore,
    pub pacer: &'a Pacer,
    pub categories: &'a [String],
    pub radius_m: u32,
    pub batch_size: usize,
}

impl<A: PlacesApi + ?Sized> Collector<'_, A> {
    /// Searches every category for `area` and returns the places found, in
    /// discovery order. Places found under several categories appear once
    /// per category; deduplication is the driver's job.
    pub(crate) async fn collect_area(&self, area: &Area) -> Vec<PlaceDetail> {
        tracing::info!(area = %area.name, "searching area");

        let mut found = Vec::new();
        for category in self.categories {
            let places = self.collect_category(area, category).await;
            tracing::info!(
                area = %area.name,
                category = %category,
                found = places.len(),
                "category complete"
            );
            found.extend(places);
            self.pacer.after_category().await;
        }
        found
    }

    async fn collect_category(&self, area: &Area, category: &str) -> Vec<PlaceDetail> {
        tracing::info!(area = %area.name, category, "searching category");

        let mut search = CategorySearch::new(
            self.api,
            self.pacer,
            &area.name,
            area.latitude,
            area.longitude,
            self.radius_m,
            category,
        );

        let mut found = Vec::new();
        while let Some(page) = search.next_page().await {
            // Sub-batches are independent of page boundaries and never overlap.
            for batch in page.chunks(self.batch_size.max(1)) {
                let fetches = batch
                    .iter()
                    .filter_map(|summary| summary.place_id.as_deref())
                    .map(|place_id| fetch_place_detail(self.api, self.gate, place_id));
                let outcomes = join_all(fetches).await;
                found.extend(outcomes.into_iter().filter_map(DetailOutcome::into_found));
                self.pacer.after_batch().await;
            }
        }
        found
    }
}
