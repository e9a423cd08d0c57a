//! Top-level driver: areas strictly one at a time, merged into one aggregate.

use poidb_core::Area;
use poidb_places::PlacesApi;

use super::aggregate::PlaceAggregate;
use super::area::Collector;

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSummary {
    pub areas: usize,
    /// Detail records found, before deduplication.
    pub fetched: usize,
    pub unique: usize,
    pub duplicates: usize,
}

/// Collects every area in order and merges the results. Areas never overlap
/// in time, so the aggregate is only touched here between areas.
pub(crate) async fn run_collection<A>(
    collector: &Collector<'_, A>,
    areas: &[Area],
) -> (PlaceAggregate, RunSummary)
where
    A: PlacesApi + ?Sized,
{
    let mut aggregate = PlaceAggregate::default();
    let mut summary = RunSummary::default();

    for area in areas {
        let places = collector.collect_area(area).await;
        let fetched = places.len();
        let added = aggregate.merge(places);

        summary.areas += 1;
        summary.fetched += fetched;
        summary.duplicates += fetched - added;

        tracing::info!(
            area = %area.name,
            fetched,
            added,
            total = aggregate.len(),
            "area complete"
        );
    }

    summary.unique = aggregate.len();
    (aggregate, summary)
}
