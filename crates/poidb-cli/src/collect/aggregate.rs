use std::collections::HashSet;

use poidb_places::PlaceDetail;

/// Run-wide place collection keyed by `place_id`.
///
/// Insertion order is output order. The first record seen for an identifier
/// is kept; later ones are discarded.
#[derive(Debug, Default)]
pub(crate) struct PlaceAggregate {
    seen: HashSet<String>,
    places: Vec<PlaceDetail>,
}

impl PlaceAggregate {
    /// Appends the records whose `place_id` has not been seen yet and
    /// returns how many were added.
    pub(crate) fn merge<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = PlaceDetail>,
    {
        let mut added = 0;
        for place in records {
            if self.seen.insert(place.place_id.clone()) {
                self.places.push(place);
                added += 1;
            }
        }
        added
    }

    pub(crate) fn len(&self) -> usize {
        self.places.len()
    }

    pub(crate) fn places(&self) -> &[PlaceDetail] {
        &self.places
    }
}
