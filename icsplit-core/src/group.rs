//! Year classification.

use std::collections::BTreeMap;

use crate::error::{SplitError, SplitResult};
use crate::event::Event;

/// Assign every event to the bucket of its start year.
///
/// Pure classification, no size logic. Buckets keep input order; the map
/// iterates years in ascending order. An event with no usable start field
/// fails the whole run instead of being dropped.
pub fn group_by_year(events: Vec<Event>) -> SplitResult<BTreeMap<i32, Vec<Event>>> {
    let mut buckets: BTreeMap<i32, Vec<Event>> = BTreeMap::new();

    for event in events {
        let Some(year) = event.year() else {
            return Err(SplitError::MalformedEvent(event.label()));
        };
        buckets.entry(year).or_default().push(event);
    }

    Ok(buckets)
}
