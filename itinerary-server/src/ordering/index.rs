//! Segment validation and lookup structures.

use std::collections::{HashMap, HashSet};

use crate::domain::{OrderError, Segment};

/// Lookup structures over a validated segment list.
///
/// Built once per ordering attempt: an origin → segment map (origins are
/// unique by construction) and the set of every arrival location. Borrows
/// the input list rather than copying it.
#[derive(Debug)]
pub struct SegmentIndex<'a> {
    by_origin: HashMap<&'a str, &'a Segment>,
    arrivals: HashSet<&'a str>,
}

impl<'a> SegmentIndex<'a> {
    /// Validate the raw segment list and build the lookup structures.
    ///
    /// Rejects an empty list, and rejects a repeated `from` the first
    /// time it is seen: a location cannot depart twice in a simple path,
    /// so this is the only check needed to cap out-degree at one.
    pub fn build(segments: &'a [Segment]) -> Result<Self, OrderError> {
        if segments.is_empty() {
            return Err(OrderError::EmptyInput);
        }

        let mut by_origin = HashMap::with_capacity(segments.len());
        let mut arrivals = HashSet::with_capacity(segments.len());

        for segment in segments {
            if by_origin.contains_key(segment.from.as_str()) {
                return Err(OrderError::DuplicateOrigin(segment.from.clone()));
            }
            by_origin.insert(segment.from.as_str(), segment);
            arrivals.insert(segment.to.as_str());
        }

        Ok(Self { by_origin, arrivals })
    }

    /// Find the itinerary's origin: the first segment, in submission
    /// order, whose `from` is never an arrival.
    ///
    /// Scanning in submission order makes the choice deterministic when
    /// more than one candidate exists (the first-declared one wins); for
    /// data that truly forms one simple path the candidate is unique.
    pub fn resolve_start(&self, segments: &'a [Segment]) -> Result<&'a str, OrderError> {
        segments
            .iter()
            .find(|s| !self.arrivals.contains(s.from.as_str()))
            .map(|s| s.from.as_str())
            .ok_or(OrderError::NoStartPoint)
    }

    /// The segment departing from `location`, if any.
    pub fn outgoing(&self, location: &str) -> Option<&'a Segment> {
        self.by_origin.get(location).copied()
    }

    /// Whether `location` is some segment's arrival.
    pub fn is_arrival(&self, location: &str) -> bool {
        self.arrivals.contains(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_indexes_origins_and_arrivals() {
        let segments = vec![Segment::new("A", "B"), Segment::new("B", "C")];
        let index = SegmentIndex::build(&segments).unwrap();

        assert_eq!(index.outgoing("A"), Some(&segments[0]));
        assert_eq!(index.outgoing("B"), Some(&segments[1]));
        assert_eq!(index.outgoing("C"), None);

        assert!(index.is_arrival("B"));
        assert!(index.is_arrival("C"));
        assert!(!index.is_arrival("A"));
    }

    #[test]
    fn build_rejects_empty_input() {
        assert_eq!(SegmentIndex::build(&[]).unwrap_err(), OrderError::EmptyInput);
    }

    #[test]
    fn build_rejects_duplicate_origin_naming_it() {
        let segments = vec![Segment::new("A", "B"), Segment::new("A", "C")];
        assert_eq!(
            SegmentIndex::build(&segments).unwrap_err(),
            OrderError::DuplicateOrigin("A".to_string())
        );
    }

    #[test]
    fn resolve_start_finds_dangling_origin() {
        let segments = vec![Segment::new("B", "C"), Segment::new("A", "B")];
        let index = SegmentIndex::build(&segments).unwrap();
        assert_eq!(index.resolve_start(&segments).unwrap(), "A");
    }

    #[test]
    fn resolve_start_prefers_first_declared_candidate() {
        // Two disjoint fragments, two valid starts: submission order decides.
        let segments = vec![Segment::new("C", "D"), Segment::new("A", "B")];
        let index = SegmentIndex::build(&segments).unwrap();
        assert_eq!(index.resolve_start(&segments).unwrap(), "C");

        let swapped = vec![Segment::new("A", "B"), Segment::new("C", "D")];
        let index = SegmentIndex::build(&swapped).unwrap();
        assert_eq!(index.resolve_start(&swapped).unwrap(), "A");
    }

    #[test]
    fn resolve_start_fails_for_closed_loop() {
        let segments = vec![Segment::new("A", "B"), Segment::new("B", "A")];
        let index = SegmentIndex::build(&segments).unwrap();
        assert_eq!(
            index.resolve_start(&segments).unwrap_err(),
            OrderError::NoStartPoint
        );
    }
}
