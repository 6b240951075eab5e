//! Segment ordering pipeline.
//!
//! Reconstructs travel order from an unordered bag of segments: validate
//! and index the list, resolve the unique origin (a departure that is
//! never an arrival), then walk the chain to the final destination. The
//! result is the same segments tagged with positions `1..=N`.
//!
//! Every stage is pure and runs in O(N); ordering happens once, when an
//! itinerary is created, and the assigned order is immutable thereafter.

mod chain;
mod index;

pub use chain::build_chain;
pub use index::SegmentIndex;

use crate::domain::{OrderError, OrderedSegment, Segment};

/// Order a raw segment list into a single simple path.
///
/// On success the output has exactly the input's length, with positions
/// assigned contiguously from 1 in travel order. Any branching, cycle,
/// or disconnected fragment is rejected with the matching [`OrderError`].
pub fn order(segments: &[Segment]) -> Result<Vec<OrderedSegment>, OrderError> {
    let index = SegmentIndex::build(segments)?;
    let start = index.resolve_start(segments)?;
    let chain = build_chain(start, &index, segments.len())?;

    Ok(chain
        .into_iter()
        .enumerate()
        .map(|(i, segment)| OrderedSegment::new(segment.clone(), i as u32 + 1))
        .collect())
}
