//! Chain walk from the resolved start.

use crate::domain::{OrderError, Segment};

use super::index::SegmentIndex;

/// Walk the path from `start`, following each segment's arrival to the
/// next departure, until no outgoing segment remains.
///
/// `total` is the number of submitted segments; appending more than that
/// means some location was revisited (the named location is the current
/// one at the moment the count is exceeded), while stopping short of it
/// means some segments were never reached from the start.
pub fn build_chain<'a>(
    start: &'a str,
    index: &SegmentIndex<'a>,
    total: usize,
) -> Result<Vec<&'a Segment>, OrderError> {
    let mut ordered = Vec::with_capacity(total);
    let mut current = start;

    while let Some(segment) = index.outgoing(current) {
        ordered.push(segment);
        current = segment.to.as_str();

        if ordered.len() > total {
            return Err(OrderError::CycleDetected(current.to_string()));
        }
    }

    if ordered.len() != total {
        return Err(OrderError::IncompleteChain);
    }

    Ok(ordered)
}
