//! Ordered segments within an itinerary.

use serde::{Deserialize, Serialize};

use super::Segment;

/// A segment with its assigned place in travel order.
///
/// Positions are 1-based and contiguous once assigned by the ordering
/// pipeline. The field stays optional because readers (the narrative
/// formatter in particular) must tolerate stored segments that never
/// received one; a missing position sorts first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedSegment {
    /// The underlying travel segment.
    #[serde(flatten)]
    pub segment: Segment,

    /// 1-based place in travel order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl OrderedSegment {
    /// Wrap a segment with a known position.
    pub fn new(segment: Segment, position: u32) -> Self {
        Self {
            segment,
            position: Some(position),
        }
    }

    /// Sort key used when re-ordering for display: a missing position
    /// sorts before every assigned one.
    pub fn sort_position(&self) -> u32 {
        self.position.unwrap_or(0)
    }
}
