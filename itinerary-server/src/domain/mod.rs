//! Domain types for the itinerary service.
//!
//! This module contains the core model types for travel segments and
//! their ordering. Locations are opaque strings compared only for exact
//! equality; everything a caller supplies is untrusted until the
//! ordering pipeline has accepted it.

mod error;
mod itinerary;
mod segment;

pub use error::OrderError;
pub use itinerary::OrderedSegment;
pub use segment::{Segment, SegmentDetails, TransportMode};
