//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{OrderedSegment, Segment, SegmentDetails};
use crate::narrative;
use crate::store::Itinerary;

/// Request to create an itinerary from unordered tickets.
#[derive(Debug, Deserialize)]
pub struct CreateItineraryRequest {
    /// Optional display name, e.g. "Trip to Electica".
    pub name: Option<String>,

    /// The unordered segments; ordering is reconstructed server-side.
    #[serde(default)]
    pub tickets: Vec<CreateTicketRequest>,
}

/// One submitted ticket.
#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    /// Departure location.
    pub from: String,

    /// Arrival location.
    pub to: String,

    /// Optional transport metadata.
    #[serde(default)]
    pub details: Option<SegmentDetails>,
}

impl CreateTicketRequest {
    /// Convert into the domain segment.
    pub fn into_segment(self) -> Segment {
        Segment {
            from: self.from,
            to: self.to,
            details: self.details,
        }
    }
}

/// A stored ticket in responses.
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    /// Departure location.
    pub from: String,

    /// Arrival location.
    pub to: String,

    /// Transport metadata, if any was submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<SegmentDetails>,

    /// 1-based place in travel order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl TicketResponse {
    /// Build from a stored ordered segment.
    pub fn from_ordered(ordered: &OrderedSegment) -> Self {
        Self {
            from: ordered.segment.from.clone(),
            to: ordered.segment.to.clone(),
            details: ordered.segment.details.clone(),
            position: ordered.position,
        }
    }
}

/// A stored itinerary in responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryResponse {
    /// Store-assigned identifier.
    pub id: u64,

    /// Optional display name.
    pub name: Option<String>,

    /// Tickets in travel order.
    pub tickets: Vec<TicketResponse>,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last-write timestamp.
    pub updated_at: DateTime<Utc>,

    /// Derived, non-persisted narrative; attached on reads only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human_readable: Option<String>,
}

impl ItineraryResponse {
    /// Build from a stored itinerary without the narrative (create path).
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id,
            name: itinerary.name.clone(),
            tickets: itinerary.tickets.iter().map(TicketResponse::from_ordered).collect(),
            created_at: itinerary.created_at,
            updated_at: itinerary.updated_at,
            human_readable: None,
        }
    }

    /// Build from a stored itinerary, rendering the narrative (read paths).
    pub fn with_narrative(itinerary: &Itinerary) -> Self {
        let mut response = Self::from_itinerary(itinerary);
        response.human_readable = Some(narrative::render(&itinerary.tickets));
        response
    }
}

/// Error payload returned with non-2xx statuses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}
