//! In-memory itinerary storage.
//!
//! An itinerary and its segments are one aggregate: segments have no
//! identity of their own and are stored, loaded, and (eventually)
//! deleted together with their parent. The store hands out cloneable
//! handles over a single shared map, so concurrent handlers need no
//! further coordination.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::OrderedSegment;

/// A stored itinerary: optional name plus its ordered segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    /// Store-assigned identifier, 1-based and monotonically increasing.
    pub id: u64,

    /// Optional display name.
    pub name: Option<String>,

    /// The ordered segments, positions already assigned.
    pub tickets: Vec<OrderedSegment>,

    /// When the itinerary was created.
    pub created_at: DateTime<Utc>,

    /// When the itinerary was last written.
    pub updated_at: DateTime<Utc>,
}

/// Thread-safe handle to the itinerary store.
#[derive(Clone, Default)]
pub struct ItineraryStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    itineraries: BTreeMap<u64, Itinerary>,
}

impl ItineraryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist an ordered itinerary as one unit, assigning its id and
    /// timestamps, and return the stored aggregate.
    pub async fn create(&self, name: Option<String>, tickets: Vec<OrderedSegment>) -> Itinerary {
        let mut guard = self.inner.write().await;
        guard.next_id += 1;

        let now = Utc::now();
        let itinerary = Itinerary {
            id: guard.next_id,
            name,
            tickets,
            created_at: now,
            updated_at: now,
        };
        guard.itineraries.insert(itinerary.id, itinerary.clone());

        itinerary
    }

    /// Fetch an itinerary by id.
    pub async fn get(&self, id: u64) -> Option<Itinerary> {
        let guard = self.inner.read().await;
        guard.itineraries.get(&id).cloned()
    }

    /// All itineraries, ordered by id ascending.
    pub async fn list(&self) -> Vec<Itinerary> {
        let guard = self.inner.read().await;
        guard.itineraries.values().cloned().collect()
    }

    /// Number of stored itineraries.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.itineraries.len()
    }

    /// Whether the store holds no itineraries.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.itineraries.is_empty()
    }
}
