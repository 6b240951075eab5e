//! Application state for the web layer.

use crate::store::ItineraryStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Itinerary storage.
    pub store: ItineraryStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: ItineraryStore) -> Self {
        Self { store }
    }
}
