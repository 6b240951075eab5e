//! Itinerary ordering and narrative server.
//!
//! Accepts an unordered collection of travel tickets, reconstructs the
//! single simple path they form, stores the result, and renders it as a
//! numbered human-readable narrative.

pub mod domain;
pub mod narrative;
pub mod ordering;
pub mod store;
pub mod web;
