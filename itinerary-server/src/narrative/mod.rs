//! Narrative rendering for ordered itineraries.
//!
//! Pure text generation: given position-tagged segments, produce the
//! numbered, human-readable trip description. Runs on every read of a
//! stored itinerary; never mutates its input.

use crate::domain::{OrderedSegment, Segment, SegmentDetails};

/// Sentinel returned for an itinerary with no segments.
const NO_TICKETS: &str = "No tickets.";

/// Render an itinerary's segments as a numbered narrative.
///
/// The input need not be sorted: segments are re-ordered by position
/// first, with a missing position sorting before every assigned one.
/// Output is `0. Start.`, one line per segment, then
/// `N+1. Last destination reached.`, with the `"No tickets."` sentinel
/// for an empty list.
pub fn render(segments: &[OrderedSegment]) -> String {
    if segments.is_empty() {
        return NO_TICKETS.to_string();
    }

    let mut sorted: Vec<&OrderedSegment> = segments.iter().collect();
    sorted.sort_by_key(|s| s.sort_position());

    let mut lines = Vec::with_capacity(sorted.len() + 2);
    lines.push("0. Start.".to_string());
    for (i, ordered) in sorted.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, describe(&ordered.segment)));
    }
    lines.push(format!("{}. Last destination reached.", sorted.len() + 1));

    lines.join("\n")
}

/// One narrative line for a segment: the transport clause followed by
/// the extras clause, with no separator between them.
fn describe(segment: &Segment) -> String {
    let no_details = SegmentDetails::default();
    let details = segment.details.as_ref().unwrap_or(&no_details);

    let destination = destination_with_extra(&segment.to, present(&details.to_extra));
    let transport = transport_clause(details, &segment.from, &destination);
    let extras = extras_clause(details);

    format!("{transport}{extras}")
}

/// A detail field counts as present only when non-empty, so a blank
/// string in the payload reads the same as an omitted field.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn destination_with_extra(to: &str, to_extra: Option<&str>) -> String {
    match to_extra {
        Some(extra) => format!("{to} ({extra})"),
        None => to.to_string(),
    }
}

/// `Board {transport}{ - code}{, Platform P - Gate G} from {from} to
/// {destination}.` when a transport is given, otherwise the generic
/// `From {from}, board the transport to {destination}.` fallback.
fn transport_clause(details: &SegmentDetails, from: &str, destination: &str) -> String {
    let Some(transport) = &details.transport else {
        return format!("From {from}, board the transport to {destination}.");
    };

    let mut line = format!("Board {transport}");
    if let Some(code) = present(&details.code) {
        line.push_str(&format!(" - {code}"));
    }

    let platform_and_gate: Vec<String> = [
        present(&details.platform).map(|p| format!("Platform {p}")),
        present(&details.gate).map(|g| format!("Gate {g}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !platform_and_gate.is_empty() {
        line.push_str(&format!(", {}", platform_and_gate.join(" - ")));
    }

    line.push_str(&format!(" from {from} to {destination}."));
    line
}

/// Space-prefixed, comma-joined list of seat, origin extra, and free
/// `others` text; the empty string when none are present.
fn extras_clause(details: &SegmentDetails) -> String {
    let extras: Vec<String> = [
        present(&details.seat).map(|s| format!("Seat number {s}")),
        present(&details.extra).map(str::to_string),
        present(&details.others).map(str::to_string),
    ]
    .into_iter()
    .flatten()
    .collect();

    if extras.is_empty() {
        String::new()
    } else {
        format!(" {}", extras.join(", "))
    }
}
