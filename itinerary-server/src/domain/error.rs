//! Ordering error types.
//!
//! Every variant rejects the whole creation attempt; there is no partial
//! recovery. Messages carry the offending location where one exists, and
//! are surfaced verbatim to the caller.

/// Reasons a set of segments cannot be ordered into a single path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// Zero segments were submitted.
    #[error("tickets are required")]
    EmptyInput,

    /// Two segments depart from the same location (out-degree > 1).
    #[error("duplicate 'from' detected: {0} (expects unique from)")]
    DuplicateOrigin(String),

    /// Every departure location is also an arrival, so no origin exists.
    /// This is also what a fully closed loop looks like.
    #[error("could not determine start of itinerary")]
    NoStartPoint,

    /// The walk revisited a location before covering every segment.
    #[error(
        "itinerary contains a cycle: the route loops back at '{0}' and never reaches a final destination"
    )]
    CycleDetected(String),

    /// The walk ended before covering every segment; some are unreachable
    /// from the start.
    #[error("incomplete itinerary: some tickets are not sequentially connected")]
    IncompleteChain,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(OrderError::EmptyInput.to_string(), "tickets are required");

        assert_eq!(
            OrderError::DuplicateOrigin("Innsbruck Hbf".to_string()).to_string(),
            "duplicate 'from' detected: Innsbruck Hbf (expects unique from)"
        );

        assert_eq!(
            OrderError::NoStartPoint.to_string(),
            "could not determine start of itinerary"
        );

        assert_eq!(
            OrderError::CycleDetected("Venice".to_string()).to_string(),
            "itinerary contains a cycle: the route loops back at 'Venice' and never reaches a final destination"
        );

        assert_eq!(
            OrderError::IncompleteChain.to_string(),
            "incomplete itinerary: some tickets are not sequentially connected"
        );
    }
}
