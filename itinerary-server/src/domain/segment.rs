//! Travel segment types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Mode of transport for a segment.
///
/// Known modes parse case-insensitively from their lowercase wire form;
/// anything else is preserved verbatim through the `Other` escape hatch,
/// so callers sending unrecognized modes still see them rendered exactly
/// as submitted.
///
/// # Examples
///
/// ```
/// use itinerary_server::domain::TransportMode;
///
/// assert_eq!(TransportMode::from("train"), TransportMode::Train);
/// assert_eq!(TransportMode::from("Train"), TransportMode::Train);
/// assert_eq!(
///     TransportMode::from("zeppelin"),
///     TransportMode::Other("zeppelin".to_string()),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Train,
    Bus,
    Flight,
    Ship,
    Car,
    Taxi,
    Tram,
    Bike,
    Walk,
    /// Any mode outside the known set, kept as submitted.
    Other(String),
}

impl From<String> for TransportMode {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "train" => Self::Train,
            "bus" => Self::Bus,
            "flight" => Self::Flight,
            "ship" => Self::Ship,
            "car" => Self::Car,
            "taxi" => Self::Taxi,
            "tram" => Self::Tram,
            "bike" => Self::Bike,
            "walk" => Self::Walk,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for TransportMode {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Flight => "flight",
            Self::Ship => "ship",
            Self::Car => "car",
            Self::Taxi => "taxi",
            Self::Tram => "tram",
            Self::Bike => "bike",
            Self::Walk => "walk",
            Self::Other(s) => s.as_str(),
        };
        f.write_str(name)
    }
}

impl Serialize for TransportMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransportMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from(String::deserialize(deserializer)?))
    }
}

/// Optional transport metadata attached to a segment.
///
/// Every field is caller-supplied and optional; `others` is the
/// forward-compatibility slot for free text beyond the named fields.
/// Wire names are camelCase (`toExtra`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDetails {
    /// Mode of transport, e.g. `train` or `flight`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportMode>,

    /// Service code, e.g. `RJX765`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Departure platform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Seat assignment, e.g. `17C`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,

    /// Departure gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,

    /// Free text attached to the origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,

    /// Free text attached to the destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_extra: Option<String>,

    /// Anything beyond the named detail set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub others: Option<String>,
}

/// One leg of travel from one named location to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Departure location.
    pub from: String,

    /// Arrival location.
    pub to: String,

    /// Optional transport metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<SegmentDetails>,
}

impl Segment {
    /// Create a segment with no details.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            details: None,
        }
    }

    /// Attach details to the segment.
    pub fn with_details(mut self, details: SegmentDetails) -> Self {
        self.details = Some(details);
        self
    }
}
