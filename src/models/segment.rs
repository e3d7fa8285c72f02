use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a segment came from. Only agent-sourced segments are ever
/// synthesized or removed by this engine.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum SegmentSource {
    #[serde(rename = "import")]
    Import,
    #[serde(rename = "user")]
    User,
    #[serde(rename = "agent")]
    Agent,
}

/// Flight cabin classes, ordered so that comparisons favor the higher class.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CabinClass {
    #[serde(rename = "economy")]
    Economy,
    #[serde(rename = "premium_economy")]
    PremiumEconomy,
    #[serde(rename = "business")]
    Business,
    #[serde(rename = "first")]
    First,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum TransferType {
    #[serde(rename = "private")]
    Private,
    #[serde(rename = "rideshare")]
    Rideshare,
    #[serde(rename = "taxi")]
    Taxi,
    #[serde(rename = "shuttle")]
    Shuttle,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Location {
    pub name: String,
    /// 3-letter airport-style code, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
}

impl Location {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// A location with no code, no city and no coordinates cannot anchor a
    /// gap decision.
    pub fn is_resolvable(&self) -> bool {
        self.code.is_some() || self.city.is_some() || self.coordinates.is_some()
    }
}

/// Kind-specific payload of a segment.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "type")]
pub enum SegmentDetails {
    #[serde(rename = "flight")]
    Flight {
        origin: Location,
        destination: Location,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        airline: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        flight_number: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cabin_class: Option<CabinClass>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        price: Option<f64>,
    },

    #[serde(rename = "hotel")]
    Hotel {
        location: Location,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        star_class: Option<u8>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nightly_rate: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        price: Option<f64>,
    },

    #[serde(rename = "meeting")]
    Meeting { location: Location },

    #[serde(rename = "activity")]
    Activity { location: Location },

    #[serde(rename = "transfer")]
    Transfer {
        pickup: Location,
        dropoff: Location,
        transfer_type: TransferType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        price: Option<f64>,
    },

    #[serde(rename = "custom")]
    Custom {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        location: Option<Location>,
    },
}

/// One bookable unit of a trip.
///
/// `end_datetime == start_datetime` means "unspecified duration"; the
/// duration inference engine resolves an effective end time for those.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Segment {
    pub id: Uuid,
    pub name: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub source: SegmentSource,
    #[serde(default)]
    pub inferred: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inferred_reason: Option<String>,
    #[serde(flatten)]
    pub details: SegmentDetails,
}

impl Segment {
    pub fn is_flight(&self) -> bool {
        matches!(self.details, SegmentDetails::Flight { .. })
    }

    pub fn is_hotel(&self) -> bool {
        matches!(self.details, SegmentDetails::Hotel { .. })
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self.details, SegmentDetails::Transfer { .. })
    }

    /// Transfer-like segments already represent transportation between two
    /// places.
    pub fn is_transportation(&self) -> bool {
        matches!(
            self.details,
            SegmentDetails::Transfer { .. } | SegmentDetails::Flight { .. }
        )
    }
}
