use serde::Serialize;

use super::segment::{Location, Segment};

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum GapType {
    #[serde(rename = "local_transfer")]
    LocalTransfer,
    #[serde(rename = "domestic_gap")]
    DomesticGap,
    #[serde(rename = "international_gap")]
    InternationalGap,
    #[serde(rename = "overnight_gap")]
    OvernightGap,
}

/// What kind of segment would plausibly close the gap. `None` marks gaps
/// that are intentionally left unfilled.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum SuggestedFill {
    #[serde(rename = "transfer")]
    Transfer,
    #[serde(rename = "flight")]
    Flight,
    #[serde(rename = "none")]
    None,
}

/// A detected discontinuity between two chronologically adjacent segments.
///
/// Ephemeral: recomputed on demand from the current sequence, never
/// persisted. `after_index` is always `before_index + 1`.
#[derive(Debug, Serialize, Clone)]
pub struct Gap {
    pub before_index: usize,
    pub after_index: usize,
    pub before: Segment,
    pub after: Segment,
    pub end_location: Location,
    pub start_location: Location,
    /// Slack between the effective end of `before` and the start of
    /// `after`. May be zero or negative.
    pub time_gap_hours: f64,
    pub gap_type: GapType,
    pub description: String,
    pub suggested: SuggestedFill,
}
