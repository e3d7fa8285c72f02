use serde::{Deserialize, Serialize};

use super::segment::CabinClass;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    #[serde(rename = "economy")]
    Economy,
    #[serde(rename = "premium")]
    Premium,
    #[serde(rename = "luxury")]
    Luxury,
}

/// A traveler's implicit preferences, inferred from already-booked segments.
///
/// Recomputed fresh per gap-fill request; never cached across itineraries.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct PreferenceProfile {
    pub cabin_class: CabinClass,
    /// 1-5, from brand-name lookup across hotel segments.
    pub hotel_star_rating: u8,
    pub budget_tier: BudgetTier,
}

impl Default for PreferenceProfile {
    fn default() -> Self {
        Self {
            cabin_class: CabinClass::Economy,
            hotel_star_rating: 3,
            budget_tier: BudgetTier::Economy,
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    #[serde(rename = "high")]
    High,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "low")]
    Low,
}

/// Outcome of duration inference for a single segment.
#[derive(Debug, Serialize, Clone)]
pub struct DurationEstimate {
    pub hours: f64,
    /// High only when the segment already carries a real duration.
    pub confidence: Confidence,
    pub reason: String,
}
