use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::gap::{Gap, GapType, SuggestedFill};
use crate::models::segment::{Location, Segment};
use crate::services::airports;
use crate::services::duration_inference::DurationInference;
use crate::services::sequencer::{end_location_of, start_location_of};

const EARTH_RADIUS_MILES: f64 = 3959.0;

// Coordinate tolerance for "same place" (roughly a kilometer).
const SAME_PLACE_EPSILON_DEG: f64 = 0.01;
const LOCAL_TRANSFER_MILES: f64 = 50.0;
const LONG_HAUL_MILES: f64 = 300.0;
const OVERNIGHT_HOURS: i64 = 8;

/// Distance and time thresholds for gap classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapRules {
    /// Per-axis coordinate tolerance for two locations to count as the same
    /// place.
    pub same_place_epsilon_deg: f64,
    /// Within this driving distance a gap is a local transfer.
    pub local_transfer_miles: f64,
    /// Beyond this an intra-country gap suggests a flight.
    pub long_haul_miles: f64,
    /// A span longer than this counts as overnight.
    pub overnight_hours: i64,
}

impl Default for GapRules {
    fn default() -> Self {
        Self {
            same_place_epsilon_deg: SAME_PLACE_EPSILON_DEG,
            local_transfer_miles: LOCAL_TRANSFER_MILES,
            long_haul_miles: LONG_HAUL_MILES,
            overnight_hours: OVERNIGHT_HOURS,
        }
    }
}

impl GapRules {
    /// Create rules from environment variables or use defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            same_place_epsilon_deg: std::env::var("GAP_SAME_PLACE_EPSILON_DEG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.same_place_epsilon_deg),
            local_transfer_miles: std::env::var("GAP_LOCAL_TRANSFER_MILES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.local_transfer_miles),
            long_haul_miles: std::env::var("GAP_LONG_HAUL_MILES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.long_haul_miles),
            overnight_hours: std::env::var("GAP_OVERNIGHT_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.overnight_hours),
        }
    }
}

/// Walks an ordered sequence pairwise and produces at most one `Gap` per
/// boundary.
#[derive(Debug, Clone, Default)]
pub struct GapClassifier {
    rules: GapRules,
    duration: DurationInference,
}

impl GapClassifier {
    pub fn new() -> Self {
        Self {
            rules: GapRules::from_env(),
            duration: DurationInference::new(),
        }
    }

    pub fn with_rules(rules: GapRules, duration: DurationInference) -> Self {
        Self { rules, duration }
    }

    /// Detect geographic discontinuities between consecutive segments.
    ///
    /// Expects the input already sorted; boundaries with unresolvable
    /// locations are skipped with a warning rather than reported as gaps.
    pub fn detect_location_gaps(&self, ordered: &[Segment]) -> Vec<Gap> {
        let mut gaps = Vec::new();

        for (i, pair) in ordered.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);

            let end_location = match end_location_of(prev) {
                Some(loc) if loc.is_resolvable() => loc,
                _ => {
                    log::warn!(
                        "Skipping boundary {}-{}: end location of '{}' is unresolvable",
                        i,
                        i + 1,
                        prev.name
                    );
                    continue;
                }
            };
            let start_location = match start_location_of(next) {
                Some(loc) if loc.is_resolvable() => loc,
                _ => {
                    log::warn!(
                        "Skipping boundary {}-{}: start location of '{}' is unresolvable",
                        i,
                        i + 1,
                        next.name
                    );
                    continue;
                }
            };

            let effective_end = self.duration.effective_end_time(prev);
            let time_gap_hours =
                (next.start_datetime - effective_end).num_seconds() as f64 / 3600.0;

            if self.is_same_place(end_location, start_location) {
                continue;
            }

            let (mut gap_type, mut suggested) =
                self.classify_geography(end_location, start_location);

            // A transfer spanning sleep hours is never plausible.
            if self.is_overnight_gap(effective_end, next.start_datetime) {
                gap_type = GapType::OvernightGap;
                suggested = SuggestedFill::None;
            }

            let description = format!(
                "{:?} between '{}' ({}) and '{}' ({}), {:.1}h available",
                gap_type,
                prev.name,
                end_location.name,
                next.name,
                start_location.name,
                time_gap_hours
            );
            log::debug!("Detected gap at boundary {}-{}: {}", i, i + 1, description);

            gaps.push(Gap {
                before_index: i,
                after_index: i + 1,
                before: prev.clone(),
                after: next.clone(),
                end_location: end_location.clone(),
                start_location: start_location.clone(),
                time_gap_hours,
                gap_type,
                description,
                suggested,
            });
        }

        gaps
    }

    /// Two locations denote the same place when their codes match, their
    /// city+country match, or their coordinates are within the epsilon.
    pub fn is_same_place(&self, a: &Location, b: &Location) -> bool {
        if let (Some(ca), Some(cb)) = (&a.code, &b.code) {
            if ca.eq_ignore_ascii_case(cb) {
                return true;
            }
        }

        if let (Some(city_a), Some(city_b), Some(country_a), Some(country_b)) =
            (&a.city, &b.city, &a.country, &b.country)
        {
            if city_a.eq_ignore_ascii_case(city_b) && country_a.eq_ignore_ascii_case(country_b) {
                return true;
            }
        }

        if let (Some((lat_a, lon_a)), Some((lat_b, lon_b))) = (a.coordinates, b.coordinates) {
            if (lat_a - lat_b).abs() < self.rules.same_place_epsilon_deg
                && (lon_a - lon_b).abs() < self.rules.same_place_epsilon_deg
            {
                return true;
            }
        }

        false
    }

    /// A span crossing a calendar day boundary, or exceeding the overnight
    /// threshold, is sleep time rather than travel time. Both datetimes are
    /// UTC; day comparison is done in UTC as well.
    pub fn is_overnight_gap(&self, end: DateTime<Utc>, next_start: DateTime<Utc>) -> bool {
        if next_start > end && next_start.date_naive() != end.date_naive() {
            return true;
        }

        next_start - end > Duration::hours(self.rules.overnight_hours)
    }

    fn classify_geography(&self, end: &Location, start: &Location) -> (GapType, SuggestedFill) {
        let end_country = airports::country_of(end);
        let start_country = airports::country_of(start);

        // An unknown country is never promoted to an international gap.
        if let (Some(a), Some(b)) = (&end_country, &start_country) {
            if a != b {
                return (GapType::InternationalGap, SuggestedFill::Flight);
            }
        }

        let same_city = match (&end.city, &start.city) {
            (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
            _ => false,
        };
        let distance_miles = match (airports::coordinates_of(end), airports::coordinates_of(start))
        {
            (Some(a), Some(b)) => Some(haversine_miles(a, b)),
            _ => None,
        };

        if same_city || distance_miles.is_some_and(|d| d <= self.rules.local_transfer_miles) {
            return (GapType::LocalTransfer, SuggestedFill::Transfer);
        }

        match distance_miles {
            Some(d) if d >= self.rules.long_haul_miles => {
                (GapType::DomesticGap, SuggestedFill::Flight)
            }
            _ => (GapType::DomesticGap, SuggestedFill::Transfer),
        }
    }
}

/// Great-circle distance between two coordinates.
pub fn haversine_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    let lat1_rad = from.0.to_radians();
    let lat2_rad = to.0.to_radians();
    let delta_lat = (to.0 - from.0).to_radians();
    let delta_lon = (to.1 - from.1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
