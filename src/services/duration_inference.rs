use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::preferences::{Confidence, DurationEstimate};
use crate::models::segment::Segment;

// Ends within a minute of the start are treated as "unspecified duration".
const DEGENERATE_DURATION_SECONDS: i64 = 60;
const FALLBACK_HOURS: f64 = 2.0;

/// Ordered keyword-to-hours table for open-ended activities. First
/// case-insensitive substring match against the segment name wins, so more
/// specific phrases must come before their prefixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRules {
    pub keywords: Vec<(String, f64)>,
    pub fallback_hours: f64,
}

impl Default for DurationRules {
    fn default() -> Self {
        let table: &[(&str, f64)] = &[
            ("breakfast", 1.0),
            ("brunch", 1.5),
            ("lunch", 1.5),
            ("dinner", 2.0),
            ("movie", 2.0),
            ("museum", 2.0),
            ("spa", 2.0),
            ("concert", 2.5),
            ("broadway show", 2.5),
            ("opera", 3.0),
            ("tour", 3.0),
            ("golf", 4.0),
        ];

        Self {
            keywords: table
                .iter()
                .map(|(k, h)| (k.to_string(), *h))
                .collect(),
            fallback_hours: FALLBACK_HOURS,
        }
    }
}

impl DurationRules {
    /// Load the table from the JSON file named by `DURATION_RULES_PATH`, or
    /// use the built-in defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        match std::env::var("DURATION_RULES_PATH") {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                    log::warn!("Failed to parse duration rules at {}: {}", path, e);
                    defaults
                }),
                Err(e) => {
                    log::warn!("Failed to read duration rules at {}: {}", path, e);
                    defaults
                }
            },
            Err(_) => defaults,
        }
    }
}

/// Resolves an effective end time for segments whose end equals their start,
/// so gap detection is not fooled by degenerate zero-duration entries.
#[derive(Debug, Clone, Default)]
pub struct DurationInference {
    rules: DurationRules,
}

impl DurationInference {
    pub fn new() -> Self {
        Self {
            rules: DurationRules::from_env(),
        }
    }

    pub fn with_rules(rules: DurationRules) -> Self {
        Self { rules }
    }

    /// Estimate how long a segment runs, in hours.
    pub fn infer_activity_duration(&self, segment: &Segment) -> DurationEstimate {
        let actual = segment.end_datetime - segment.start_datetime;
        if actual > Duration::seconds(DEGENERATE_DURATION_SECONDS) {
            return DurationEstimate {
                hours: actual.num_seconds() as f64 / 3600.0,
                confidence: Confidence::High,
                reason: "actual duration".to_string(),
            };
        }

        let name = segment.name.to_lowercase();
        for (keyword, hours) in &self.rules.keywords {
            if name.contains(keyword.as_str()) {
                return DurationEstimate {
                    hours: *hours,
                    confidence: Confidence::Medium,
                    reason: format!("matched keyword '{}'", keyword),
                };
            }
        }

        DurationEstimate {
            hours: self.rules.fallback_hours,
            confidence: Confidence::Low,
            reason: "generic fallback duration".to_string(),
        }
    }

    /// The segment's end datetime when it carries a real duration, otherwise
    /// the start plus the inferred duration.
    pub fn effective_end_time(&self, segment: &Segment) -> DateTime<Utc> {
        let actual = segment.end_datetime - segment.start_datetime;
        if actual > Duration::seconds(DEGENERATE_DURATION_SECONDS) {
            return segment.end_datetime;
        }

        let estimate = self.infer_activity_duration(segment);
        segment.start_datetime + Duration::seconds((estimate.hours * 3600.0) as i64)
    }
}
