use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::preferences::{BudgetTier, PreferenceProfile};
use crate::models::segment::{CabinClass, Segment, SegmentDetails};

const DEFAULT_HOTEL_TIER: u8 = 3;

/// Hotel brand names grouped by tier. Matching is a case-insensitive
/// substring check against the segment name, luxury list first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandTiers {
    pub luxury: Vec<String>,
    pub premium: Vec<String>,
    pub budget: Vec<String>,
}

impl Default for BrandTiers {
    fn default() -> Self {
        let to_owned = |names: &[&str]| names.iter().map(|n| n.to_string()).collect();

        Self {
            luxury: to_owned(&[
                "four seasons",
                "ritz-carlton",
                "ritz carlton",
                "st. regis",
                "st regis",
                "mandarin oriental",
                "aman",
                "waldorf astoria",
                "peninsula",
                "rosewood",
                "park hyatt",
                "bulgari",
            ]),
            premium: to_owned(&[
                "marriott",
                "hilton",
                "hyatt",
                "sheraton",
                "westin",
                "intercontinental",
                "sofitel",
                "kimpton",
                "renaissance",
                "fairmont",
            ]),
            budget: to_owned(&[
                "motel 6",
                "super 8",
                "days inn",
                "holiday inn express",
                "travelodge",
                "ibis",
                "comfort inn",
                "econo lodge",
                "la quinta",
            ]),
        }
    }
}

impl BrandTiers {
    /// Load brand lists from the JSON file named by
    /// `HOTEL_BRAND_TIERS_PATH`, or use the built-in defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        match std::env::var("HOTEL_BRAND_TIERS_PATH") {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                    log::warn!("Failed to parse brand tiers at {}: {}", path, e);
                    defaults
                }),
                Err(e) => {
                    log::warn!("Failed to read brand tiers at {}: {}", path, e);
                    defaults
                }
            },
            Err(_) => defaults,
        }
    }

    /// Star tier for a property name: luxury brands 5, premium 4, budget 2.
    pub fn tier_for(&self, property_name: &str) -> Option<u8> {
        let name = property_name.to_lowercase();

        if self.luxury.iter().any(|b| name.contains(b.as_str())) {
            return Some(5);
        }
        if self.premium.iter().any(|b| name.contains(b.as_str())) {
            return Some(4);
        }
        if self.budget.iter().any(|b| name.contains(b.as_str())) {
            return Some(2);
        }

        None
    }
}

/// Infers a traveler's implicit preference profile from already-booked
/// segments.
#[derive(Debug, Clone, Default)]
pub struct PreferenceInference {
    brands: BrandTiers,
}

impl PreferenceInference {
    pub fn new() -> Self {
        Self {
            brands: BrandTiers::from_env(),
        }
    }

    pub fn with_brands(brands: BrandTiers) -> Self {
        Self { brands }
    }

    /// Most frequent cabin class across flight segments; ties favor the
    /// higher class. Economy when no flights specify a class.
    pub fn infer_travel_class(&self, segments: &[Segment]) -> CabinClass {
        let mut counts: HashMap<CabinClass, usize> = HashMap::new();

        for segment in segments {
            if let SegmentDetails::Flight {
                cabin_class: Some(class),
                ..
            } = &segment.details
            {
                *counts.entry(*class).or_insert(0) += 1;
            }
        }

        counts
            .into_iter()
            .max_by_key(|(class, count)| (*count, *class))
            .map(|(class, _)| class)
            .unwrap_or(CabinClass::Economy)
    }

    /// Maximum brand tier observed across hotel segments, or an explicit
    /// star class when the booking carries one. Default 3.
    pub fn infer_hotel_tier(&self, segments: &[Segment]) -> u8 {
        let mut best: Option<u8> = None;

        for segment in segments {
            if let SegmentDetails::Hotel { star_class, .. } = &segment.details {
                let tier = self
                    .brands
                    .tier_for(&segment.name)
                    .or(*star_class);
                if let Some(tier) = tier {
                    best = Some(best.map_or(tier, |b| b.max(tier)));
                }
            }
        }

        best.unwrap_or(DEFAULT_HOTEL_TIER)
    }

    /// Combine cabin class and hotel tier into a budget tier. A luxury or
    /// premium signal from either axis is sufficient to raise the tier.
    pub fn infer_preferences(&self, segments: &[Segment]) -> PreferenceProfile {
        let cabin_class = self.infer_travel_class(segments);
        let hotel_star_rating = self.infer_hotel_tier(segments);

        let budget_tier = if cabin_class >= CabinClass::Business || hotel_star_rating >= 5 {
            BudgetTier::Luxury
        } else if cabin_class == CabinClass::PremiumEconomy || hotel_star_rating == 4 {
            BudgetTier::Premium
        } else {
            BudgetTier::Economy
        };

        PreferenceProfile {
            cabin_class,
            hotel_star_rating,
            budget_tier,
        }
    }
}
