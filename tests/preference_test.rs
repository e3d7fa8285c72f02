mod common;

use common::*;
use itinerary_continuity::{BrandTiers, BudgetTier, CabinClass, PreferenceInference};

#[test]
fn cabin_class_mode_wins() {
    let engine = PreferenceInference::default();

    let segments = vec![
        flight_in_cabin(
            "UA 1",
            jfk(),
            lax(),
            dt(2025, 6, 1, 8, 0),
            dt(2025, 6, 1, 14, 0),
            CabinClass::Economy,
        ),
        flight_in_cabin(
            "UA 2",
            lax(),
            jfk(),
            dt(2025, 6, 3, 8, 0),
            dt(2025, 6, 3, 16, 0),
            CabinClass::Business,
        ),
        flight_in_cabin(
            "UA 3",
            jfk(),
            lax(),
            dt(2025, 6, 5, 8, 0),
            dt(2025, 6, 5, 14, 0),
            CabinClass::Business,
        ),
    ];

    let profile = engine.infer_preferences(&segments);
    assert_eq!(profile.cabin_class, CabinClass::Business);
    assert_eq!(profile.budget_tier, BudgetTier::Luxury);
}

#[test]
fn cabin_class_tie_favors_the_higher_class() {
    let engine = PreferenceInference::default();

    let segments = vec![
        flight_in_cabin(
            "DL 10",
            jfk(),
            lax(),
            dt(2025, 6, 1, 8, 0),
            dt(2025, 6, 1, 14, 0),
            CabinClass::Economy,
        ),
        flight_in_cabin(
            "DL 11",
            lax(),
            jfk(),
            dt(2025, 6, 3, 8, 0),
            dt(2025, 6, 3, 16, 0),
            CabinClass::PremiumEconomy,
        ),
    ];

    let profile = engine.infer_preferences(&segments);
    assert_eq!(profile.cabin_class, CabinClass::PremiumEconomy);
    assert_eq!(profile.budget_tier, BudgetTier::Premium);
}

#[test]
fn defaults_apply_without_flights_or_hotels() {
    let engine = PreferenceInference::default();

    let segments = vec![activity(
        "Museum tour",
        manhattan(),
        dt(2025, 6, 1, 10, 0),
        dt(2025, 6, 1, 12, 0),
    )];

    let profile = engine.infer_preferences(&segments);
    assert_eq!(profile.cabin_class, CabinClass::Economy);
    assert_eq!(profile.hotel_star_rating, 3);
    assert_eq!(profile.budget_tier, BudgetTier::Economy);
}

#[test]
fn luxury_brand_sets_tier_five() {
    let engine = PreferenceInference::default();

    let segments = vec![hotel(
        "Four Seasons Resort",
        santa_monica(),
        dt(2025, 6, 1, 15, 0),
        dt(2025, 6, 3, 11, 0),
    )];

    let profile = engine.infer_preferences(&segments);
    assert_eq!(profile.hotel_star_rating, 5);
    assert_eq!(profile.budget_tier, BudgetTier::Luxury);
}

#[test]
fn hotel_tier_takes_the_maximum_across_stays() {
    let engine = PreferenceInference::default();

    let segments = vec![
        hotel(
            "Days Inn Airport",
            manhattan(),
            dt(2025, 6, 1, 15, 0),
            dt(2025, 6, 2, 11, 0),
        ),
        hotel(
            "Hilton Midtown",
            manhattan(),
            dt(2025, 6, 2, 15, 0),
            dt(2025, 6, 4, 11, 0),
        ),
    ];

    let profile = engine.infer_preferences(&segments);
    assert_eq!(profile.hotel_star_rating, 4);
    assert_eq!(profile.budget_tier, BudgetTier::Premium);
}

#[test]
fn unknown_brand_defaults_to_three_stars() {
    let engine = PreferenceInference::default();

    let segments = vec![hotel(
        "Casa Particular",
        rome(),
        dt(2025, 6, 1, 15, 0),
        dt(2025, 6, 3, 11, 0),
    )];

    let profile = engine.infer_preferences(&segments);
    assert_eq!(profile.hotel_star_rating, 3);
    assert_eq!(profile.budget_tier, BudgetTier::Economy);
}

#[test]
fn brand_lists_are_swappable() {
    let brands = BrandTiers {
        luxury: vec!["casa particular".to_string()],
        premium: vec![],
        budget: vec![],
    };
    let engine = PreferenceInference::with_brands(brands);

    let segments = vec![hotel(
        "Casa Particular",
        rome(),
        dt(2025, 6, 1, 15, 0),
        dt(2025, 6, 3, 11, 0),
    )];

    assert_eq!(engine.infer_hotel_tier(&segments), 5);
}
