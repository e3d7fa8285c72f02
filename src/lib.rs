//! Itinerary continuity and gap-filling engine.
//!
//! Orders trip segments in time, detects temporal and geographic
//! discontinuities between consecutive segments, infers effective end times
//! for open-ended activities and an implicit traveler preference profile,
//! and synthesizes plausible replacement segments by querying external
//! search collaborators. Persistence, HTTP routing and the conversational
//! layer that invokes this engine live elsewhere; this crate takes a
//! `Segment` snapshot and hands back derived values and candidate
//! insertions.

pub mod error;
pub mod models;
pub mod services;

pub use error::{GapFillError, ProviderError};
pub use models::gap::{Gap, GapType, SuggestedFill};
pub use models::preferences::{BudgetTier, Confidence, DurationEstimate, PreferenceProfile};
pub use models::segment::{
    CabinClass, Location, Segment, SegmentDetails, SegmentSource, TransferType,
};
pub use services::duration_inference::{DurationInference, DurationRules};
pub use services::gap_classifier::{GapClassifier, GapRules};
pub use services::gap_filling::GapFiller;
pub use services::preference_inference::{BrandTiers, PreferenceInference};
pub use services::providers::{
    FlightCandidate, FlightSearchProvider, GeoPoint, GeocodingProvider, HotelCandidate,
    HotelSearchProvider, RateLimitedGeocoder,
};
pub use services::redundancy_repair::RedundancyRepair;
pub use services::sequencer::{end_location_of, sort_segments, start_location_of};
