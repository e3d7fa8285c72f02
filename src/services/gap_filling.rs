use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use futures::stream::{self, StreamExt};
use uuid::Uuid;

use crate::error::GapFillError;
use crate::models::gap::{Gap, SuggestedFill};
use crate::models::preferences::{BudgetTier, PreferenceProfile};
use crate::models::segment::{Location, Segment, SegmentDetails, SegmentSource, TransferType};
use crate::services::airports;
use crate::services::duration_inference::DurationInference;
use crate::services::preference_inference::PreferenceInference;
use crate::services::providers::{FlightCandidate, FlightSearchProvider, HotelSearchProvider};

const DEFAULT_TRANSFER_MINUTES: i64 = 45;
const TRANSFER_BUFFER_MINUTES: i64 = 5;
const MAX_CONCURRENT_FILLS: usize = 4;
const HOTEL_CHECK_IN_HOUR: u32 = 15;
const HOTEL_CHECK_OUT_HOUR: u32 = 11;

/// Synthesizes replacement segments for detected gaps, ranking external
/// search candidates against the traveler's inferred preference profile.
pub struct GapFiller {
    flights: Arc<dyn FlightSearchProvider>,
    hotels: Arc<dyn HotelSearchProvider>,
    duration: DurationInference,
    preferences: PreferenceInference,
}

impl GapFiller {
    pub fn new(flights: Arc<dyn FlightSearchProvider>, hotels: Arc<dyn HotelSearchProvider>) -> Self {
        Self {
            flights,
            hotels,
            duration: DurationInference::new(),
            preferences: PreferenceInference::new(),
        }
    }

    pub fn with_engines(
        flights: Arc<dyn FlightSearchProvider>,
        hotels: Arc<dyn HotelSearchProvider>,
        duration: DurationInference,
        preferences: PreferenceInference,
    ) -> Self {
        Self {
            flights,
            hotels,
            duration,
            preferences,
        }
    }

    /// Attempt to close a single gap. Every failure is local to this gap.
    ///
    /// The preference profile is a fresh snapshot computed from the
    /// itinerary at call time.
    pub async fn fill_gap(
        &self,
        gap: &Gap,
        existing: &[Segment],
    ) -> Result<Segment, GapFillError> {
        match gap.suggested {
            SuggestedFill::None => Err(GapFillError::OvernightSuppressed(gap.description.clone())),
            SuggestedFill::Flight => self.fill_with_flight(gap, existing).await,
            SuggestedFill::Transfer => self.synthesize_transfer(gap, existing),
        }
    }

    /// Fill every gap with bounded concurrency, reporting per-gap outcomes
    /// in ascending gap order. One failing gap never aborts the rest.
    pub async fn fill_gaps(
        &self,
        gaps: &[Gap],
        existing: &[Segment],
    ) -> Vec<(usize, Result<Segment, GapFillError>)> {
        let mut outcomes: Vec<(usize, Result<Segment, GapFillError>)> =
            stream::iter(gaps.iter().enumerate())
                .map(|(index, gap)| async move { (index, self.fill_gap(gap, existing).await) })
                .buffer_unordered(MAX_CONCURRENT_FILLS)
                .collect()
                .await;

        outcomes.sort_by_key(|(index, _)| *index);

        for (index, outcome) in &outcomes {
            match outcome {
                Ok(segment) => log::info!("Gap {} filled with '{}'", index, segment.name),
                Err(e) => log::info!("Gap {} left unfilled: {}", index, e),
            }
        }

        outcomes
    }

    async fn fill_with_flight(
        &self,
        gap: &Gap,
        existing: &[Segment],
    ) -> Result<Segment, GapFillError> {
        // No network call is attempted when either end lacks a code.
        let origin = airports::resolve_airport_code(&gap.end_location).ok_or_else(|| {
            GapFillError::UnresolvableIdentifier(format!(
                "no airport code for '{}'",
                gap.end_location.name
            ))
        })?;
        let destination = airports::resolve_airport_code(&gap.start_location).ok_or_else(|| {
            GapFillError::UnresolvableIdentifier(format!(
                "no airport code for '{}'",
                gap.start_location.name
            ))
        })?;

        let profile = self.preferences.infer_preferences(existing);
        let window_start = self.duration.effective_end_time(&gap.before);
        let window_end = gap.after.start_datetime;

        let candidates = self
            .flights
            .search(&origin, &destination, window_start.date_naive())
            .await?;
        if candidates.is_empty() {
            return Err(GapFillError::NoCandidates(format!(
                "no flights found {} -> {}",
                origin, destination
            )));
        }

        // A synthesized flight must never overlap its neighbors.
        let fitting: Vec<FlightCandidate> = candidates
            .into_iter()
            .filter(|c| {
                c.departure >= window_start && c.arrival < window_end && c.arrival > c.departure
            })
            .collect();
        if fitting.is_empty() {
            return Err(GapFillError::NoCandidates(format!(
                "no flight {} -> {} fits the {:.1}h window",
                origin, destination, gap.time_gap_hours
            )));
        }

        let preferred: Vec<&FlightCandidate> = fitting
            .iter()
            .filter(|c| c.cabin_class == profile.cabin_class)
            .collect();
        let pool: Vec<&FlightCandidate> = if preferred.is_empty() {
            fitting.iter().collect()
        } else {
            preferred
        };

        let selected = pool
            .into_iter()
            .min_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal))
            .ok_or_else(|| GapFillError::NoCandidates("empty candidate pool".to_string()))?;

        Ok(Segment {
            id: Uuid::new_v4(),
            name: format!("{} {}", selected.airline, selected.flight_number),
            start_datetime: selected.departure,
            end_datetime: selected.arrival,
            source: SegmentSource::Agent,
            inferred: true,
            inferred_reason: Some(format!(
                "Synthesized from {} search to close gap: {}",
                self.flights.provider_name(),
                gap.description
            )),
            details: SegmentDetails::Flight {
                origin: gap.end_location.clone(),
                destination: gap.start_location.clone(),
                airline: Some(selected.airline.clone()),
                flight_number: Some(selected.flight_number.clone()),
                cabin_class: Some(selected.cabin_class),
                price: Some(selected.price),
            },
        })
    }

    /// Ground transfers are synthesized directly, without an external call.
    /// The window invariant is hard: the transfer starts at the effective
    /// end of the previous segment and ends strictly before the next one.
    fn synthesize_transfer(&self, gap: &Gap, existing: &[Segment]) -> Result<Segment, GapFillError> {
        let window_start = self.duration.effective_end_time(&gap.before);
        let window_end = gap.after.start_datetime;
        let slack = window_end - window_start;

        if slack <= Duration::zero() {
            return Err(GapFillError::InsufficientData(format!(
                "no non-overlapping window for a transfer before '{}'",
                gap.after.name
            )));
        }

        let mut duration =
            Duration::minutes(DEFAULT_TRANSFER_MINUTES).min(slack - Duration::minutes(TRANSFER_BUFFER_MINUTES));
        if duration <= Duration::zero() {
            duration = slack / 2;
        }

        let profile = self.preferences.infer_preferences(existing);
        let transfer_type = if profile.budget_tier == BudgetTier::Luxury {
            TransferType::Private
        } else {
            TransferType::Rideshare
        };

        Ok(Segment {
            id: Uuid::new_v4(),
            name: format!(
                "Transfer from {} to {}",
                gap.end_location.name, gap.start_location.name
            ),
            start_datetime: window_start,
            end_datetime: window_start + duration,
            source: SegmentSource::Agent,
            inferred: true,
            inferred_reason: Some(format!("Synthesized ground transfer: {}", gap.description)),
            details: SegmentDetails::Transfer {
                pickup: gap.end_location.clone(),
                dropoff: gap.start_location.clone(),
                transfer_type,
                price: None,
            },
        })
    }

    /// Search for accommodation at a location, filtered by the inferred
    /// hotel tier. Callers use this for accommodation gaps; it is not
    /// triggered by the gap-type loop itself.
    pub async fn search_hotel(
        &self,
        location: &Location,
        check_in: NaiveDate,
        check_out: NaiveDate,
        profile: &PreferenceProfile,
    ) -> Result<Segment, GapFillError> {
        let nights = (check_out - check_in).num_days();
        if nights <= 0 {
            return Err(GapFillError::InsufficientData(format!(
                "check-out {} is not after check-in {}",
                check_out, check_in
            )));
        }

        let candidates = self
            .hotels
            .search(&location.name, check_in, check_out)
            .await?;
        if candidates.is_empty() {
            return Err(GapFillError::NoCandidates(format!(
                "no hotels found near '{}'",
                location.name
            )));
        }

        let in_tier: Vec<_> = candidates
            .iter()
            .filter(|c| c.star_class >= profile.hotel_star_rating)
            .collect();
        let pool: Vec<_> = if in_tier.is_empty() {
            candidates.iter().collect()
        } else {
            in_tier
        };

        let selected = pool
            .into_iter()
            .max_by(|a, b| a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal))
            .ok_or_else(|| GapFillError::NoCandidates("empty candidate pool".to_string()))?;

        let price = selected.nightly_rate * nights as f64;

        Ok(Segment {
            id: Uuid::new_v4(),
            name: selected.name.clone(),
            start_datetime: check_in
                .and_hms_opt(HOTEL_CHECK_IN_HOUR, 0, 0)
                .unwrap()
                .and_utc(),
            end_datetime: check_out
                .and_hms_opt(HOTEL_CHECK_OUT_HOUR, 0, 0)
                .unwrap()
                .and_utc(),
            source: SegmentSource::Agent,
            inferred: true,
            inferred_reason: Some(format!(
                "Synthesized from {} search for {} nights near '{}'",
                self.hotels.provider_name(),
                nights,
                location.name
            )),
            details: SegmentDetails::Hotel {
                location: Location {
                    name: selected.name.clone(),
                    code: None,
                    city: location.city.clone(),
                    country: location.country.clone(),
                    coordinates: Some(selected.coordinates),
                },
                star_class: Some(selected.star_class),
                nightly_rate: Some(selected.nightly_rate),
                price: Some(price),
            },
        })
    }
}
