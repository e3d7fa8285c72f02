#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use itinerary_continuity::{
    CabinClass, FlightCandidate, FlightSearchProvider, GeoPoint, GeocodingProvider,
    HotelCandidate, HotelSearchProvider, Location, ProviderError, Segment, SegmentDetails,
    SegmentSource, TransferType,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// Locations used across the tests.

pub fn jfk() -> Location {
    Location {
        name: "John F. Kennedy International".to_string(),
        code: Some("JFK".to_string()),
        city: Some("New York".to_string()),
        country: Some("US".to_string()),
        coordinates: Some((40.6413, -73.7781)),
    }
}

pub fn lax() -> Location {
    Location {
        name: "Los Angeles International".to_string(),
        code: Some("LAX".to_string()),
        city: Some("Los Angeles".to_string()),
        country: Some("US".to_string()),
        coordinates: Some((33.9416, -118.4085)),
    }
}

pub fn santa_monica() -> Location {
    Location {
        name: "Santa Monica".to_string(),
        code: None,
        city: Some("Santa Monica".to_string()),
        country: Some("US".to_string()),
        coordinates: Some((34.0195, -118.4912)),
    }
}

pub fn manhattan() -> Location {
    Location {
        name: "Midtown Manhattan".to_string(),
        code: None,
        city: Some("New York".to_string()),
        country: Some("US".to_string()),
        coordinates: Some((40.7549, -73.9840)),
    }
}

pub fn rome() -> Location {
    Location {
        name: "Rome city centre".to_string(),
        code: None,
        city: Some("Rome".to_string()),
        country: Some("IT".to_string()),
        coordinates: Some((41.9028, 12.4964)),
    }
}

pub fn unresolvable() -> Location {
    Location::named("somewhere")
}

// Segment builders.

pub fn flight(
    name: &str,
    origin: Location,
    destination: Location,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Segment {
    Segment {
        id: Uuid::new_v4(),
        name: name.to_string(),
        start_datetime: start,
        end_datetime: end,
        source: SegmentSource::Import,
        inferred: false,
        inferred_reason: None,
        details: SegmentDetails::Flight {
            origin,
            destination,
            airline: None,
            flight_number: None,
            cabin_class: None,
            price: None,
        },
    }
}

pub fn flight_in_cabin(
    name: &str,
    origin: Location,
    destination: Location,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    cabin: CabinClass,
) -> Segment {
    let mut segment = flight(name, origin, destination, start, end);
    if let SegmentDetails::Flight { cabin_class, .. } = &mut segment.details {
        *cabin_class = Some(cabin);
    }
    segment
}

pub fn hotel(name: &str, location: Location, start: DateTime<Utc>, end: DateTime<Utc>) -> Segment {
    Segment {
        id: Uuid::new_v4(),
        name: name.to_string(),
        start_datetime: start,
        end_datetime: end,
        source: SegmentSource::Import,
        inferred: false,
        inferred_reason: None,
        details: SegmentDetails::Hotel {
            location,
            star_class: None,
            nightly_rate: None,
            price: None,
        },
    }
}

pub fn activity(name: &str, location: Location, start: DateTime<Utc>, end: DateTime<Utc>) -> Segment {
    Segment {
        id: Uuid::new_v4(),
        name: name.to_string(),
        start_datetime: start,
        end_datetime: end,
        source: SegmentSource::User,
        inferred: false,
        inferred_reason: None,
        details: SegmentDetails::Activity { location },
    }
}

pub fn transfer(
    name: &str,
    pickup: Location,
    dropoff: Location,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    source: SegmentSource,
) -> Segment {
    Segment {
        id: Uuid::new_v4(),
        name: name.to_string(),
        start_datetime: start,
        end_datetime: end,
        source,
        inferred: source == SegmentSource::Agent,
        inferred_reason: None,
        details: SegmentDetails::Transfer {
            pickup,
            dropoff,
            transfer_type: TransferType::Rideshare,
            price: None,
        },
    }
}

// Fake search collaborators.

#[derive(Default)]
pub struct FakeFlightProvider {
    pub candidates: Vec<FlightCandidate>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl FakeFlightProvider {
    pub fn with_candidates(candidates: Vec<FlightCandidate>) -> Self {
        Self {
            candidates,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            candidates: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl FlightSearchProvider for FakeFlightProvider {
    async fn search(
        &self,
        _origin: &str,
        _destination: &str,
        _date: NaiveDate,
    ) -> Result<Vec<FlightCandidate>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError("flight search unavailable".to_string()));
        }
        Ok(self.candidates.clone())
    }

    fn provider_name(&self) -> &str {
        "fake-flights"
    }
}

#[derive(Default)]
pub struct FakeHotelProvider {
    pub candidates: Vec<HotelCandidate>,
    pub fail: bool,
}

impl FakeHotelProvider {
    pub fn with_candidates(candidates: Vec<HotelCandidate>) -> Self {
        Self {
            candidates,
            fail: false,
        }
    }
}

#[async_trait]
impl HotelSearchProvider for FakeHotelProvider {
    async fn search(
        &self,
        _location: &str,
        _check_in: NaiveDate,
        _check_out: NaiveDate,
    ) -> Result<Vec<HotelCandidate>, ProviderError> {
        if self.fail {
            return Err(ProviderError("hotel search unavailable".to_string()));
        }
        Ok(self.candidates.clone())
    }

    fn provider_name(&self) -> &str {
        "fake-hotels"
    }
}

/// Records the instant of every geocode call so tests can assert spacing.
/// The call log is shared so tests keep a handle after the geocoder moves
/// into the rate-limiting wrapper.
#[derive(Default)]
pub struct FakeGeocoder {
    pub call_times: Arc<Mutex<Vec<tokio::time::Instant>>>,
}

impl FakeGeocoder {
    pub fn call_log(&self) -> Arc<Mutex<Vec<tokio::time::Instant>>> {
        self.call_times.clone()
    }
}

#[async_trait]
impl GeocodingProvider for FakeGeocoder {
    async fn geocode(&self, _query: &str) -> Result<Option<GeoPoint>, ProviderError> {
        self.call_times
            .lock()
            .unwrap()
            .push(tokio::time::Instant::now());
        Ok(Some(GeoPoint {
            latitude: 0.0,
            longitude: 0.0,
        }))
    }
}
