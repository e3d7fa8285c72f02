use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::time::{sleep, Duration, Instant};

use crate::error::ProviderError;
use crate::models::segment::CabinClass;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightCandidate {
    pub airline: String,
    pub flight_number: String,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub cabin_class: CabinClass,
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelCandidate {
    pub name: String,
    pub coordinates: (f64, f64),
    pub nightly_rate: f64,
    pub star_class: u8,
    /// Guest rating, 0-10.
    pub rating: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// External flight search. Implementations own their HTTP client, timeouts
/// and retries; a timeout surfaces here as a `ProviderError`.
#[async_trait]
pub trait FlightSearchProvider: Send + Sync {
    async fn search(
        &self,
        origin: &str,
        destination: &str,
        date: NaiveDate,
    ) -> Result<Vec<FlightCandidate>, ProviderError>;

    /// Shown in the inferred-reason metadata of synthesized segments.
    fn provider_name(&self) -> &str;
}

/// External hotel search.
#[async_trait]
pub trait HotelSearchProvider: Send + Sync {
    async fn search(
        &self,
        location: &str,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Vec<HotelCandidate>, ProviderError>;

    fn provider_name(&self) -> &str;
}

/// External geocoding, rate-limited upstream to one request per second.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Option<GeoPoint>, ProviderError>;
}

const GEOCODE_MIN_SPACING_MS: u64 = 1000;

/// Serialized-queue wrapper enforcing the geocoding provider's rate policy.
///
/// Calls are serialized through a mutex and spaced at least one second
/// apart; the limiter lives here at the collaborator boundary, not inside
/// the gap-filling core.
pub struct RateLimitedGeocoder<G> {
    inner: G,
    last_call: Mutex<Option<Instant>>,
    min_spacing: Duration,
}

impl<G: GeocodingProvider> RateLimitedGeocoder<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            last_call: Mutex::new(None),
            min_spacing: Duration::from_millis(GEOCODE_MIN_SPACING_MS),
        }
    }
}

#[async_trait]
impl<G: GeocodingProvider> GeocodingProvider for RateLimitedGeocoder<G> {
    async fn geocode(&self, query: &str) -> Result<Option<GeoPoint>, ProviderError> {
        let mut last_call = self.last_call.lock().await;

        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_spacing {
                sleep(self.min_spacing - elapsed).await;
            }
        }

        let result = self.inner.geocode(query).await;
        *last_call = Some(Instant::now());
        result
    }
}
