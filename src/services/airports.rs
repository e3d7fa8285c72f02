use crate::models::segment::Location;

#[derive(Debug, Clone, Copy)]
pub struct AirportInfo {
    pub code: &'static str,
    pub city: &'static str,
    pub country: &'static str,
    pub coordinates: (f64, f64),
}

/// Major hubs covered by classification and flight fill. Lookup falls back
/// to the geocoding collaborator for anything outside this table.
const AIRPORTS: &[AirportInfo] = &[
    AirportInfo { code: "JFK", city: "New York", country: "US", coordinates: (40.6413, -73.7781) },
    AirportInfo { code: "LGA", city: "New York", country: "US", coordinates: (40.7769, -73.8740) },
    AirportInfo { code: "EWR", city: "Newark", country: "US", coordinates: (40.6895, -74.1745) },
    AirportInfo { code: "LAX", city: "Los Angeles", country: "US", coordinates: (33.9416, -118.4085) },
    AirportInfo { code: "SFO", city: "San Francisco", country: "US", coordinates: (37.6213, -122.3790) },
    AirportInfo { code: "ORD", city: "Chicago", country: "US", coordinates: (41.9742, -87.9073) },
    AirportInfo { code: "MIA", city: "Miami", country: "US", coordinates: (25.7959, -80.2870) },
    AirportInfo { code: "DEN", city: "Denver", country: "US", coordinates: (39.8561, -104.6737) },
    AirportInfo { code: "SEA", city: "Seattle", country: "US", coordinates: (47.4502, -122.3088) },
    AirportInfo { code: "BOS", city: "Boston", country: "US", coordinates: (42.3656, -71.0096) },
    AirportInfo { code: "ATL", city: "Atlanta", country: "US", coordinates: (33.6407, -84.4277) },
    AirportInfo { code: "DFW", city: "Dallas", country: "US", coordinates: (32.8998, -97.0403) },
    AirportInfo { code: "LAS", city: "Las Vegas", country: "US", coordinates: (36.0840, -115.1537) },
    AirportInfo { code: "YYZ", city: "Toronto", country: "CA", coordinates: (43.6777, -79.6248) },
    AirportInfo { code: "LHR", city: "London", country: "GB", coordinates: (51.4700, -0.4543) },
    AirportInfo { code: "LGW", city: "London", country: "GB", coordinates: (51.1537, -0.1821) },
    AirportInfo { code: "CDG", city: "Paris", country: "FR", coordinates: (49.0097, 2.5479) },
    AirportInfo { code: "AMS", city: "Amsterdam", country: "NL", coordinates: (52.3105, 4.7683) },
    AirportInfo { code: "FRA", city: "Frankfurt", country: "DE", coordinates: (50.0379, 8.5622) },
    AirportInfo { code: "MAD", city: "Madrid", country: "ES", coordinates: (40.4983, -3.5676) },
    AirportInfo { code: "BCN", city: "Barcelona", country: "ES", coordinates: (41.2974, 2.0833) },
    AirportInfo { code: "FCO", city: "Rome", country: "IT", coordinates: (41.8003, 12.2389) },
    AirportInfo { code: "MXP", city: "Milan", country: "IT", coordinates: (45.6306, 8.7281) },
    AirportInfo { code: "VCE", city: "Venice", country: "IT", coordinates: (45.5053, 12.3519) },
    AirportInfo { code: "ZRH", city: "Zurich", country: "CH", coordinates: (47.4647, 8.5492) },
    AirportInfo { code: "DXB", city: "Dubai", country: "AE", coordinates: (25.2532, 55.3657) },
    AirportInfo { code: "NRT", city: "Tokyo", country: "JP", coordinates: (35.7720, 140.3929) },
    AirportInfo { code: "HND", city: "Tokyo", country: "JP", coordinates: (35.5494, 139.7798) },
    AirportInfo { code: "SIN", city: "Singapore", country: "SG", coordinates: (1.3644, 103.9915) },
    AirportInfo { code: "HKG", city: "Hong Kong", country: "HK", coordinates: (22.3080, 113.9185) },
    AirportInfo { code: "SYD", city: "Sydney", country: "AU", coordinates: (-33.9399, 151.1753) },
    AirportInfo { code: "MEX", city: "Mexico City", country: "MX", coordinates: (19.4363, -99.0721) },
];

pub fn by_code(code: &str) -> Option<&'static AirportInfo> {
    let code = code.to_uppercase();
    AIRPORTS.iter().find(|a| a.code == code)
}

pub fn by_city(city: &str) -> Option<&'static AirportInfo> {
    let city = city.to_lowercase();
    AIRPORTS.iter().find(|a| a.city.to_lowercase() == city)
}

/// Resolve a location to an airport-style code: an explicit 3-letter code
/// wins, otherwise the city is looked up in the table.
pub fn resolve_airport_code(location: &Location) -> Option<String> {
    if let Some(code) = &location.code {
        if code.len() == 3 {
            return Some(code.to_uppercase());
        }
    }

    location
        .city
        .as_deref()
        .and_then(by_city)
        .map(|a| a.code.to_string())
}

/// Country fallback for locations whose address carries no country but whose
/// code is a known airport.
pub fn country_of(location: &Location) -> Option<String> {
    if let Some(country) = &location.country {
        return Some(country.to_uppercase());
    }

    location
        .code
        .as_deref()
        .and_then(by_code)
        .map(|a| a.country.to_string())
}

/// Coordinates fallback through the airport table.
pub fn coordinates_of(location: &Location) -> Option<(f64, f64)> {
    if let Some(coords) = location.coordinates {
        return Some(coords);
    }

    if let Some(info) = location.code.as_deref().and_then(by_code) {
        return Some(info.coordinates);
    }

    location.city.as_deref().and_then(by_city).map(|a| a.coordinates)
}
