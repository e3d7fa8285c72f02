use crate::models::segment::{Location, Segment, SegmentDetails};

/// Stable chronological ordering by start datetime; ties keep the original
/// array order so repeated runs produce identical output.
pub fn sort_segments(segments: &[Segment]) -> Vec<Segment> {
    let mut ordered = segments.to_vec();
    ordered.sort_by_key(|s| s.start_datetime);
    ordered
}

/// Where the traveler is when this segment begins. `None` means the kind
/// carries no location and the boundary cannot be compared.
pub fn start_location_of(segment: &Segment) -> Option<&Location> {
    match &segment.details {
        SegmentDetails::Flight { origin, .. } => Some(origin),
        SegmentDetails::Hotel { location, .. } => Some(location),
        SegmentDetails::Meeting { location } => Some(location),
        SegmentDetails::Activity { location } => Some(location),
        SegmentDetails::Transfer { pickup, .. } => Some(pickup),
        SegmentDetails::Custom { location } => location.as_ref(),
    }
}

/// Where the traveler is when this segment ends.
pub fn end_location_of(segment: &Segment) -> Option<&Location> {
    match &segment.details {
        SegmentDetails::Flight { destination, .. } => Some(destination),
        SegmentDetails::Hotel { location, .. } => Some(location),
        SegmentDetails::Meeting { location } => Some(location),
        SegmentDetails::Activity { location } => Some(location),
        SegmentDetails::Transfer { dropoff, .. } => Some(dropoff),
        SegmentDetails::Custom { location } => location.as_ref(),
    }
}
