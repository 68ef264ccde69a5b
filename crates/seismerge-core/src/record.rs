//! Spatiotemporal records used for cross-catalog matching

use crate::TrueTime;

/// A record with a true-time stamp and a geographic position.
///
/// Used uniformly for origin-style records (hypocenter estimates) and
/// arrival-style records (phase picks) during duplicate detection and
/// pick-to-origin association. `payload` carries whatever the caller needs
/// back after matching, typically the record's [`GlobalId`](crate::GlobalId).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatioRecord<P> {
    /// Event or pick time on the true-time axis
    pub time: TrueTime,
    /// Latitude, decimal degrees
    pub lat: f64,
    /// Longitude, decimal degrees
    pub lon: f64,
    /// Caller payload, returned untouched by the matcher
    pub payload: P,
}

impl<P> SpatioRecord<P> {
    pub fn new(time: TrueTime, lat: f64, lon: f64, payload: P) -> Self {
        SpatioRecord {
            time,
            lat,
            lon,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_carries_payload() {
        let r = SpatioRecord::new(TrueTime::from_secs(100.0), 45.0, -122.0, 7_u64);
        assert_eq!(r.payload, 7);
        assert_eq!(r.lat, 45.0);
    }
}
