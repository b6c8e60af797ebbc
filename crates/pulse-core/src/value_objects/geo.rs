//! Geolocation helpers - great-circle distance and display formatting

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;
const METERS_PER_MILE: f64 = 1_609.344;
const FEET_PER_MILE: f64 = 5_280.0;

/// A WGS84 coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle (haversine) distance to another point, in meters
    #[must_use]
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

/// Render a distance in meters as a human-readable imperial string.
///
/// Distances under a tenth of a mile are shown in feet; everything else in
/// miles with one decimal below 10 miles and whole miles above.
#[must_use]
pub fn readable_distance(meters: f64) -> String {
    let miles = meters / METERS_PER_MILE;
    if miles < 0.1 {
        let feet = (miles * FEET_PER_MILE).round() as i64;
        format!("{feet} ft")
    } else if miles < 10.0 {
        format!("{miles:.1} mi")
    } else {
        format!("{} mi", miles.round() as i64)
    }
}
