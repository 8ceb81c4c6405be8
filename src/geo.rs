//! Geographic coordinates and distance calculations.
//!
//! Uses an equirectangular approximation rather than haversine or a full
//! ellipsoidal model: accurate enough for road-length distances over the
//! span of a single region, and much cheaper per query.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the surface of the Earth (WGS84). Latitude/longitude are
/// stored in single precision; distance math is done in `f64` and the
/// final result is rounded back to the precision the caller asked for.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    pub fn new(lat: f32, lon: f32) -> Self {
        GeoPoint { lat, lon }
    }

    fn lat_rad(&self) -> f64 {
        (self.lat as f64).to_radians()
    }

    fn lon_rad(&self) -> f64 {
        (self.lon as f64).to_radians()
    }

    /// Equirectangular-approximation distance in meters between this point
    /// and another one. Intermediate trig is done in `f64` and only the
    /// final result is rounded, so the result doesn't drift with the order
    /// operations happen to be scheduled in.
    pub fn equirectangular_distance(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat_rad();
        let lat2 = other.lat_rad();
        let mean_lat = (lat1 + lat2) / 2.0;
        let x = (other.lon_rad() - self.lon_rad()) * mean_lat.cos();
        let y = lat2 - lat1;
        (x * x + y * y).sqrt() * EARTH_RADIUS_M
    }
}
