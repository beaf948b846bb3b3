//! Geographic coordinate type and great-circle distance.
//!
//! Campus-scale distances are a few hundred metres, but the same code also
//! serves the admissible A* heuristic, so `GeoPoint` stays in `f64` to keep
//! the heuristic below summed edge lengths without rounding slack.

/// Mean Earth radius used by the Haversine formula, in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Assumed walking speed: 5 km/h expressed in metres per minute.
///
/// Converts straight-line metres into a lower bound on minutes for the
/// time-optimised heuristic, and derives base times for plain walkways.
pub const WALKING_SPEED_M_PER_MIN: f64 = 83.33;

/// A WGS-84 coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Symmetric, and exactly `0.0` for identical points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);
        // Rounding can push `a` just past 1.0 for near-antipodal points.
        let a = a.clamp(0.0, 1.0);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }

    /// Straight-line walking time in minutes at [`WALKING_SPEED_M_PER_MIN`].
    #[inline]
    pub fn walking_minutes(self, other: GeoPoint) -> f64 {
        self.distance_m(other) / WALKING_SPEED_M_PER_MIN
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
