//! Geographic primitives.
//!
//! Coordinates are WGS84 decimal degrees in `(longitude, latitude)` order.
//! All distances in this crate are great-circle distances on a sphere of
//! radius [`EARTH_RADIUS_M`], computed with the Haversine formula. Distances
//! produced under a different radius are not comparable with these.

mod cache;
mod matrix;

pub use cache::DistanceCache;
pub use matrix::DistanceMatrix;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the Earth's surface in decimal degrees.
///
/// `(0.0, 0.0)` is an ordinary coordinate, not a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from longitude and latitude.
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Returns `true` if both components are finite.
    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Great-circle distance to `other` in meters.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(*self, *other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((longitude, latitude): (f64, f64)) -> Self {
        Self::new(longitude, latitude)
    }
}

/// Haversine great-circle distance between `a` and `b` in meters.
///
/// Non-finite inputs yield NaN instead of panicking.
///
/// # Examples
///
/// ```
/// use waypoint_order::geo::{haversine_distance, Coordinate};
///
/// let a = Coordinate::new(116.397428, 39.90923);
/// assert_eq!(haversine_distance(a, a), 0.0);
/// ```
pub fn haversine_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let half_lat = (delta_lat / 2.0).sin();
    let half_lon = (delta_lon / 2.0).sin();
    let h = half_lat * half_lat + lat1.cos() * lat2.cos() * half_lon * half_lon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Sum of consecutive great-circle distances along `path`.
///
/// Paths with fewer than two points have zero length.
pub fn path_distance(path: &[Coordinate]) -> f64 {
    path.windows(2)
        .map(|w| haversine_distance(w[0], w[1]))
        .sum()
}
