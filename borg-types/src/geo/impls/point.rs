use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::cartesian::CartesianPoint3d;
use crate::geo::datum::Datum;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// 2d point on the surface of a celestial body.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Creates a new from point from another.
    pub fn from(other: &impl GeoPoint<Num = f64>) -> Self {
        Self {
            lat: other.lat(),
            lon: other.lon(),
        }
    }

    /// Converts an earth-centered cartesian point into geographic coordinates.
    ///
    /// The point is first moved along its radius onto the sphere of the datum radius. Returns `None` for the center of
    /// the sphere and for non-finite input.
    pub fn from_space(point: &impl CartesianPoint3d<Num = f64>, datum: &Datum) -> Option<Self> {
        let norm = (point.x().powi(2) + point.y().powi(2) + point.z().powi(2)).sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return None;
        }

        let radius = datum.semimajor();
        let scale = radius / norm;
        let (x, y, z) = (point.x() * scale, point.y() * scale, point.z() * scale);

        Some(Self {
            lat: (z / radius).clamp(-1.0, 1.0).asin().to_degrees(),
            lon: y.atan2(x).to_degrees(),
        })
    }
}

impl AbsDiffEq for GeoPoint2d {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.lat.abs_diff_eq(&other.lat, epsilon) && self.lon.abs_diff_eq(&other.lon, epsilon)
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use borg_types::geo::GeoPoint;
/// use borg_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::impls::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}

/// Creates a new GeoPoint2d from longitude and latitude values (in degrees), the order used by GeoJSON.
///
/// ```
/// use borg_types::geo::GeoPoint;
/// use borg_types::lonlat;
///
/// let point = lonlat!(-73.996005, 40.722822);
/// assert_eq!(point.lon(), -73.996005);
/// ```
#[macro_export]
macro_rules! lonlat {
    ($lon:expr, $lat:expr) => {
        <$crate::geo::impls::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::lonlat($lon, $lat)
    };
}
