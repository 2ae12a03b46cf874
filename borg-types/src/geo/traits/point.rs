use num_traits::{Float, NumCast, One};

use crate::cartesian::Point3;
use crate::geo::datum::Datum;

/// Point on the surface of the reference body, in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }

    /// Great-circle distance between two points in meters, using the haversine formula on the sphere of the datum
    /// radius.
    fn distance(&self, other: &impl GeoPoint<Num = Self::Num>, datum: &Datum) -> Option<Self::Num> {
        let radius = <Self::Num as NumCast>::from(datum.semimajor())?;
        let two = Self::Num::one() + Self::Num::one();

        let d_lat = (other.lat_rad() - self.lat_rad()) / two;
        let d_lon = (other.lon_rad() - self.lon_rad()) / two;
        let a = d_lat.sin().powi(2)
            + self.lat_rad().cos() * other.lat_rad().cos() * d_lon.sin().powi(2);

        Some(two * radius * a.sqrt().min(Self::Num::one()).asin())
    }

    /// Earth-centered cartesian coordinates of the point on the sphere of the datum radius.
    fn to_space(&self, datum: &Datum) -> Option<Point3<Self::Num>> {
        let radius = <Self::Num as NumCast>::from(datum.semimajor())?;
        let (lat_sin, lat_cos) = self.lat_rad().sin_cos();
        let (lon_sin, lon_cos) = self.lon_rad().sin_cos();

        Some(Point3::new(
            radius * lat_cos * lon_cos,
            radius * lat_cos * lon_sin,
            radius * lat_sin,
        ))
    }
}

/// Geographic point that can be constructed from its coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlon(lat: N, lon: N) -> Self;
    /// Creates a point from longitude and latitude in degrees.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}
