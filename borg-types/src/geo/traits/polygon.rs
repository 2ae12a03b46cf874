use serde::{Deserialize, Serialize};

use crate::geo::datum::Datum;
use crate::geo::impls::GeoPoint2d;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::multi_polygon::MultiPolygon;
use crate::polygon::Polygon;
use crate::ring::Ring;

/// Longitude/latitude limits of a geometry, in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    /// Minimum longitude.
    pub lon_min: f64,
    /// Minimum latitude.
    pub lat_min: f64,
    /// Maximum longitude.
    pub lon_max: f64,
    /// Maximum latitude.
    pub lat_max: f64,
}

impl GeoBounds {
    fn from_points<'a, P: GeoPoint<Num = f64> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        let init = Self {
            lon_min: first.lon(),
            lat_min: first.lat(),
            lon_max: first.lon(),
            lat_max: first.lat(),
        };

        Some(points.fold(init, |bounds, p| Self {
            lon_min: bounds.lon_min.min(p.lon()),
            lat_min: bounds.lat_min.min(p.lat()),
            lon_max: bounds.lon_max.max(p.lon()),
            lat_max: bounds.lat_max.max(p.lat()),
        }))
    }

    /// Smallest bounds containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            lon_min: self.lon_min.min(other.lon_min),
            lat_min: self.lat_min.min(other.lat_min),
            lon_max: self.lon_max.max(other.lon_max),
            lat_max: self.lat_max.max(other.lat_max),
        }
    }

    /// Center of the bounds.
    pub fn center(&self) -> GeoPoint2d {
        GeoPoint2d::lonlat(
            (self.lon_min + self.lon_max) / 2.0,
            (self.lat_min + self.lat_max) / 2.0,
        )
    }
}

/// Polygon in geographic coordinates. This trait is auto-implemented for all polygons with `f64` geographic points.
pub trait GeodeticPolygon {
    /// Type of the points of the polygon.
    type Point: GeoPoint<Num = f64>;

    /// Bounds of the outer ring.
    fn bounds(&self) -> Option<GeoBounds>;

    /// Center of the outer ring bounds.
    fn bounds_center(&self) -> Option<GeoPoint2d>;

    /// Arithmetic mean of the outer ring vertices.
    ///
    /// This is the point the local tangent plane projection of the polygon is usually centered at.
    fn geo_centroid(&self) -> Option<GeoPoint2d>;

    /// Area of the polygon on the sphere of the datum radius in square meters, holes subtracted.
    fn spherical_area(&self, datum: &Datum) -> f64;
}

impl<P, R, T> GeodeticPolygon for T
where
    P: GeoPoint<Num = f64>,
    R: Ring<Point = P>,
    T: Polygon<Ring = R>,
{
    type Point = P;

    fn bounds(&self) -> Option<GeoBounds> {
        GeoBounds::from_points(self.outer_ring().iter_points())
    }

    fn bounds_center(&self) -> Option<GeoPoint2d> {
        self.bounds().map(|bounds| bounds.center())
    }

    fn geo_centroid(&self) -> Option<GeoPoint2d> {
        mean_point(self.outer_ring().iter_points())
    }

    fn spherical_area(&self, datum: &Datum) -> f64 {
        let holes: f64 = self
            .inner_rings()
            .map(|ring| ring_area(ring, datum).abs())
            .sum();
        ring_area(self.outer_ring(), datum).abs() - holes
    }
}

/// Multipolygon in geographic coordinates. This trait is auto-implemented for all multipolygons with `f64`
/// geographic points.
pub trait GeodeticMultiPolygon {
    /// Bounds of all outer rings.
    fn bounds(&self) -> Option<GeoBounds>;

    /// Arithmetic mean of the outer ring vertices of all polygons.
    fn geo_centroid(&self) -> Option<GeoPoint2d>;

    /// Sum of the spherical areas of all polygons.
    fn spherical_area(&self, datum: &Datum) -> f64;
}

impl<P, R, Poly, T> GeodeticMultiPolygon for T
where
    P: GeoPoint<Num = f64>,
    R: Ring<Point = P>,
    Poly: Polygon<Ring = R>,
    T: MultiPolygon<Polygon = Poly>,
{
    fn bounds(&self) -> Option<GeoBounds> {
        self.polygons()
            .filter_map(|polygon| polygon.bounds())
            .reduce(|a, b| a.merge(b))
    }

    fn geo_centroid(&self) -> Option<GeoPoint2d> {
        mean_point(
            self.polygons()
                .flat_map(|polygon| polygon.outer_ring().iter_points()),
        )
    }

    fn spherical_area(&self, datum: &Datum) -> f64 {
        self.polygons()
            .map(|polygon| polygon.spherical_area(datum))
            .sum()
    }
}

fn mean_point<'a, P: GeoPoint<Num = f64> + 'a>(
    points: impl Iterator<Item = &'a P>,
) -> Option<GeoPoint2d> {
    let (count, lon, lat) = points.fold((0usize, 0.0, 0.0), |(count, lon, lat), p| {
        (count + 1, lon + p.lon(), lat + p.lat())
    });
    if count == 0 {
        return None;
    }

    Some(GeoPoint2d::lonlat(lon / count as f64, lat / count as f64))
}

fn ring_area<P: GeoPoint<Num = f64>>(ring: &impl Ring<Point = P>, datum: &Datum) -> f64 {
    let points: Vec<&P> = ring.iter_points().collect();
    let count = points.len();
    if count < 3 {
        return 0.0;
    }

    let sum: f64 = (0..count)
        .map(|i| {
            let lower = points[i];
            let middle = points[(i + 1) % count];
            let upper = points[(i + 2) % count];
            (upper.lon_rad() - lower.lon_rad()) * middle.lat_rad().sin()
        })
        .sum();

    sum * datum.semimajor() * datum.semimajor() / 2.0
}
