//! Implementations of geometry traits.

mod multi_polygon;
mod polygon;
mod ring;

pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
pub use ring::Ring;

use crate::cartesian::Point2;
use crate::geo::impls::GeoPoint2d;

/// Polygon in the planar tangent frame, coordinates in meters.
pub type PlanarPolygon = Polygon<Point2>;
/// Multipolygon in the planar tangent frame, coordinates in meters.
pub type PlanarMultiPolygon = MultiPolygon<Point2>;
/// Polygon with geodetic coordinates.
pub type GeoPolygon = Polygon<GeoPoint2d>;
/// Multipolygon with geodetic coordinates.
pub type GeoMultiPolygon = MultiPolygon<GeoPoint2d>;
