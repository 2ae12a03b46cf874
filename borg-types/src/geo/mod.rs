//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and conversion between geographic
//! and planar coordinates (see [`Projection`]).

mod datum;
pub mod impls;
mod traits;

pub use datum::Datum;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::polygon::{GeoBounds, GeodeticMultiPolygon, GeodeticPolygon};
pub use traits::projection::{InvertedProjection, Projection};
