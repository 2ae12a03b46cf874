//! Planar and geographic geometry primitives for fitting building footprints into land parcels.
//!
//! Geometries are described by traits ([`Ring`], [`Polygon`], [`MultiPolygon`]) that can be implemented for any
//! type. Depending on the point type, the traits from [`cartesian`] and [`geo`] add measurements and predicates to
//! them:
//!
//! * a polygon of [`CartesianPoint2d`](cartesian::CartesianPoint2d) points gets the planar predicates of
//!   [`CartesianPolygon`](cartesian::CartesianPolygon): containment, intersection, ray casting, interior angles;
//! * a polygon of [`GeoPoint`](geo::GeoPoint) points gets the geodetic measurements of
//!   [`GeodeticPolygon`](geo::GeodeticPolygon).
//!
//! Geographic geometries are moved into the plane with the
//! [`TangentPlaneProjection`](geo::impls::projection::TangentPlaneProjection), which keeps distances and angles
//! accurate in meters around its center:
//!
//! ```
//! use borg_types::cartesian::CartesianPolygon;
//! use borg_types::geo::impls::projection::TangentPlaneProjection;
//! use borg_types::geo::GeodeticMultiPolygon;
//! use borg_types::impls::GeoMultiPolygon;
//! use borg_types::MultiPolygon;
//!
//! let parcel = GeoMultiPolygon::from_coordinates(&[vec![vec![
//!     [-73.998824, 40.716576],
//!     [-73.998862, 40.716515],
//!     [-73.998523, 40.716396],
//!     [-73.998485, 40.716457],
//!     [-73.998824, 40.716576],
//! ]]])
//! .unwrap();
//!
//! let projection: TangentPlaneProjection = TangentPlaneProjection::new(&parcel.geo_centroid().unwrap()).unwrap();
//! let planar = parcel.project_points(&projection).unwrap();
//!
//! assert!(planar.parts[0].area() > 150.0);
//! ```

pub mod cartesian;
pub mod coords;
pub mod error;
pub mod geo;
pub mod impls;
mod multi_polygon;
mod polygon;
mod ring;
mod segment;

#[cfg(feature = "geo-types")]
mod geo_types;

#[cfg(feature = "geojson")]
pub mod geojson;

pub use error::BorgTypesError;
pub use multi_polygon::MultiPolygon;
pub use polygon::Polygon;
pub use ring::Ring;
pub use segment::{Segment, EPSILON};
