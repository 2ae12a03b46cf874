//! Implementations of the geometry traits for [`geo_types`] geometries.
//!
//! `geo_types` coordinates have no fixed space: `x`/`y` are read as planar coordinates by the cartesian traits and
//! as longitude/latitude by the geographic ones.

mod linestring;
mod multi_polygon;
mod point;
mod polygon;
