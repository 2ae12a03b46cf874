//! Implementations of geographic projections.
mod tangent_plane;
mod web_mercator;

pub use tangent_plane::TangentPlaneProjection;
pub use web_mercator::WebMercator;
