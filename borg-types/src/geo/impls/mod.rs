//! Geographic point type and projection implementations.

mod point;
pub mod projection;

pub use point::GeoPoint2d;
