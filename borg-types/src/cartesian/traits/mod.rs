mod cartesian_point;
mod polygon;
mod ring;

pub use cartesian_point::{
    CartesianPoint2d, CartesianPoint2dFloat, CartesianPoint3d, NewCartesianPoint2d,
    NewCartesianPoint3d,
};

pub use polygon::{CartesianPolygon, RayHits};
pub use ring::{CartesianRing, Winding};
