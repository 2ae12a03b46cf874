//! Types and functions on geometries in cartesian coordinates.

mod edge;
mod impls;
mod rect;
mod traits;

pub use edge::EdgeVector;
pub use impls::{Point2, Point3, Vector2};
pub use rect::Rect;
pub use traits::*;
