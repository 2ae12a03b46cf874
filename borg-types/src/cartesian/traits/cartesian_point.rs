use nalgebra::Scalar;
use num_traits::{Bounded, Float, FromPrimitive, Num};

use crate::cartesian::impls::{Point2, Vector2};

/// Point in 2d cartesian coordinate space.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are exactly equal.
    fn equal(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.x() == other.x() && self.y() == other.y()
    }

    /// Returns the point shifted by the given vector.
    fn add(&self, vec: Vector2<Self::Num>) -> Point2<Self::Num>
    where
        Self: Sized,
    {
        Point2::new(self.x() + vec.dx(), self.y() + vec.dy())
    }

    /// Returns the vector from `other` to `self`.
    fn sub(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Vector2<Self::Num> {
        Vector2::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Squared euclidean distance between two points.
    fn distance_sq(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> Self::Num {
        self.sub(other).magnitude_sq()
    }
}

/// Point in 2d cartesian coordinate space that can be constructed from its coordinates.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num) -> Self;
}

/// Operations on points with floating point coordinates.
pub trait CartesianPoint2dFloat<N: Float = f64>: CartesianPoint2d<Num = N> {
    /// Euclidean distance between two points.
    fn distance(&self, other: &impl CartesianPoint2d<Num = N>) -> N {
        self.distance_sq(other).sqrt()
    }

    /// Azimuth of the direction from `self` to `to`: clockwise angle from `+y` in radians in `(-PI, PI]`.
    fn azimuth(&self, to: &impl CartesianPoint2d<Num = N>) -> N {
        (to.x() - self.x()).atan2(to.y() - self.y())
    }

    /// Copies the point into a [`Point2`].
    fn to_point2(&self) -> Point2<N> {
        Point2::new(self.x(), self.y())
    }
}

impl<N: Float, T: CartesianPoint2d<Num = N>> CartesianPoint2dFloat<N> for T {}

/// Point in 3d cartesian coordinate space.
pub trait CartesianPoint3d {
    /// Numeric type used to represent coordinates.
    type Num: Scalar + Copy;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;
    /// Z coordinate.
    fn z(&self) -> Self::Num;
}

/// Point in 3d cartesian coordinate space that can be constructed from its coordinates.
pub trait NewCartesianPoint3d<Num = f64>: CartesianPoint3d<Num = Num> {
    /// Creates a new point.
    fn new(x: Num, y: Num, z: Num) -> Self;
}
