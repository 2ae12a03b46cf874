use approx::AbsDiffEq;
use nalgebra::Scalar;
use num_traits::{Bounded, Float, FromPrimitive};
use serde::{Deserialize, Serialize};

use crate::cartesian::traits::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d,
};

/// A point in 2-dimensional cartesian coordinate space.
///
/// For the tangent plane used by the layout engine `x` points east and `y` points north, both in meters.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point2<Num = f64> {
    x: Num,
    y: Num,
}

impl<Num> Point2<Num> {
    /// Creates a new point with the given coordinates.
    pub const fn new(x: Num, y: Num) -> Self {
        Self { x, y }
    }

    /// Returns coordinates of the point as an array of `Num`.
    pub fn coords(&self) -> [Num; 2]
    where
        Num: Copy,
    {
        [self.x, self.y]
    }
}

impl<Num: Float> Point2<Num> {
    /// Rotates the point around the origin clockwise by `angle` radians.
    ///
    /// A point at azimuth `a` ends up at azimuth `a + angle`, its distance to the origin does not change.
    pub fn rotate(&self, angle: Num) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos + self.y * sin,
            y: self.y * cos - self.x * sin,
        }
    }
}

/// Vector between two points in 2-dimensional cartesian coordinate space.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Vector2<Num = f64> {
    dx: Num,
    dy: Num,
}

impl<Num: Copy> Vector2<Num> {
    /// Creates a new vector with the given coordinates.
    pub fn new(dx: Num, dy: Num) -> Self {
        Self { dx, dy }
    }

    /// Returns x coordinate of the vector.
    pub fn dx(&self) -> Num {
        self.dx
    }

    /// Returns y coordinate of the vector.
    pub fn dy(&self) -> Num {
        self.dy
    }

    /// Returns squared magnitude (squared length) of the vector.
    pub fn magnitude_sq(&self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * self.dx + self.dy * self.dy
    }

    /// Returns magnitude (length) of the vector.
    pub fn magnitude(&self) -> Num
    where
        Num: Float,
    {
        self.magnitude_sq().sqrt()
    }

    /// Dot product of two vectors.
    pub fn dot(&self, other: &Self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * other.dx + self.dy * other.dy
    }

    /// Z component of the cross product of two vectors. Positive if `other` is to the left of `self`.
    pub fn cross(&self, other: &Self) -> Num
    where
        Num: num_traits::Num,
    {
        self.dx * other.dy - self.dy * other.dx
    }

    /// Vector of the same length rotated by a right angle counter-clockwise.
    pub fn left_normal(&self) -> Self
    where
        Num: std::ops::Neg<Output = Num>,
    {
        Self {
            dx: -self.dy,
            dy: self.dx,
        }
    }

    /// Vector of length 1 with the same direction. Returns `None` for a zero vector.
    pub fn unit(&self) -> Option<Self>
    where
        Num: Float,
    {
        let magnitude = self.magnitude();
        if magnitude == Num::zero() || !magnitude.is_finite() {
            return None;
        }

        Some(Self {
            dx: self.dx / magnitude,
            dy: self.dy / magnitude,
        })
    }

    /// Angle between the north direction (`+y`) and the vector, measured clockwise, in radians in `(-PI, PI]`.
    pub fn azimuth(&self) -> Num
    where
        Num: Float,
    {
        self.dx.atan2(self.dy)
    }
}

impl<Num> std::ops::Sub<Point2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Vector2<Num>;

    fn sub(self, rhs: Point2<Num>) -> Self::Output {
        Vector2 {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

impl<Num> std::ops::Add<Vector2<Num>> for Point2<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Point2<Num>;

    fn add(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl<Num> std::ops::Sub<Vector2<Num>> for Point2<Num>
where
    Num: std::ops::Sub<Num, Output = Num>,
{
    type Output = Point2<Num>;

    fn sub(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            x: self.x - rhs.dx,
            y: self.y - rhs.dy,
        }
    }
}

impl<Num> std::ops::Add<Vector2<Num>> for Vector2<Num>
where
    Num: std::ops::Add<Num, Output = Num>,
{
    type Output = Vector2<Num>;

    fn add(self, rhs: Vector2<Num>) -> Self::Output {
        Self {
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
        }
    }
}

impl<Num> std::ops::Mul<Num> for Vector2<Num>
where
    Num: std::ops::Mul<Num, Output = Num> + Copy,
{
    type Output = Vector2<Num>;

    fn mul(self, rhs: Num) -> Self::Output {
        Self {
            dx: self.dx * rhs,
            dy: self.dy * rhs,
        }
    }
}

impl<Num> std::ops::Neg for Vector2<Num>
where
    Num: std::ops::Neg<Output = Num>,
{
    type Output = Vector2<Num>;

    fn neg(self) -> Self::Output {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

impl<Num> AbsDiffEq for Point2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<Num> AbsDiffEq for Vector2<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.dx.abs_diff_eq(&other.dx, epsilon) && self.dy.abs_diff_eq(&other.dy, epsilon)
    }
}

/// A point in 3-dimensional cartesian coordinate space.
///
/// Used for earth-centered coordinates: the origin is the center of the sphere, `z` points to the north pole and
/// `x` to the intersection of the equator with the prime meridian.
#[derive(Debug, Default, Copy, Clone, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point3<Num = f64> {
    x: Num,
    y: Num,
    z: Num,
}

impl<Num> Point3<Num> {
    /// Creates a new instance of the point by its coordinates.
    pub const fn new(x: Num, y: Num, z: Num) -> Self {
        Self { x, y, z }
    }
}

impl<Num> AbsDiffEq for Point3<Num>
where
    Num: AbsDiffEq<Num, Epsilon = Num> + Copy,
{
    type Epsilon = Num;

    fn default_epsilon() -> Self::Epsilon {
        Num::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: num_traits::Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive>
    NewCartesianPoint2d<Num> for Point2<Num>
{
    fn new(x: Num, y: Num) -> Self {
        Point2 { x, y }
    }
}

impl<Num: Scalar + Copy> CartesianPoint3d for Point3<Num> {
    type Num = Num;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }

    fn z(&self) -> Self::Num {
        self.z
    }
}

impl<Num: Scalar + Copy> NewCartesianPoint3d<Num> for Point3<Num> {
    fn new(x: Num, y: Num, z: Num) -> Self {
        Point3 { x, y, z }
    }
}
