use serde::{Deserialize, Serialize};

use crate::cartesian::{Point2, Vector2};

/// Simple [`Ring`](crate::Ring) implementation backed by a vector of points.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Hash, Deserialize, Serialize)]
pub struct Ring<Point> {
    /// Points of the ring, without the closing one.
    pub points: Vec<Point>,
}

impl<Point> Ring<Point> {
    /// Creates a new ring.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the ring.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Ring going through the same points in the opposite direction.
    pub fn reversed(&self) -> Self
    where
        Point: Clone,
    {
        Self {
            points: self.points.iter().rev().cloned().collect(),
        }
    }

    /// Creates a new ring by applying `f` to every point.
    pub fn map_points<T>(&self, f: impl FnMut(&Point) -> T) -> Ring<T> {
        Ring {
            points: self.points.iter().map(f).collect(),
        }
    }
}

impl Ring<Point2> {
    /// Ring rotated around the origin clockwise by `angle` radians.
    pub fn rotate(&self, angle: f64) -> Self {
        self.map_points(|p| p.rotate(angle))
    }

    /// Ring shifted by the given vector.
    pub fn translate(&self, vector: Vector2) -> Self {
        self.map_points(|p| *p + vector)
    }
}

impl<P> From<Vec<P>> for Ring<P> {
    fn from(points: Vec<P>) -> Self {
        Self { points }
    }
}

impl<P> crate::ring::Ring for Ring<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }

    fn vertex_count(&self) -> usize {
        self.points.len()
    }
}
