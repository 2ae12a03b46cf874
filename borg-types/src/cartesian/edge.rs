use serde::{Deserialize, Serialize};

use crate::cartesian::impls::{Point2, Vector2};

/// Polygon edge represented as a vector anchored at its start vertex.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeVector {
    /// Start vertex of the edge.
    pub origin: Point2,
    /// Vector from the start vertex to the end vertex.
    pub vector: Vector2,
}

impl EdgeVector {
    /// Creates an edge going from `start` to `end`.
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            origin: start,
            vector: end - start,
        }
    }

    /// End vertex of the edge.
    pub fn end(&self) -> Point2 {
        self.origin + self.vector
    }

    /// Point halfway between the edge vertices.
    pub fn midpoint(&self) -> Point2 {
        self.origin + self.vector * 0.5
    }

    /// Length of the edge.
    pub fn length(&self) -> f64 {
        self.vector.magnitude()
    }

    /// Azimuth of the edge direction.
    pub fn azimuth(&self) -> f64 {
        self.vector.azimuth()
    }

    /// Vector of length 1 perpendicular to the edge, pointing to its left side.
    ///
    /// For a counter-clockwise ring this is the side of the polygon interior. Returns `None` for a zero-length edge.
    pub fn unit_normal(&self) -> Option<Vector2> {
        self.vector.left_normal().unit()
    }

    /// Same edge with its length multiplied by `factor`, keeping the origin.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            origin: self.origin,
            vector: self.vector * factor,
        }
    }
}
