use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint2d, CartesianRing, Point2, Vector2, Winding};
use crate::impls::ring::Ring;

/// Simple implementation of the [`Polygon`](crate::Polygon) trait.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Hash, Deserialize, Serialize)]
pub struct Polygon<P> {
    /// Outer ring.
    pub outer_ring: Ring<P>,
    /// Holes.
    pub inner_rings: Vec<Ring<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(outer_ring: Ring<P>, inner_rings: Vec<Ring<P>>) -> Self {
        Self {
            outer_ring,
            inner_rings,
        }
    }

    /// Creates a new polygon by applying `f` to every point of every ring.
    pub fn map_points<T>(&self, mut f: impl FnMut(&P) -> T) -> Polygon<T> {
        Polygon {
            outer_ring: self.outer_ring.map_points(&mut f),
            inner_rings: self
                .inner_rings
                .iter()
                .map(|ring| ring.map_points(&mut f))
                .collect(),
        }
    }
}

impl<P: CartesianPoint2d<Num = f64> + Clone> Polygon<P> {
    /// Returns a copy of the polygon with the outer ring wound counter-clockwise and the holes wound clockwise.
    ///
    /// Predicates and the layout solver expect this orientation.
    pub fn to_counter_clockwise(&self) -> Self {
        let orient = |ring: &Ring<P>, expected: Winding| {
            if ring.winding() == expected {
                ring.clone()
            } else {
                ring.reversed()
            }
        };

        Self {
            outer_ring: orient(&self.outer_ring, Winding::CounterClockwise),
            inner_rings: self
                .inner_rings
                .iter()
                .map(|ring| orient(ring, Winding::Clockwise))
                .collect(),
        }
    }
}

impl Polygon<Point2> {
    /// Polygon rotated around the origin clockwise by `angle` radians.
    pub fn rotate(&self, angle: f64) -> Self {
        self.map_points(|p| p.rotate(angle))
    }

    /// Polygon shifted by the given vector.
    pub fn translate(&self, vector: Vector2) -> Self {
        self.map_points(|p| *p + vector)
    }
}

impl<P> crate::polygon::Polygon for Polygon<P> {
    type Ring = Ring<P>;

    fn outer_ring(&self) -> &Self::Ring {
        &self.outer_ring
    }

    fn inner_rings(&self) -> impl Iterator<Item = &'_ Self::Ring> {
        self.inner_rings.iter()
    }
}

impl<P> From<Ring<P>> for Polygon<P> {
    fn from(value: Ring<P>) -> Self {
        Self {
            outer_ring: value,
            inner_rings: vec![],
        }
    }
}

impl<P> From<Vec<P>> for Polygon<P> {
    fn from(value: Vec<P>) -> Self {
        Ring::new(value).into()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn square() -> Polygon<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
        .into()
    }

    #[test]
    fn counter_clockwise_normalization() {
        let clockwise = Polygon::new(square().outer_ring.reversed(), vec![square().outer_ring]);
        assert_eq!(clockwise.outer_ring.winding(), Winding::Clockwise);

        let normalized = clockwise.to_counter_clockwise();
        assert_eq!(normalized.outer_ring.winding(), Winding::CounterClockwise);
        assert_eq!(normalized.inner_rings[0].winding(), Winding::Clockwise);

        let unchanged = square().to_counter_clockwise();
        assert_eq!(unchanged, square());
    }

    #[test]
    fn rotate_and_translate() {
        let moved = square()
            .rotate(FRAC_PI_2)
            .translate(Vector2::new(10.0, 0.0));
        let expected = [
            Point2::new(10.0, 0.0),
            Point2::new(10.0, -2.0),
            Point2::new(12.0, -2.0),
            Point2::new(12.0, 0.0),
        ];

        for (actual, expected) in moved.outer_ring.points().iter().zip(expected) {
            assert_abs_diff_eq!(*actual, expected, epsilon = 1e-12);
        }
        assert_eq!(moved.outer_ring.winding(), Winding::CounterClockwise);
    }
}
