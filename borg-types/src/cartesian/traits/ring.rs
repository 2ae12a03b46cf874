use crate::cartesian::edge::EdgeVector;
use crate::cartesian::impls::Point2;
use crate::cartesian::rect::Rect;
use crate::cartesian::traits::cartesian_point::{CartesianPoint2d, CartesianPoint2dFloat};
use crate::ring::Ring;
use crate::segment::{Segment, EPSILON};

/// Ring in 2d cartesian coordinates. This trait is auto-implemented for all rings with `f64` cartesian points.
pub trait CartesianRing {
    /// Type of the points of the ring.
    type Point: CartesianPoint2d<Num = f64>;

    /// Shoelace area of the ring. Positive for counter-clockwise rings.
    fn area_signed(&self) -> f64;

    /// Direction in which the ring goes around its interior.
    fn winding(&self) -> Winding;

    /// Arithmetic mean of the ring vertices. Returns `None` for an empty ring.
    fn centroid(&self) -> Option<Point2>;

    /// Bounding box of the ring vertices. Returns `None` for an empty ring.
    fn bounding_rect(&self) -> Option<Rect>;

    /// Edges of the ring as vectors anchored at their start vertices, including the closing edge.
    fn edge_vectors(&self) -> Vec<EdgeVector>;

    /// Azimuth of every edge, in the same order as [`CartesianRing::edge_vectors`].
    fn azimuths(&self) -> Vec<f64>;

    /// Signed turn angle at every vertex, in degrees.
    ///
    /// `interior_angles()[i]` is `asin(cross / (|e1| * |e2|))` where `e1` is the edge coming into vertex `i` and `e2`
    /// is the edge going out of it. Left turns are positive. The magnitude is only meaningful for turns close to a
    /// right angle, the sign is meaningful for any turn. Vertices with a zero-length adjacent edge get `0`.
    fn interior_angles(&self) -> Vec<f64>;

    /// Even-odd test of the point against the ring.
    fn contains_point(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool;
}

/// Direction of a ring.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winding {
    /// The interior is on the right side of each edge.
    Clockwise,
    /// The interior is on the left side of each edge.
    CounterClockwise,
}

impl<P, T> CartesianRing for T
where
    P: CartesianPoint2d<Num = f64>,
    T: Ring<Point = P>,
{
    type Point = P;

    fn area_signed(&self) -> f64 {
        let mut prev;
        let mut iter = self.iter_points_closing();
        if let Some(p) = iter.next() {
            prev = p;
        } else {
            return 0.0;
        }

        let mut aggr = 0.0;

        for p in iter {
            aggr += prev.x() * p.y() - p.x() * prev.y();
            prev = p;
        }

        aggr / 2.0
    }

    fn winding(&self) -> Winding {
        if self.area_signed() <= 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    fn centroid(&self) -> Option<Point2> {
        let (count, x, y) = self
            .iter_points()
            .fold((0usize, 0.0, 0.0), |(count, x, y), p| {
                (count + 1, x + p.x(), y + p.y())
            });
        if count == 0 {
            return None;
        }

        Some(Point2::new(x / count as f64, y / count as f64))
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Rect::from_points(self.iter_points())
    }

    fn edge_vectors(&self) -> Vec<EdgeVector> {
        self.iter_segments()
            .map(|Segment(start, end)| EdgeVector::new(start.to_point2(), end.to_point2()))
            .collect()
    }

    fn azimuths(&self) -> Vec<f64> {
        self.iter_segments()
            .map(|Segment(start, end)| start.azimuth(end))
            .collect()
    }

    fn interior_angles(&self) -> Vec<f64> {
        let edges = self.edge_vectors();
        let count = edges.len();

        (0..count)
            .map(|i| {
                let incoming = edges[(i + count - 1) % count].vector;
                let outgoing = edges[i].vector;
                let lengths = incoming.magnitude() * outgoing.magnitude();
                if lengths < EPSILON {
                    return 0.0;
                }

                (incoming.cross(&outgoing) / lengths)
                    .clamp(-1.0, 1.0)
                    .asin()
                    .to_degrees()
            })
            .collect()
    }

    fn contains_point(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool {
        let x = point.x();
        let y = point.y();

        self.iter_segments()
            .filter(|Segment(a, b)| {
                (a.y() > y) != (b.y() > y) && x < (b.x() - a.x()) * (y - a.y()) / (b.y() - a.y()) + a.x()
            })
            .count()
            % 2
            == 1
    }
}
