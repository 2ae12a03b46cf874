use crate::cartesian::{CartesianPoint2d, Point2};

/// Tolerance used by the planar predicates to absorb floating point noise.
pub const EPSILON: f64 = 1e-9;

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<P: CartesianPoint2d<Num = f64>> Segment<'_, P> {
    /// Intersection point of the infinite lines going through the two segments.
    ///
    /// Returns `None` if the lines are parallel or coincide.
    pub fn line_intersection<Other: CartesianPoint2d<Num = f64>>(
        &self,
        other: &Segment<Other>,
    ) -> Option<Point2> {
        let dx1 = self.0.x() - self.1.x();
        let dy1 = self.0.y() - self.1.y();
        let dx2 = other.0.x() - other.1.x();
        let dy2 = other.0.y() - other.1.y();

        let denominator = dx1 * dy2 - dy1 * dx2;
        if denominator.abs() < EPSILON {
            return None;
        }

        let cross1 = self.0.x() * self.1.y() - self.0.y() * self.1.x();
        let cross2 = other.0.x() * other.1.y() - other.0.y() * other.1.x();

        Some(Point2::new(
            (cross1 * dx2 - cross2 * dx1) / denominator,
            (cross1 * dy2 - cross2 * dy1) / denominator,
        ))
    }

    /// Intersection point of two segments.
    ///
    /// The point must lie within both segments, with [`EPSILON`] tolerance. Touching at an endpoint counts as an
    /// intersection, parallel segments never intersect.
    pub fn intersection<Other: CartesianPoint2d<Num = f64>>(
        &self,
        other: &Segment<Other>,
    ) -> Option<Point2> {
        let point = self.line_intersection(other)?;
        (self.box_contains(&point) && other.box_contains(&point)).then_some(point)
    }

    /// Returns true if the segments have a common point.
    pub fn intersects<Other: CartesianPoint2d<Num = f64>>(&self, other: &Segment<Other>) -> bool {
        self.intersection(other).is_some()
    }

    /// Returns true if the point lies in the bounding box of the segment extended by [`EPSILON`].
    ///
    /// For a point known to be on the line of the segment, this is the check that it is on the segment itself.
    pub fn box_contains(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool {
        let (x_min, x_max) = min_max(self.0.x(), self.1.x());
        let (y_min, y_max) = min_max(self.0.y(), self.1.y());

        point.x() >= x_min - EPSILON
            && point.x() <= x_max + EPSILON
            && point.y() >= y_min - EPSILON
            && point.y() <= y_max + EPSILON
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn crossing_segments() {
        let a = (Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));
        let b = (Point2::new(0.0, 2.0), Point2::new(2.0, 0.0));
        let intersection = Segment(&a.0, &a.1).intersection(&Segment(&b.0, &b.1));
        assert_abs_diff_eq!(intersection.unwrap(), Point2::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn lines_cross_outside_of_segments() {
        let a = (Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        let b = (Point2::new(3.0, 0.0), Point2::new(2.0, 1.0));

        let line = Segment(&a.0, &a.1).line_intersection(&Segment(&b.0, &b.1));
        assert_abs_diff_eq!(line.unwrap(), Point2::new(1.5, 1.5), epsilon = 1e-12);
        assert_eq!(Segment(&a.0, &a.1).intersection(&Segment(&b.0, &b.1)), None);
    }

    #[test]
    fn parallel_segments() {
        let a = (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let b = (Point2::new(0.0, 1.0), Point2::new(1.0, 1.0));
        assert_eq!(Segment(&a.0, &a.1).line_intersection(&Segment(&b.0, &b.1)), None);

        let c = (Point2::new(0.5, 0.0), Point2::new(2.0, 0.0));
        assert!(!Segment(&a.0, &a.1).intersects(&Segment(&c.0, &c.1)));
    }

    #[test]
    fn touching_at_endpoint() {
        let a = (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let b = (Point2::new(1.0, 0.0), Point2::new(1.0, 1.0));
        assert!(Segment(&a.0, &a.1).intersects(&Segment(&b.0, &b.1)));
    }

    #[test]
    fn box_tolerance() {
        let a = (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0));
        let segment = Segment(&a.0, &a.1);
        assert!(segment.box_contains(&Point2::new(1.0 + EPSILON / 2.0, 0.0)));
        assert!(!segment.box_contains(&Point2::new(1.0 + 10.0 * EPSILON, 0.0)));
    }
}
