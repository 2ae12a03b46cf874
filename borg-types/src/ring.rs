//! Ring is a closed sequence of points: the last point is connected back to the first one.
//!
//! Rings never store the closing point. A ring of a triangle holds exactly three points, and the segment between the
//! last and the first point is produced by [`Ring::iter_points_closing`] and [`Ring::iter_segments`].
//!
//! Serialized formats (GeoJSON, nested coordinate arrays) repeat the first point at the end of a ring. The conversion
//! functions in [`crate::coords`] strip it when reading and add it back when writing.

use crate::geo::Projection;
use crate::segment::Segment;

/// Closed sequence of points. See module level documentation for details.
pub trait Ring {
    /// Type of the points the ring consists of.
    type Point;

    /// Iterates over the points of the ring. The first point is not repeated at the end.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Same as [`Ring::iter_points`] but repeats the first point at the end of the iterator.
    fn iter_points_closing(&self) -> impl Iterator<Item = &Self::Point> {
        RingPointsIterator::new(self.iter_points())
    }

    /// Iterates over segments of the ring, including the one between the last and the first points.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        RingSegmentIterator::new(RingPointsIterator::new(self.iter_points()))
    }

    /// Number of distinct vertices in the ring.
    fn vertex_count(&self) -> usize {
        self.iter_points().count()
    }

    /// Project all the points of the ring with the given `projection`.
    fn project_points<Proj>(&self, projection: &Proj) -> Option<crate::impls::Ring<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = Self::Point> + ?Sized,
    {
        Some(crate::impls::Ring::new(
            self.iter_points()
                .map(|p| projection.project(p))
                .collect::<Option<Vec<Proj::OutPoint>>>()?,
        ))
    }
}

/// Iterator of ring points that yields the first point once more after the last one.
#[derive(Debug, Clone)]
pub struct RingPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    first_point: Option<&'a P>,
    started: bool,
}

impl<'a, P: 'a, Iter> RingPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter) -> Self {
        Self {
            points_iter,
            first_point: None,
            started: false,
        }
    }
}

impl<'a, P, Iter> Iterator for RingPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points_iter.next();
        if !self.started {
            self.started = true;
            self.first_point = next;
        }

        match next {
            Some(point) => Some(point),
            None => self.first_point.take(),
        }
    }
}

/// Iterator of ring segments.
#[derive(Debug, Clone)]
pub struct RingSegmentIterator<'a, P: 'a, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: RingPointsIterator<'a, P, Iter>,
    prev_point: Option<&'a P>,
}

impl<'a, P, Iter> RingSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: RingPointsIterator<'a, P, Iter>) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for RingSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_point = self.points_iter.next()?;
            if let Some(prev) = self.prev_point.replace(next_point) {
                return Some(Segment(prev, next_point));
            }
        }
    }
}
