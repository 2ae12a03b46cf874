use serde::{Deserialize, Serialize};

use crate::cartesian::edge::EdgeVector;
use crate::cartesian::impls::{Point2, Vector2};
use crate::cartesian::rect::Rect;
use crate::cartesian::traits::cartesian_point::{CartesianPoint2d, CartesianPoint2dFloat};
use crate::cartesian::traits::ring::CartesianRing;
use crate::polygon::Polygon;
use crate::ring::Ring;
use crate::segment::Segment;

/// Polygon in 2d cartesian coordinates. This trait is auto-implemented for all polygons with `f64` cartesian points.
///
/// Derived quantities (centroid, edges, angles) are computed over the outer ring only. Predicates expect the outer
/// ring to be wound counter-clockwise, see [`crate::impls::Polygon::to_counter_clockwise`].
pub trait CartesianPolygon {
    /// Type of the points of the polygon.
    type Point: CartesianPoint2d<Num = f64>;

    /// Area of the outer ring minus the areas of the holes.
    fn area(&self) -> f64;

    /// Arithmetic mean of the outer ring vertices.
    fn centroid(&self) -> Option<Point2>;

    /// Bounding box of the outer ring.
    fn bounding_rect(&self) -> Option<Rect>;

    /// Edges of the outer ring.
    fn edge_vectors(&self) -> Vec<EdgeVector>;

    /// Azimuths of the outer ring edges.
    fn azimuths(&self) -> Vec<f64>;

    /// Signed turn angles at the outer ring vertices, see [`CartesianRing::interior_angles`].
    fn interior_angles(&self) -> Vec<f64>;

    /// Returns true if the point is inside the outer ring and not inside any of the holes.
    fn contains_point(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool;

    /// Returns true if every point of the iterator passes [`CartesianPolygon::contains_point`].
    fn contains_all_points<'a, Q>(&self, points: impl IntoIterator<Item = &'a Q>) -> bool
    where
        Q: CartesianPoint2d<Num = f64> + 'a;

    /// Returns true if the outer ring of `other` lies inside the outer ring of `self`.
    ///
    /// That is the case when no edge of one ring crosses an edge of the other and a vertex of `other` is inside
    /// `self`. Holes of both polygons are ignored. Touching borders count as crossing.
    fn contains<Other>(&self, other: &Other) -> bool
    where
        Other: Polygon,
        <Other::Ring as Ring>::Point: CartesianPoint2d<Num = f64>;

    /// Returns true if the polygons overlap.
    ///
    /// Polygons with bounding boxes that only touch never intersect. Otherwise the polygons intersect if one contains
    /// the other or a vertex of either outer ring is inside the other outer ring. The relation is symmetric.
    fn intersects<Other>(&self, other: &Other) -> bool
    where
        Other: Polygon,
        <Other::Ring as Ring>::Point: CartesianPoint2d<Num = f64>;

    /// Intersects the infinite line going through `origin` in the given `direction` with the outer ring edges.
    ///
    /// Hits are split by their position relative to `origin` along the dominant axis of `direction`, and the nearest
    /// hit on each side is returned. Edges parallel to the line produce no hits.
    fn ray_intersections(
        &self,
        origin: &impl CartesianPoint2d<Num = f64>,
        direction: Vector2,
    ) -> RayHits;
}

/// Nearest intersections of a line with a polygon boundary on both sides of the line origin.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RayHits {
    /// Nearest hit with a smaller coordinate than the origin along the dominant axis.
    pub left: Option<Point2>,
    /// Nearest hit with a larger coordinate than the origin along the dominant axis.
    pub right: Option<Point2>,
}

impl RayHits {
    /// Returns both hits if the line hit the boundary on both sides of the origin.
    pub fn both(&self) -> Option<(Point2, Point2)> {
        Some((self.left?, self.right?))
    }
}

impl<P, R, T> CartesianPolygon for T
where
    P: CartesianPoint2d<Num = f64>,
    R: Ring<Point = P>,
    T: Polygon<Ring = R>,
{
    type Point = P;

    fn area(&self) -> f64 {
        let holes: f64 = self
            .inner_rings()
            .map(|ring| ring.area_signed().abs())
            .sum();
        self.outer_ring().area_signed().abs() - holes
    }

    fn centroid(&self) -> Option<Point2> {
        self.outer_ring().centroid()
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.outer_ring().bounding_rect()
    }

    fn edge_vectors(&self) -> Vec<EdgeVector> {
        self.outer_ring().edge_vectors()
    }

    fn azimuths(&self) -> Vec<f64> {
        self.outer_ring().azimuths()
    }

    fn interior_angles(&self) -> Vec<f64> {
        self.outer_ring().interior_angles()
    }

    fn contains_point(&self, point: &impl CartesianPoint2d<Num = f64>) -> bool {
        self.outer_ring().contains_point(point)
            && !self.inner_rings().any(|hole| hole.contains_point(point))
    }

    fn contains_all_points<'a, Q>(&self, points: impl IntoIterator<Item = &'a Q>) -> bool
    where
        Q: CartesianPoint2d<Num = f64> + 'a,
    {
        points.into_iter().all(|point| self.contains_point(point))
    }

    fn contains<Other>(&self, other: &Other) -> bool
    where
        Other: Polygon,
        <Other::Ring as Ring>::Point: CartesianPoint2d<Num = f64>,
    {
        let outer = self.outer_ring();
        let other_outer = other.outer_ring();

        let crosses = other_outer
            .iter_segments()
            .any(|edge| outer.iter_segments().any(|own| edge.intersects(&own)));
        if crosses {
            return false;
        }

        other_outer
            .iter_points()
            .next()
            .is_some_and(|point| outer.contains_point(point))
    }

    fn intersects<Other>(&self, other: &Other) -> bool
    where
        Other: Polygon,
        <Other::Ring as Ring>::Point: CartesianPoint2d<Num = f64>,
    {
        let (Some(own_bounds), Some(other_bounds)) =
            (self.bounding_rect(), other.outer_ring().bounding_rect())
        else {
            return false;
        };
        if !own_bounds.intersects(&other_bounds) {
            return false;
        }

        self.contains(other)
            || other.contains(self)
            || other
                .outer_ring()
                .iter_points()
                .any(|point| self.contains_point(point))
            || self
                .outer_ring()
                .iter_points()
                .any(|point| other.contains_point(point))
    }

    fn ray_intersections(
        &self,
        origin: &impl CartesianPoint2d<Num = f64>,
        direction: Vector2,
    ) -> RayHits {
        let start = origin.to_point2();
        let far = start + direction;
        let ray = Segment(&start, &far);

        let along_x = direction.dx().abs() >= direction.dy().abs();
        let axis = |p: &Point2| if along_x { p.x() } else { p.y() };
        let origin_coord = axis(&start);

        let mut hits = RayHits::default();
        for edge in self.outer_ring().iter_segments() {
            let Some(hit) = ray.line_intersection(&edge) else {
                continue;
            };
            if !edge.box_contains(&hit) {
                continue;
            }

            let coord = axis(&hit);
            let side = if coord < origin_coord {
                &mut hits.left
            } else if coord > origin_coord {
                &mut hits.right
            } else {
                continue;
            };

            let distance = hit.distance_sq(&start);
            if side.map_or(true, |current| distance < current.distance_sq(&start)) {
                *side = Some(hit);
            }
        }

        hits
    }
}
