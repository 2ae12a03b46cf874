//! Shape classification of parcel polygons.

use std::fmt::{Display, Formatter};

use borg_types::cartesian::{CartesianPoint2d, CartesianPolygon, EdgeVector};
use borg_types::{MultiPolygon, Polygon, Ring};
use serde::{Deserialize, Serialize};

/// Range of turn angles (in degrees, inclusive) accepted as a right angle when looking for rectangles.
pub const RIGHT_ANGLE_RANGE: std::ops::RangeInclusive<f64> = 89.0..=91.0;

/// Shape class of a parcel.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Parcel consisting of more than one polygon.
    Multipolygon,
    /// Polygon with at least one hole.
    PolygonWithHoles,
    /// Polygon with fewer than 3 vertices.
    Broken,
    /// Polygon with at least one reflex vertex, or a clockwise polygon.
    #[serde(rename = "complex")]
    ComplexPolygon,
    /// Convex polygon with 3 vertices.
    Triangle,
    /// Convex polygon with 4 vertices and right angles at all of them.
    Rectangle,
    /// Convex polygon with 4 vertices that is not a rectangle.
    Quadrilateral,
    /// Convex polygon with more than 4 vertices.
    #[serde(rename = "convex")]
    ConvexPolygon,
}

impl ShapeKind {
    /// Stable lowercase name of the shape class, the same one the serde representation uses.
    pub fn tag(&self) -> &'static str {
        match self {
            ShapeKind::Multipolygon => "multipolygon",
            ShapeKind::PolygonWithHoles => "polygon_with_holes",
            ShapeKind::Broken => "broken",
            ShapeKind::ComplexPolygon => "complex",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Quadrilateral => "quadrilateral",
            ShapeKind::ConvexPolygon => "convex",
        }
    }

    /// Returns true for the classes that describe a single simple convex polygon.
    pub fn is_convex(&self) -> bool {
        matches!(
            self,
            ShapeKind::Triangle
                | ShapeKind::Rectangle
                | ShapeKind::Quadrilateral
                | ShapeKind::ConvexPolygon
        )
    }
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Classification of planar polygons. This trait is auto-implemented for all polygons with `f64` cartesian points.
pub trait ClassifyPolygon {
    /// Returns the shape class of the polygon.
    ///
    /// The checks are done in a fixed order: holes, vertex count, convexity, and then the number of vertices and
    /// angles of the convex shape. The outer ring is expected to be wound counter-clockwise.
    fn classify(&self) -> ShapeKind;
}

impl<P, R, T> ClassifyPolygon for T
where
    P: CartesianPoint2d<Num = f64>,
    R: Ring<Point = P>,
    T: Polygon<Ring = R>,
{
    fn classify(&self) -> ShapeKind {
        if self.has_holes() {
            return ShapeKind::PolygonWithHoles;
        }

        let vertex_count = self.outer_ring().vertex_count();
        if vertex_count < 3 {
            return ShapeKind::Broken;
        }

        let angles = self.interior_angles();
        if angles.iter().any(|angle| *angle < 0.0) {
            return ShapeKind::ComplexPolygon;
        }

        match vertex_count {
            3 => ShapeKind::Triangle,
            4 if angles.iter().all(|angle| RIGHT_ANGLE_RANGE.contains(angle)) => {
                ShapeKind::Rectangle
            }
            4 => ShapeKind::Quadrilateral,
            _ => ShapeKind::ConvexPolygon,
        }
    }
}

/// Classification of planar multipolygons. This trait is auto-implemented for all multipolygons with `f64`
/// cartesian points.
pub trait ClassifyMultiPolygon {
    /// Returns [`ShapeKind::Multipolygon`] for more than one polygon, [`ShapeKind::Broken`] for none, and the class
    /// of the polygon otherwise.
    fn classify(&self) -> ShapeKind;
}

impl<P, R, Poly, T> ClassifyMultiPolygon for T
where
    P: CartesianPoint2d<Num = f64>,
    R: Ring<Point = P>,
    Poly: Polygon<Ring = R>,
    T: MultiPolygon<Polygon = Poly>,
{
    fn classify(&self) -> ShapeKind {
        let mut polygons = self.polygons();
        match (polygons.next(), polygons.next()) {
            (None, _) => ShapeKind::Broken,
            (Some(polygon), None) => ClassifyPolygon::classify(polygon),
            (Some(_), Some(_)) => ShapeKind::Multipolygon,
        }
    }
}

/// Side lengths and orientations of a 4-vertex polygon, pairing opposite edges.
///
/// The first pair consists of the edges `0 -> 1` and `3 -> 2`, the second one of `1 -> 2` and `0 -> 3`. Lengths and
/// azimuths of the edges in a pair are averaged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct OppositeSides {
    pub first: f64,
    pub second: f64,
    pub first_azimuth: f64,
    pub second_azimuth: f64,
}

impl OppositeSides {
    pub fn new(edges: &[EdgeVector]) -> Option<Self> {
        let [e0, e1, e2, e3] = edges else {
            return None;
        };

        Some(Self {
            first: (e0.length() + e2.length()) / 2.0,
            second: (e1.length() + e3.length()) / 2.0,
            first_azimuth: mean_azimuth(e0.azimuth(), (-e2.vector).azimuth()),
            second_azimuth: mean_azimuth(e1.azimuth(), (-e3.vector).azimuth()),
        })
    }

    pub fn long(&self) -> f64 {
        self.first.max(self.second)
    }

    pub fn short(&self) -> f64 {
        self.first.min(self.second)
    }

    /// Averaged azimuth of the longer pair of sides.
    pub fn long_azimuth(&self) -> f64 {
        if self.first > self.second {
            self.first_azimuth
        } else {
            self.second_azimuth
        }
    }
}

/// Circular mean of two angles: the angle halfway along the shorter arc from `a` to `b`.
pub(crate) fn mean_azimuth(a: f64, b: f64) -> f64 {
    a + wrap_angle(b - a) / 2.0
}

fn wrap_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};

    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Side lengths reported together with the shape class, in meters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeMeasurements {
    /// Lengths of the triangle edges, in ring order.
    Triangle {
        /// Edge lengths.
        sides: [f64; 3],
    },
    /// Averaged lengths of the opposite rectangle sides.
    Rectangle {
        /// Longer side.
        long: f64,
        /// Shorter side.
        short: f64,
    },
    /// Lengths of the quadrilateral edges, in ring order.
    Quadrilateral {
        /// Edge lengths.
        sides: [f64; 4],
    },
}

impl ShapeMeasurements {
    /// Measures the sides of a polygon of the given class. Only triangles, rectangles and quadrilaterals are
    /// measured.
    pub fn measure(polygon: &impl CartesianPolygon, kind: ShapeKind) -> Option<Self> {
        let edges = polygon.edge_vectors();
        match kind {
            ShapeKind::Triangle => Some(Self::Triangle {
                sides: side_lengths(&edges)?,
            }),
            ShapeKind::Rectangle => {
                let sides = OppositeSides::new(&edges)?;
                Some(Self::Rectangle {
                    long: sides.long(),
                    short: sides.short(),
                })
            }
            ShapeKind::Quadrilateral => Some(Self::Quadrilateral {
                sides: side_lengths(&edges)?,
            }),
            _ => None,
        }
    }
}

fn side_lengths<const N: usize>(edges: &[EdgeVector]) -> Option<[f64; N]> {
    let edges: [EdgeVector; N] = edges.try_into().ok()?;
    Some(edges.map(|edge| edge.length()))
}
