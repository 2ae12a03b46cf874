//! Fitting a rectangular footprint into a planar parcel polygon.
//!
//! The solver first classifies the polygon. Exact rectangles are answered by comparing side lengths, polygons with
//! holes are not analyzed, and every other shape is searched for a placement in three stages:
//!
//! 1. edge-aligned candidates: for every edge, the footprint is put against the edge (in both orientations) and
//!    centered between the boundary crossings of a line parallel to the edge;
//! 2. the polygon centroid, rotated to the azimuth of every edge;
//! 3. the polygon centroid, rotated through a full turn in [`LayoutOptions::rotation_steps`] steps.
//!
//! A candidate is accepted when the polygon [contains](CartesianPolygon::contains) the footprint. The first
//! accepted candidate is returned, so the result is deterministic.

use std::f64::consts::{FRAC_PI_2, TAU};

use borg_types::cartesian::{
    CartesianPoint2d, CartesianPolygon, EdgeVector, Point2, Rect, Vector2,
};
use borg_types::impls::PlanarPolygon;
use borg_types::{Polygon, Ring, EPSILON};
use serde::{Deserialize, Serialize};

use crate::classify::{ClassifyPolygon, OppositeSides, ShapeKind};

/// Tuning parameters of the layout solver.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Number of angles tried by the rotation sweep around the centroid. `0` disables the sweep.
    pub rotation_steps: usize,
    /// Distance in meters the footprint is shrunk by on every side before the containment test.
    ///
    /// Edge-aligned candidates lie on the polygon boundary, and a footprint touching the boundary would otherwise
    /// count as crossing it.
    pub touch_tolerance: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rotation_steps: 1000,
            touch_tolerance: 1e-6,
        }
    }
}

/// Outcome of a layout run.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// False if the polygon shape is not supported by the solver.
    pub analyzed: bool,
    /// True if a placement of the footprint was found.
    pub fits: bool,
    /// True if `center` and `angle` describe a placement.
    pub has_location: bool,
    /// Center of the placed footprint, in the coordinates of the polygon.
    pub center: Point2,
    /// Azimuth of the long side of the placed footprint, in radians.
    pub angle: f64,
}

impl LayoutResult {
    /// Result for a polygon the solver does not analyze.
    pub fn not_analyzed() -> Self {
        Self {
            analyzed: false,
            fits: false,
            has_location: false,
            center: Point2::default(),
            angle: 0.0,
        }
    }

    /// Result for an analyzed polygon with no placement for the footprint.
    pub fn no_fit() -> Self {
        Self {
            analyzed: true,
            ..Self::not_analyzed()
        }
    }

    /// Result for a footprint placed at `center` with its long side along `angle`.
    pub fn placed(center: Point2, angle: f64) -> Self {
        Self {
            analyzed: true,
            fits: true,
            has_location: true,
            center,
            angle,
        }
    }

    /// Placement of the footprint, if one was found.
    pub fn placement(&self) -> Option<(Point2, f64)> {
        self.has_location.then_some((self.center, self.angle))
    }

    /// Outline of a `width` x `height` footprint at the found placement.
    pub fn footprint_outline(&self, width: f64, height: f64) -> Option<PlanarPolygon> {
        let (center, angle) = self.placement()?;
        Some(TargetRect::new(width, height, 0.0).place(&Candidate { center, angle }))
    }
}

/// Tries to place a `width` x `height` rectangle inside the polygon, using [`LayoutOptions::default`].
///
/// The order of `width` and `height` does not matter: the shorter one is the minor side of the footprint.
pub fn layout_rectangle<P, R, T>(polygon: &T, width: f64, height: f64) -> LayoutResult
where
    P: CartesianPoint2d<Num = f64>,
    R: Ring<Point = P>,
    T: Polygon<Ring = R>,
{
    layout_rectangle_with(polygon, width, height, &LayoutOptions::default())
}

/// Tries to place a `width` x `height` rectangle inside the polygon.
pub fn layout_rectangle_with<P, R, T>(
    polygon: &T,
    width: f64,
    height: f64,
    options: &LayoutOptions,
) -> LayoutResult
where
    P: CartesianPoint2d<Num = f64>,
    R: Ring<Point = P>,
    T: Polygon<Ring = R>,
{
    let footprint = TargetRect::new(width, height, options.touch_tolerance);

    let kind = polygon.classify();
    let result = match kind {
        ShapeKind::PolygonWithHoles | ShapeKind::Multipolygon => {
            log::debug!("Polygon of class {kind} is not analyzed");
            LayoutResult::not_analyzed()
        }
        ShapeKind::Rectangle => layout_in_rectangle(polygon, &footprint),
        ShapeKind::Broken => {
            log::debug!("Polygon has too few vertices to host a footprint");
            LayoutResult::no_fit()
        }
        ShapeKind::Triangle
        | ShapeKind::Quadrilateral
        | ShapeKind::ConvexPolygon
        | ShapeKind::ComplexPolygon => search_placement(polygon, &footprint, options),
    };

    log::trace!("Layout of {width}x{height} footprint in {kind} polygon: {result:?}");
    result
}

fn layout_in_rectangle(polygon: &impl CartesianPolygon, footprint: &TargetRect) -> LayoutResult {
    let (Some(sides), Some(center)) = (
        OppositeSides::new(&polygon.edge_vectors()),
        polygon.centroid(),
    ) else {
        return LayoutResult::no_fit();
    };

    if sides.short() > footprint.minor && sides.long() > footprint.major {
        log::debug!(
            "Footprint fits into {:.3}x{:.3} rectangle",
            sides.short(),
            sides.long()
        );
        LayoutResult::placed(center, sides.long_azimuth())
    } else {
        log::debug!(
            "Footprint {:.3}x{:.3} does not fit into {:.3}x{:.3} rectangle",
            footprint.minor,
            footprint.major,
            sides.short(),
            sides.long()
        );
        LayoutResult::no_fit()
    }
}

fn search_placement(
    polygon: &impl CartesianPolygon,
    footprint: &TargetRect,
    options: &LayoutOptions,
) -> LayoutResult {
    let edges = polygon.edge_vectors();
    let fits = |candidate: &Candidate| {
        let fits = polygon.contains(&footprint.place(candidate));
        if !fits {
            log::trace!("Candidate rejected: {candidate:?}");
        }
        fits
    };

    let mut along_edges = [(footprint.minor, 0.0), (footprint.major, FRAC_PI_2)]
        .into_iter()
        .flat_map(|(depth, turn)| {
            edges
                .iter()
                .filter_map(move |edge| edge_candidate(polygon, edge, depth, turn))
        });
    if let Some(candidate) = along_edges.find(|c| fits(c)) {
        log::debug!("Footprint placed along an edge: {candidate:?}");
        return candidate.into();
    }

    let Some(centroid) = polygon.centroid() else {
        return LayoutResult::no_fit();
    };

    let mut at_centroid = edges.iter().map(|edge| Candidate {
        center: centroid,
        angle: edge.azimuth(),
    });
    if let Some(candidate) = at_centroid.find(|c| fits(c)) {
        log::debug!("Footprint placed at the centroid along an edge: {candidate:?}");
        return candidate.into();
    }

    let steps = options.rotation_steps;
    let mut sweep = (0..steps).map(|step| Candidate {
        center: centroid,
        angle: step as f64 * TAU / steps as f64,
    });
    if let Some(candidate) = sweep.find(|c| fits(c)) {
        log::debug!("Footprint placed at the centroid by rotation sweep: {candidate:?}");
        return candidate.into();
    }

    log::debug!(
        "No placement found for {:.3}x{:.3} footprint",
        footprint.minor,
        footprint.major
    );
    LayoutResult::no_fit()
}

/// Candidate placement of the footprint against `edge`.
///
/// The footprint side of length `depth` is perpendicular to the edge. A line parallel to the edge is cast at the
/// distance `depth` inside the polygon, and the candidate center is halfway between its nearest boundary crossings,
/// moved back towards the edge by half the depth.
fn edge_candidate(
    polygon: &impl CartesianPolygon,
    edge: &EdgeVector,
    depth: f64,
    turn: f64,
) -> Option<Candidate> {
    if edge.length() < EPSILON {
        return None;
    }

    let offset = edge.unit_normal()? * depth;
    let probe = edge.midpoint() + offset;
    let (left, right) = polygon.ray_intersections(&probe, edge.vector).both()?;

    Some(Candidate {
        center: Point2::new(
            (left.x() + right.x() - offset.dx()) / 2.0,
            (left.y() + right.y() - offset.dy()) / 2.0,
        ),
        angle: edge.azimuth() + turn,
    })
}

#[derive(Debug, Copy, Clone)]
struct Candidate {
    center: Point2,
    angle: f64,
}

impl From<Candidate> for LayoutResult {
    fn from(candidate: Candidate) -> Self {
        LayoutResult::placed(candidate.center, candidate.angle)
    }
}

/// Target rectangle with its sides sorted by length.
#[derive(Debug, Copy, Clone)]
struct TargetRect {
    minor: f64,
    major: f64,
    shape: Rect,
}

impl TargetRect {
    fn new(width: f64, height: f64, touch_tolerance: f64) -> Self {
        let minor = width.min(height);
        let major = width.max(height);
        Self {
            minor,
            major,
            shape: Rect::centered(minor - 2.0 * touch_tolerance, major - 2.0 * touch_tolerance),
        }
    }

    /// Footprint polygon with its long side along the candidate angle, centered at the candidate center.
    fn place(&self, candidate: &Candidate) -> PlanarPolygon {
        PlanarPolygon::from(self.shape.into_ring())
            .rotate(candidate.angle)
            .translate(Vector2::new(candidate.center.x(), candidate.center.y()))
    }
}
