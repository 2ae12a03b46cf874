//! Analysis of a geographic parcel: projection, classification and footprint fitting in one pass.

use borg_types::cartesian::{CartesianPolygon, Point2};
use borg_types::geo::impls::projection::TangentPlaneProjection;
use borg_types::geo::impls::GeoPoint2d;
use borg_types::geo::{GeodeticMultiPolygon, InvertedProjection, Projection};
use borg_types::impls::{GeoMultiPolygon, GeoPolygon, PlanarPolygon};
use borg_types::{MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};

use crate::classify::{ClassifyMultiPolygon, ShapeKind, ShapeMeasurements};
use crate::layout::{layout_rectangle_with, LayoutOptions, LayoutResult};

/// Named rectangle to fit into parcels, sizes in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    /// Name used to report the placement.
    pub name: String,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Footprint {
    /// Creates a new footprint.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// Layout result of one footprint in a parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintPlacement {
    /// Name of the footprint.
    pub name: String,
    /// Result in the tangent plane of the parcel.
    pub layout: LayoutResult,
    /// Center of the placed footprint in geographic coordinates.
    pub location: Option<GeoPoint2d>,
    /// Outline of the placed footprint in geographic coordinates.
    pub outline: Option<GeoPolygon>,
}

impl FootprintPlacement {
    /// Returns true if the footprint was analyzed and fits into the parcel.
    pub fn fits(&self) -> bool {
        self.layout.analyzed && self.layout.fits
    }
}

/// Result of [`analyze_parcel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelAnalysis {
    /// Shape class of the projected parcel.
    pub shape: ShapeKind,
    /// Side lengths, for triangles and four-vertex shapes.
    pub measurements: Option<ShapeMeasurements>,
    /// Planar area of the parcel in square meters.
    pub area: f64,
    /// Center of the tangent plane the parcel was analyzed in.
    pub projection_center: Option<GeoPoint2d>,
    /// Placements in the order of the requested footprints. Empty if the parcel was not laid out.
    pub placements: Vec<FootprintPlacement>,
}

impl ParcelAnalysis {
    fn unlaid(shape: ShapeKind, projection_center: Option<GeoPoint2d>) -> Self {
        Self {
            shape,
            measurements: None,
            area: 0.0,
            projection_center,
            placements: vec![],
        }
    }

    /// Returns true if the layout solver analyzed the parcel for at least one footprint.
    pub fn analyzed(&self) -> bool {
        self.placements
            .iter()
            .any(|placement| placement.layout.analyzed)
    }

    /// Placement of the footprint with the given name.
    pub fn placement(&self, name: &str) -> Option<&FootprintPlacement> {
        self.placements
            .iter()
            .find(|placement| placement.name == name)
    }
}

/// Projects the parcel to the tangent plane at its centroid, classifies it and fits every footprint into it.
///
/// Parcels with several polygons, and parcels that cannot be projected, are classified but not laid out.
pub fn analyze_parcel(
    parcel: &GeoMultiPolygon,
    footprints: &[Footprint],
    options: &LayoutOptions,
) -> ParcelAnalysis {
    let Some(center) = parcel.geo_centroid() else {
        log::debug!("Parcel has no vertices");
        return ParcelAnalysis::unlaid(ShapeKind::Broken, None);
    };

    let Some(projection) = TangentPlaneProjection::<GeoPoint2d, Point2>::new(&center) else {
        log::warn!("Cannot build tangent plane at {center:?}");
        return ParcelAnalysis::unlaid(ShapeKind::Broken, None);
    };

    let Some(planar) = parcel.project_points(&projection) else {
        log::warn!("Parcel centered at {center:?} does not fit into its tangent plane");
        return ParcelAnalysis::unlaid(ShapeKind::Broken, Some(center));
    };

    let shape = planar.classify();
    log::debug!("Parcel centered at {center:?} classified as {shape}");

    let polygon: &PlanarPolygon = match planar.single() {
        Some(polygon) if shape != ShapeKind::Broken => polygon,
        _ => return ParcelAnalysis::unlaid(shape, Some(center)),
    };

    let unprojection = InvertedProjection::new(&projection);
    let placements = footprints
        .iter()
        .map(|footprint| {
            let layout = layout_rectangle_with(polygon, footprint.width, footprint.height, options);
            FootprintPlacement {
                name: footprint.name.clone(),
                layout,
                location: layout
                    .placement()
                    .and_then(|(center, _)| projection.unproject(&center)),
                outline: layout
                    .footprint_outline(footprint.width, footprint.height)
                    .and_then(|outline| outline.project_points(&unprojection)),
            }
        })
        .collect();

    ParcelAnalysis {
        shape,
        measurements: ShapeMeasurements::measure(polygon, shape),
        area: polygon.area(),
        projection_center: Some(center),
        placements,
    }
}

/// Aggregated counters over many parcel analyses.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Number of recorded parcels.
    pub total: usize,
    /// Parcels without a usable outer ring.
    pub broken: usize,
    /// Triangles.
    pub triangles: usize,
    /// Rectangles.
    pub rectangles: usize,
    /// Rectangles and quadrilaterals.
    pub four_point: usize,
    /// Parcels with more than one polygon.
    pub multipolygons: usize,
    /// Polygons with holes.
    pub with_holes: usize,
    /// Parcels that are not a single convex polygon: multipolygons, polygons with holes and complex polygons.
    pub non_convex: usize,
    /// Parcels the layout solver did not analyze.
    pub not_analyzed: usize,
}

impl AnalysisStats {
    /// Adds the analysis to the counters.
    pub fn record(&mut self, analysis: &ParcelAnalysis) {
        self.total += 1;

        match analysis.shape {
            ShapeKind::Multipolygon => {
                self.multipolygons += 1;
                self.non_convex += 1;
            }
            ShapeKind::PolygonWithHoles => {
                self.with_holes += 1;
                self.non_convex += 1;
            }
            ShapeKind::ComplexPolygon => self.non_convex += 1,
            ShapeKind::Broken => self.broken += 1,
            ShapeKind::Triangle => self.triangles += 1,
            ShapeKind::Rectangle => {
                self.rectangles += 1;
                self.four_point += 1;
            }
            ShapeKind::Quadrilateral => self.four_point += 1,
            ShapeKind::ConvexPolygon => {}
        }

        if !analysis.analyzed() {
            self.not_analyzed += 1;
        }
    }
}

impl<'a> Extend<&'a ParcelAnalysis> for AnalysisStats {
    fn extend<I: IntoIterator<Item = &'a ParcelAnalysis>>(&mut self, iter: I) {
        for analysis in iter {
            self.record(analysis);
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use borg_types::geo::GeoPoint;

    use super::*;

    fn parcel(points: &[[f64; 2]]) -> GeoMultiPolygon {
        let mut ring = points.to_vec();
        ring.push(points[0]);
        GeoMultiPolygon::from_coordinates(&[vec![ring]]).unwrap()
    }

    fn rectangle_parcel() -> GeoMultiPolygon {
        parcel(&[
            [-73.998824, 40.716576],
            [-73.998862, 40.716515],
            [-73.998523, 40.716396],
            [-73.998485, 40.716457],
        ])
    }

    #[test]
    fn rectangle_parcel_is_analyzed() {
        let footprints = [Footprint::new("small", 3.6576, 10.668), Footprint::new("huge", 20.0, 40.0)];
        let analysis = analyze_parcel(&rectangle_parcel(), &footprints, &LayoutOptions::default());

        assert_eq!(analysis.shape, ShapeKind::Rectangle);
        assert_matches!(
            analysis.measurements,
            Some(ShapeMeasurements::Rectangle { long, short }) if long > 30.0 && short > 7.0
        );
        assert!(analysis.area > 200.0);
        assert!(analysis.analyzed());

        let small = analysis.placement("small").unwrap();
        assert!(small.fits());
        let location = small.location.unwrap();
        assert!((location.lon() - -73.99867).abs() < 1e-4);
        assert!((location.lat() - 40.71649).abs() < 1e-4);
        assert_eq!(small.outline.as_ref().unwrap().outer_ring.points.len(), 4);

        let huge = analysis.placement("huge").unwrap();
        assert!(!huge.fits());
        assert_eq!(huge.location, None);
        assert_eq!(huge.outline, None);
    }

    #[test]
    fn multipolygon_is_not_laid_out() {
        let square = |lon: f64| {
            vec![vec![
                [lon, 40.0],
                [lon + 0.001, 40.0],
                [lon + 0.001, 40.001],
                [lon, 40.001],
                [lon, 40.0],
            ]]
        };
        let parcel = GeoMultiPolygon::from_coordinates(&[square(-74.0), square(-73.99)]).unwrap();
        let analysis = analyze_parcel(
            &parcel,
            &[Footprint::new("small", 3.6576, 10.668)],
            &LayoutOptions::default(),
        );

        assert_eq!(analysis.shape, ShapeKind::Multipolygon);
        assert!(analysis.placements.is_empty());
        assert!(!analysis.analyzed());
    }

    #[test]
    fn empty_parcel_is_broken() {
        let analysis = analyze_parcel(
            &GeoMultiPolygon::default(),
            &[Footprint::new("small", 3.6576, 10.668)],
            &LayoutOptions::default(),
        );
        assert_eq!(analysis.shape, ShapeKind::Broken);
        assert_eq!(analysis.projection_center, None);
    }

    #[test]
    fn stats() {
        let footprints = [Footprint::new("small", 3.6576, 10.668)];
        let rectangle = analyze_parcel(&rectangle_parcel(), &footprints, &LayoutOptions::default());
        let empty = analyze_parcel(&GeoMultiPolygon::default(), &footprints, &LayoutOptions::default());

        let mut stats = AnalysisStats::default();
        stats.extend([&rectangle, &empty, &rectangle]);

        assert_eq!(
            stats,
            AnalysisStats {
                total: 3,
                broken: 1,
                rectangles: 2,
                four_point: 2,
                not_analyzed: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn analysis_serializes_shape_tags() {
        let analysis = analyze_parcel(
            &rectangle_parcel(),
            &[Footprint::new("small", 3.6576, 10.668)],
            &LayoutOptions::default(),
        );
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["shape"], "rectangle");
        assert_eq!(json["placements"][0]["name"], "small");
        assert_eq!(json["placements"][0]["layout"]["fits"], true);
    }
}
