//! Shape classification of land parcels and fitting of rectangular building footprints into them.
//!
//! The parcel geometry is expected in a planar frame with meter units, usually the tangent plane
//! of the parcel (see [`borg_types::geo::impls::projection::TangentPlaneProjection`]).
//! [`analyze_parcel`] does the projection, classification and layout of geographic parcels in one call.
//!
//! ```
//! use borg_layout::{layout_rectangle, ClassifyPolygon, ShapeKind};
//! use borg_types::cartesian::Point2;
//! use borg_types::impls::PlanarPolygon;
//!
//! let parcel = PlanarPolygon::from(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(20.0, 0.0),
//!     Point2::new(20.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//! assert_eq!(parcel.classify(), ShapeKind::Rectangle);
//!
//! let result = layout_rectangle(&parcel, 5.0, 8.0);
//! assert!(result.fits);
//! ```

pub mod analysis;
pub mod classify;
pub mod layout;

pub use analysis::{analyze_parcel, AnalysisStats, Footprint, FootprintPlacement, ParcelAnalysis};
pub use classify::{ClassifyMultiPolygon, ClassifyPolygon, ShapeKind, ShapeMeasurements};
pub use layout::{layout_rectangle, layout_rectangle_with, LayoutOptions, LayoutResult};
