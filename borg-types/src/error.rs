//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Geometry computations in this crate never fail. Errors are only produced when raw coordinates coming from
/// outside (nested coordinate arrays, GeoJSON) are converted into the typed geometry model.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BorgTypesError {
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// A serialized ring has fewer points than a closed triangle needs.
    #[error("ring {ring} of polygon {polygon} has {len} points, at least 4 are required")]
    RingTooShort {
        /// Index of the polygon in the collection.
        polygon: usize,
        /// Index of the ring in the polygon (0 is the outer ring).
        ring: usize,
        /// Number of serialized points, including the closing one.
        len: usize,
    },
    /// A ring visits the same vertex twice.
    #[error("ring {ring} of polygon {polygon} touches itself at point {point}")]
    SelfTouchingRing {
        /// Index of the polygon in the collection.
        polygon: usize,
        /// Index of the ring in the polygon (0 is the outer ring).
        ring: usize,
        /// Index of the repeated point.
        point: usize,
    },
    /// Geometry kind that cannot be represented as a multipolygon.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),
}
