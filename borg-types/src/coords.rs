//! Conversion between the typed geometry model and nested coordinate arrays.
//!
//! Datasets store multipolygons as `[polygon][ring][point][lon, lat]` arrays, where every ring repeats its first
//! point at the end. The typed model keeps rings without the repeated point, see [`crate::ring`].

use crate::error::BorgTypesError;
use crate::geo::impls::GeoPoint2d;
use crate::geo::{GeoPoint, NewGeoPoint};
use crate::impls::{GeoMultiPolygon, GeoPolygon, Ring};

/// Nested coordinates of a single polygon: rings of `[lon, lat]` points, the outer ring first.
pub type PolygonCoordinates = Vec<Vec<[f64; 2]>>;

/// Minimum number of serialized points in a ring, including the closing one.
pub const MIN_RING_POINTS: usize = 4;

impl GeoMultiPolygon {
    /// Converts nested coordinate arrays into a multipolygon.
    ///
    /// Every ring must have at least [`MIN_RING_POINTS`] serialized points and must not visit any vertex twice,
    /// except for the closing point. A closing point equal to the first one is dropped.
    pub fn from_coordinates(coordinates: &[PolygonCoordinates]) -> Result<Self, BorgTypesError> {
        coordinates
            .iter()
            .enumerate()
            .map(|(polygon_index, polygon)| {
                let mut rings = polygon
                    .iter()
                    .enumerate()
                    .map(|(ring_index, ring)| read_ring(ring, polygon_index, ring_index));

                let outer_ring = rings.next().ok_or_else(|| {
                    BorgTypesError::Conversion(format!("polygon {polygon_index} has no rings"))
                })??;
                let inner_rings = rings.collect::<Result<Vec<_>, _>>()?;

                Ok(GeoPolygon::new(outer_ring, inner_rings))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }

    /// Converts the multipolygon into nested coordinate arrays, repeating the first point of every ring at its end.
    pub fn to_coordinates(&self) -> Vec<PolygonCoordinates> {
        self.parts
            .iter()
            .map(|polygon| {
                std::iter::once(&polygon.outer_ring)
                    .chain(&polygon.inner_rings)
                    .map(write_ring)
                    .collect()
            })
            .collect()
    }
}

fn read_ring(
    coordinates: &[[f64; 2]],
    polygon: usize,
    ring: usize,
) -> Result<Ring<GeoPoint2d>, BorgTypesError> {
    if coordinates.len() < MIN_RING_POINTS {
        return Err(BorgTypesError::RingTooShort {
            polygon,
            ring,
            len: coordinates.len(),
        });
    }

    let last = coordinates.len() - 1;
    for (i, point) in coordinates[..last].iter().enumerate() {
        if let Some(offset) = coordinates[i + 1..last].iter().position(|other| other == point) {
            return Err(BorgTypesError::SelfTouchingRing {
                polygon,
                ring,
                point: i + 1 + offset,
            });
        }
    }

    let points = if coordinates[0] == coordinates[last] {
        &coordinates[..last]
    } else {
        coordinates
    };

    Ok(Ring::new(
        points
            .iter()
            .map(|[lon, lat]| GeoPoint2d::lonlat(*lon, *lat))
            .collect(),
    ))
}

fn write_ring(ring: &Ring<GeoPoint2d>) -> Vec<[f64; 2]> {
    ring.points
        .iter()
        .chain(ring.points.first())
        .map(|point| [point.lon(), point.lat()])
        .collect()
}
