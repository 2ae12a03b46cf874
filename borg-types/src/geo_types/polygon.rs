use geo_types::{CoordNum, LineString};

use crate::geo::impls::GeoPoint2d;
use crate::geo::NewGeoPoint;
use crate::impls::{GeoPolygon, Ring};
use crate::polygon::Polygon;

impl<T: CoordNum> Polygon for geo_types::Polygon<T> {
    type Ring = LineString<T>;

    fn outer_ring(&self) -> &Self::Ring {
        self.exterior()
    }

    fn inner_rings(&self) -> impl Iterator<Item = &'_ Self::Ring> {
        self.interiors().iter()
    }
}

impl From<&geo_types::Polygon<f64>> for GeoPolygon {
    fn from(polygon: &geo_types::Polygon<f64>) -> Self {
        let read_ring = |ring: &LineString<f64>| -> Ring<GeoPoint2d> {
            crate::ring::Ring::iter_points(ring)
                .map(|coord| GeoPoint2d::lonlat(coord.x, coord.y))
                .collect::<Vec<_>>()
                .into()
        };

        GeoPolygon::new(
            read_ring(polygon.exterior()),
            polygon.interiors().iter().map(read_ring).collect(),
        )
    }
}
