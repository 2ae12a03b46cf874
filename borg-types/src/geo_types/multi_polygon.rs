use geo_types::{CoordNum, MultiPolygon, Polygon};

use crate::impls::{GeoMultiPolygon, GeoPolygon};

impl<T: CoordNum> crate::multi_polygon::MultiPolygon for MultiPolygon<T> {
    type Polygon = Polygon<T>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.0.iter()
    }
}

impl From<&MultiPolygon<f64>> for GeoMultiPolygon {
    fn from(multi_polygon: &MultiPolygon<f64>) -> Self {
        multi_polygon
            .0
            .iter()
            .map(GeoPolygon::from)
            .collect::<Vec<_>>()
            .into()
    }
}
