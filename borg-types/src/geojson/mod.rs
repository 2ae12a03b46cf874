//! Reading parcel geometries from GeoJSON.

use geojson::{PolygonType, Value};

use crate::coords::PolygonCoordinates;
use crate::error::BorgTypesError;
use crate::impls::GeoMultiPolygon;

mod point;
pub use point::GeoJsonPoint;

impl TryFrom<&Value> for GeoMultiPolygon {
    type Error = BorgTypesError;

    /// Converts a `Polygon` or `MultiPolygon` GeoJSON value. Rings are validated the same way as in
    /// [`GeoMultiPolygon::from_coordinates`].
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let coordinates = match value {
            Value::Polygon(polygon) => vec![convert_polygon(polygon)?],
            Value::MultiPolygon(polygons) => polygons
                .iter()
                .map(convert_polygon)
                .collect::<Result<Vec<_>, _>>()?,
            Value::Point(_) => return Err(unsupported("Point")),
            Value::MultiPoint(_) => return Err(unsupported("MultiPoint")),
            Value::LineString(_) => return Err(unsupported("LineString")),
            Value::MultiLineString(_) => return Err(unsupported("MultiLineString")),
            Value::GeometryCollection(_) => return Err(unsupported("GeometryCollection")),
        };

        Self::from_coordinates(&coordinates)
    }
}

impl TryFrom<&geojson::Geometry> for GeoMultiPolygon {
    type Error = BorgTypesError;

    fn try_from(geometry: &geojson::Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&geometry.value)
    }
}

fn convert_polygon(polygon: &PolygonType) -> Result<PolygonCoordinates, BorgTypesError> {
    polygon
        .iter()
        .map(|ring| {
            ring.iter()
                .map(|position| GeoJsonPoint::try_from(position.clone()).map(|p| p.lonlat()))
                .collect()
        })
        .collect()
}

fn unsupported(kind: &str) -> BorgTypesError {
    BorgTypesError::UnsupportedGeometry(kind.to_string())
}
