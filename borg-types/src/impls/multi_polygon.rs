use serde::{Deserialize, Serialize};

use crate::impls::polygon::Polygon;

/// A set of polygons.
#[derive(Debug, Clone, Default, PartialEq, PartialOrd, Hash, Deserialize, Serialize)]
pub struct MultiPolygon<P> {
    /// Inner polygons.
    pub parts: Vec<Polygon<P>>,
}

impl<P> From<Vec<Polygon<P>>> for MultiPolygon<P> {
    fn from(parts: Vec<Polygon<P>>) -> Self {
        Self { parts }
    }
}

impl<P> From<Polygon<P>> for MultiPolygon<P> {
    fn from(polygon: Polygon<P>) -> Self {
        Self {
            parts: vec![polygon],
        }
    }
}

impl<P> MultiPolygon<P> {
    /// Returns reference to the inner polygons.
    pub fn parts(&self) -> &[Polygon<P>] {
        &self.parts
    }

    /// Returns the only polygon of the collection, or `None` if it is empty or has several polygons.
    pub fn single(&self) -> Option<&Polygon<P>> {
        match self.parts.as_slice() {
            [polygon] => Some(polygon),
            _ => None,
        }
    }
}

impl<P> crate::multi_polygon::MultiPolygon for MultiPolygon<P> {
    type Polygon = Polygon<P>;

    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon> {
        self.parts.iter()
    }

    fn polygon_count(&self) -> usize {
        self.parts.len()
    }
}
