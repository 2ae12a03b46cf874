use crate::geo::Projection;
use crate::polygon::Polygon;
use crate::ring::Ring;

/// Geometry consisting of several polygons.
pub trait MultiPolygon {
    /// Polygon type.
    type Polygon: Polygon;

    /// Iterates over polygons.
    fn polygons(&self) -> impl Iterator<Item = &Self::Polygon>;

    /// Number of polygons.
    fn polygon_count(&self) -> usize {
        self.polygons().count()
    }

    /// Project all the points of all the polygons with the given `projection`.
    fn project_points<Proj>(
        &self,
        projection: &Proj,
    ) -> Option<crate::impls::MultiPolygon<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = <<Self::Polygon as Polygon>::Ring as Ring>::Point> + ?Sized,
    {
        Some(
            self.polygons()
                .map(|polygon| polygon.project_points(projection))
                .collect::<Option<Vec<_>>>()?
                .into(),
        )
    }
}
