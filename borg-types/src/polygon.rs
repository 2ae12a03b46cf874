use crate::geo::Projection;
use crate::ring::Ring;
use crate::segment::Segment;

/// Polygon geometry. Polygon consists of one outer ring, and zero or more inner rings (holes).
pub trait Polygon {
    /// Ring type.
    type Ring: Ring;

    /// Outer ring of the polygon.
    fn outer_ring(&self) -> &Self::Ring;
    /// Iterates over the holes of the polygon.
    fn inner_rings(&self) -> impl Iterator<Item = &'_ Self::Ring>;

    /// Iterates over all rings of the polygon starting with the outer one.
    fn iter_rings(&self) -> impl Iterator<Item = &'_ Self::Ring> {
        std::iter::once(self.outer_ring()).chain(self.inner_rings())
    }

    /// Iterates over all segments of all rings of the polygon.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, <Self::Ring as Ring>::Point>> {
        self.iter_rings().flat_map(Self::Ring::iter_segments)
    }

    /// Returns true if the polygon has at least one hole.
    fn has_holes(&self) -> bool {
        self.inner_rings().next().is_some()
    }

    /// Project all the points of the polygon with the given `projection`.
    fn project_points<Proj>(
        &self,
        projection: &Proj,
    ) -> Option<crate::impls::Polygon<Proj::OutPoint>>
    where
        Proj: Projection<InPoint = <Self::Ring as Ring>::Point> + ?Sized,
    {
        Some(crate::impls::Polygon::new(
            self.outer_ring().project_points(projection)?,
            self.inner_rings()
                .map(|ring| ring.project_points(projection))
                .collect::<Option<Vec<_>>>()?,
        ))
    }
}
