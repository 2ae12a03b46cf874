/// Conversion of points from one coordinate space into another.
///
/// Both directions return `None` when the point cannot be represented in the target space.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Converts an input point into the output space.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Converts an output point back into the input space.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

impl<P: Projection + ?Sized> Projection for &P {
    type InPoint = P::InPoint;
    type OutPoint = P::OutPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        (**self).project(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        (**self).unproject(input)
    }
}

/// Projection that swaps the directions of the inner projection.
///
/// Used to convert planar geometries back into geographic coordinates with the
/// [`project_points`](crate::Polygon::project_points) methods of geometry traits.
#[derive(Debug, Clone, Copy)]
pub struct InvertedProjection<P> {
    inner: P,
}

impl<P: Projection> InvertedProjection<P> {
    /// Creates a new inverted projection.
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    /// Returns the wrapped projection.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Projection> Projection for InvertedProjection<P> {
    type InPoint = P::OutPoint;
    type OutPoint = P::InPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        self.inner.unproject(input)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        self.inner.project(input)
    }
}
