use std::marker::PhantomData;

use nalgebra::{Rotation3, Vector3};

use crate::cartesian::{CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, Point2};
use crate::geo::datum::Datum;
use crate::geo::impls::GeoPoint2d;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;

/// Gnomonic projection onto the plane touching the sphere at a chosen center point.
///
/// The center maps to the origin, `x` points east and `y` points north, both in meters. Distances and angles are
/// accurate near the center only, which is enough for parcel-sized geometries.
///
/// A point is projected by scaling its earth-centered coordinates until they reach the tangent plane, moving the
/// center to the origin and rotating the plane so that its normal becomes the `x` axis. The remaining `y` and `z`
/// coordinates are the planar `x` and `y`. The rotation is computed once on construction.
#[derive(Debug, Copy, Clone)]
pub struct TangentPlaneProjection<In = GeoPoint2d, Out = Point2> {
    datum: Datum,
    center: Vector3<f64>,
    rotation: Rotation3<f64>,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> TangentPlaneProjection<In, Out> {
    /// Creates a projection centered at the given point on the [`Datum::WGS84`] sphere.
    ///
    /// Returns `None` if the center coordinates are not finite.
    pub fn new(center: &impl GeoPoint<Num = f64>) -> Option<Self> {
        Self::with_datum(center, Datum::WGS84)
    }

    /// Creates a projection centered at the given point on the sphere of the datum radius.
    pub fn with_datum(center: &impl GeoPoint<Num = f64>, datum: Datum) -> Option<Self> {
        let space = center.to_space(&datum)?;
        let center_vector = Vector3::new(space.x(), space.y(), space.z());
        if !center_vector.iter().all(|v| v.is_finite()) {
            return None;
        }

        let rotation = Rotation3::from_axis_angle(&Vector3::y_axis(), center.lat_rad())
            * Rotation3::from_axis_angle(&Vector3::z_axis(), -center.lon_rad());

        Some(Self {
            datum,
            center: center_vector,
            rotation,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        })
    }

    /// Geographic coordinates of the projection center.
    pub fn center(&self) -> Option<GeoPoint2d> {
        GeoPoint2d::from_space(
            &crate::cartesian::Point3::new(self.center.x, self.center.y, self.center.z),
            &self.datum,
        )
    }

    /// Datum of the projection.
    pub fn datum(&self) -> Datum {
        self.datum
    }
}

impl<In, Out> Projection for TangentPlaneProjection<In, Out>
where
    In: NewGeoPoint<f64>,
    Out: NewCartesianPoint2d<f64>,
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let space = input.to_space(&self.datum)?;
        let point = Vector3::new(space.x(), space.y(), space.z());

        let alignment = point.dot(&self.center);
        if alignment <= 0.0 {
            return None;
        }

        let scale = self.center.norm_squared() / alignment;
        let local = self.rotation * (point * scale - self.center);

        if local.y.is_finite() && local.z.is_finite() {
            Some(Out::new(local.y, local.z))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let local = Vector3::new(0.0, input.x(), input.y());
        let on_plane = self.rotation.inverse_transform_vector(&local) + self.center;
        let point = GeoPoint2d::from_space(
            &crate::cartesian::Point3::new(on_plane.x, on_plane.y, on_plane.z),
            &self.datum,
        )?;

        Some(In::latlon(point.lat(), point.lon()))
    }
}
