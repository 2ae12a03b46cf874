use geo_types::{Coord, CoordNum, Point};
use nalgebra::Scalar;
use num_traits::{Bounded, Float, FromPrimitive};

use crate::cartesian::{CartesianPoint2d, NewCartesianPoint2d};
use crate::geo::{GeoPoint, NewGeoPoint};

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> CartesianPoint2d for Coord<T> {
    type Num = T;

    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> NewCartesianPoint2d<T> for Coord<T> {
    fn new(x: T, y: T) -> Self {
        Coord { x, y }
    }
}

impl<T: CoordNum + Float> GeoPoint for Coord<T> {
    type Num = T;

    fn lat(&self) -> T {
        self.y
    }

    fn lon(&self) -> T {
        self.x
    }
}

impl<T: CoordNum + Float> NewGeoPoint<T> for Coord<T> {
    fn latlon(lat: T, lon: T) -> Self {
        Coord { x: lon, y: lat }
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> CartesianPoint2d for Point<T> {
    type Num = T;

    fn x(&self) -> T {
        CartesianPoint2d::x(&self.0)
    }

    fn y(&self) -> T {
        CartesianPoint2d::y(&self.0)
    }
}

impl<T: CoordNum + Bounded + Scalar + FromPrimitive> NewCartesianPoint2d<T> for Point<T> {
    fn new(x: T, y: T) -> Self {
        Point(<Coord<T> as NewCartesianPoint2d<T>>::new(x, y))
    }
}

impl<T: CoordNum + Float> GeoPoint for Point<T> {
    type Num = T;

    fn lat(&self) -> T {
        GeoPoint::lat(&self.0)
    }

    fn lon(&self) -> T {
        GeoPoint::lon(&self.0)
    }
}

impl<T: CoordNum + Float> NewGeoPoint<T> for Point<T> {
    fn latlon(lat: T, lon: T) -> Self {
        Point(Coord::latlon(lat, lon))
    }
}
