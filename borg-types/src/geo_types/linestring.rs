use geo_types::{Coord, CoordNum, LineString};

use crate::ring::Ring;

impl<T: CoordNum> Ring for LineString<T> {
    type Point = Coord<T>;

    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point> {
        if self.is_closed() {
            self.0[..(self.0.len().max(1) - 1)].iter()
        } else {
            self.0.iter()
        }
    }
}
