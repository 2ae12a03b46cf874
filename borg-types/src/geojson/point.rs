use geojson::Position;

use crate::error::BorgTypesError;
use crate::geo::GeoPoint;

/// GeoJSON position with at least longitude and latitude. Further ordinates are kept but ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJsonPoint(Position);

impl TryFrom<Position> for GeoJsonPoint {
    type Error = BorgTypesError;

    fn try_from(value: Position) -> Result<Self, Self::Error> {
        if value.len() < 2 {
            Err(BorgTypesError::Conversion(
                "point must contain at least 2 dimensions".to_string(),
            ))
        } else {
            Ok(GeoJsonPoint(value))
        }
    }
}

impl GeoJsonPoint {
    pub(super) fn lonlat(&self) -> [f64; 2] {
        [self.0[0], self.0[1]]
    }
}

impl GeoPoint for GeoJsonPoint {
    type Num = f64;

    fn lat(&self) -> Self::Num {
        self.0[1]
    }

    fn lon(&self) -> Self::Num {
        self.0[0]
    }
}
