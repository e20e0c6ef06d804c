use super::Point;
use crate::{err, Result};

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Half the circumference of the Web Mercator sphere, in meters.
const MERCATOR_EXTENT: f64 = 20_037_508.342_789_244;

/// Web Mercator is undefined at the poles.
const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// A coordinate system, identified by its well-known id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpatialReference {
    pub wkid: u32,
}

impl SpatialReference {
    /// Geographic coordinates in degrees.
    pub const WGS84: Self = Self { wkid: 4326 };

    /// Spherical Mercator in meters.
    pub const WEB_MERCATOR: Self = Self { wkid: 3857 };

    pub const fn new(wkid: u32) -> Self {
        Self { wkid }
    }

    /// Projects one point into `to`.
    ///
    /// Only WGS84 and Web Mercator are known.
    pub fn project_point(self, p: Point, to: SpatialReference) -> Result<Point> {
        match (self, to) {
            (from, to) if from == to => Ok(p),
            (Self::WGS84, Self::WEB_MERCATOR) => {
                let lat = p.y.clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE);
                let x = p.x * MERCATOR_EXTENT / 180.0;
                let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
                Ok(Point::new(x, y * MERCATOR_EXTENT / 180.0))
            }
            (Self::WEB_MERCATOR, Self::WGS84) => {
                let lon = p.x * 180.0 / MERCATOR_EXTENT;
                let lat = (p.y * PI / MERCATOR_EXTENT).exp().atan() * 360.0 / PI - 90.0;
                Ok(Point::new(lon, lat))
            }
            (from, to) => Err(err!("cannot project from {from} to {to}")),
        }
    }
}

impl std::fmt::Display for SpatialReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wkid {}", self.wkid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Point, b: Point) {
        assert!((a.x - b.x).abs() < 1e-6, "{a:?} != {b:?}");
        assert!((a.y - b.y).abs() < 1e-6, "{a:?} != {b:?}");
    }

    #[test]
    fn origin_maps_to_origin() {
        let p = SpatialReference::WGS84
            .project_point(Point::new(0.0, 0.0), SpatialReference::WEB_MERCATOR)
            .unwrap();
        assert_close(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn antimeridian_is_the_extent() {
        let p = SpatialReference::WGS84
            .project_point(Point::new(180.0, 0.0), SpatialReference::WEB_MERCATOR)
            .unwrap();
        assert_close(p, Point::new(MERCATOR_EXTENT, 0.0));
    }

    #[test]
    fn round_trip() {
        let ottawa = Point::new(-75.6972, 45.4215);
        let there = SpatialReference::WGS84
            .project_point(ottawa, SpatialReference::WEB_MERCATOR)
            .unwrap();
        let back = SpatialReference::WEB_MERCATOR
            .project_point(there, SpatialReference::WGS84)
            .unwrap();
        assert_close(back, ottawa);
    }

    #[test]
    fn unknown_pair_fails() {
        let err = SpatialReference::new(2154)
            .project_point(Point::new(0.0, 0.0), SpatialReference::WGS84)
            .unwrap_err();
        assert_eq!(err.to_string(), "cannot project from wkid 2154 to wkid 4326");
    }
}
