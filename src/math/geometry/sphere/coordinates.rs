// src/math/geometry/sphere/coordinates.rs

use crate::math::{types::*, utils::*};
use serde::{Deserialize, Serialize};

/// Geografischer Punkt in Grad (Längengrad in [-180, 180], Breitengrad in [-90, 90])
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(alias = "lon")]
    pub longitude: f64,
    #[serde(alias = "lat")]
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Projektion auf eine Kugel mit gegebenem Radius
    pub fn to_sphere(&self, radius: f32) -> Point3D {
        CoordinateConverter::geo_to_sphere(*self, radius)
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(c: Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        Coord {
            x: p.longitude,
            y: p.latitude,
        }
    }
}

/// Konvertierungen zwischen Lon/Lat und der Y-up Kugel der Szene.
///
/// Polarwinkel φ = 90° − lat, Azimut θ = lon + 180°:
/// `x = −r·sinφ·cosθ`, `y = r·cosφ`, `z = r·sinφ·sinθ`.
/// Damit liegt (lon 0, lat 0) auf +X und der Nordpol auf +Y.
pub struct CoordinateConverter;

impl CoordinateConverter {
    pub fn geo_to_sphere(point: GeoPoint, radius: f32) -> Point3D {
        let phi = angles::deg_to_rad(90.0 - point.latitude);
        let theta = angles::deg_to_rad(point.longitude + 180.0);
        let r = radius as f64;

        Point3D::new(
            (-r * phi.sin() * theta.cos()) as f32,
            (r * phi.cos()) as f32,
            (r * phi.sin() * theta.sin()) as f32,
        )
    }

    /// Umkehrung von `geo_to_sphere`; der Radius geht dabei verloren.
    /// Für den Nullvektor wird (0, 0) geliefert.
    pub fn sphere_to_geo(point: Point3D) -> GeoPoint {
        let length = point.length();
        if length < constants::EPSILON {
            return GeoPoint::new(0.0, 0.0);
        }

        let n = point / length;
        let latitude = angles::rad_to_deg((n.y as f64).clamp(-1.0, 1.0).asin());
        let theta = (n.z as f64).atan2(-(n.x as f64));
        let longitude = angles::wrap_longitude(angles::rad_to_deg(theta) - 180.0);

        GeoPoint::new(longitude, latitude)
    }
}
