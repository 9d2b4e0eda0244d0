// src/math/types/bounds.rs

use crate::math::geometry::sphere::coordinates::GeoPoint;
use crate::math::types::Ring;
use rand::Rng;

/// Geografische Bounding Box in Grad (Längen- und Breitengrad)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GeoBounds {
    /// Leere Bounding Box (ungültig, bis ein Punkt hinzugefügt wurde)
    pub fn empty() -> Self {
        Self {
            min_lon: 180.0,
            max_lon: -180.0,
            min_lat: 90.0,
            max_lat: -90.0,
        }
    }

    /// Umschließt alle Punkte aller Ringe
    pub fn from_rings<'a, I>(rings: I) -> Self
    where
        I: IntoIterator<Item = &'a Ring>,
    {
        let mut bounds = Self::empty();
        for ring in rings {
            for coord in ring.coords() {
                bounds.include(coord.x, coord.y);
            }
        }
        bounds
    }

    /// Erweitert die Box um einen Punkt
    pub fn include(&mut self, lon: f64, lat: f64) {
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
    }

    /// Prüft ob die Bounding Box gültig ist (mindestens ein Punkt enthalten)
    pub fn is_valid(&self) -> bool {
        self.min_lon <= self.max_lon && self.min_lat <= self.max_lat
    }

    pub fn width(&self) -> f64 {
        (self.max_lon - self.min_lon).max(0.0)
    }

    pub fn height(&self) -> f64 {
        (self.max_lat - self.min_lat).max(0.0)
    }

    /// Punkt liegt innerhalb (inklusive Rand)
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_lon..=self.max_lon).contains(&point.longitude)
            && (self.min_lat..=self.max_lat).contains(&point.latitude)
    }

    /// Gleichverteilter Zufallspunkt innerhalb der Box.
    /// Entartete Boxen (Breite oder Höhe 0) liefern Punkte auf der Kante statt zu paniken.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> GeoPoint {
        let lon = self.min_lon + rng.random::<f64>() * self.width();
        let lat = self.min_lat + rng.random::<f64>() * self.height();
        GeoPoint::new(lon, lat)
    }
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<geo::Rect<f64>> for GeoBounds {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self {
            min_lon: rect.min().x,
            max_lon: rect.max().x,
            min_lat: rect.min().y,
            max_lat: rect.max().y,
        }
    }
}
