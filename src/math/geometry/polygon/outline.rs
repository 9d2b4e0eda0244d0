// src/math/geometry/polygon/outline.rs

use super::country::CountryGeometry;
use crate::math::{geometry::sphere::coordinates::GeoPoint, types::*};

/// Projiziert jeden Ring als geschlossene 3D-Linie auf die Kugel (Ländergrenzen).
/// Ringe mit weniger als 2 Punkten werden übersprungen.
pub fn outline_points(geometry: &CountryGeometry, radius: f32) -> Vec<Vec<Point3D>> {
    geometry
        .rings()
        .filter(|ring| ring.0.len() >= 2)
        .map(|ring| {
            let mut line: Vec<Point3D> = ring
                .coords()
                .map(|&c| GeoPoint::from(c).to_sphere(radius))
                .collect();
            if ring.0.first() != ring.0.last() {
                line.push(line[0]);
            }
            line
        })
        .collect()
}
