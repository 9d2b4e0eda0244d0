// src/math/geometry/polygon/area.rs

use super::country::{CountryGeometry, PolygonBoundary};
use crate::math::{types::*, utils::*};

/// Näherungsweise Fläche eines Rings auf der Einheitskugel (sphärischer Exzess).
///
/// Summiert `Δlon · (2 + sin(lat1) + sin(lat2))` über aufeinanderfolgende Punkte
/// (inklusive Schlusskante zurück zum ersten Punkt) und halbiert den Betrag.
/// Ringe mit weniger als 3 Punkten haben die Fläche 0.
pub fn ring_area(ring: &Ring) -> f64 {
    let coords = &ring.0;
    if coords.len() < 3 {
        return 0.0;
    }

    let closing = std::iter::once(&coords[0]);
    let sum: f64 = coords
        .iter()
        .zip(coords.iter().skip(1).chain(closing))
        .map(|(p1, p2)| {
            let lat1 = angles::deg_to_rad(p1.y);
            let lat2 = angles::deg_to_rad(p2.y);
            angles::deg_to_rad(p2.x - p1.x) * (2.0 + lat1.sin() + lat2.sin())
        })
        .sum();

    (sum / 2.0).abs()
}

/// Summe der Ringflächen eines Polygons (Löcher werden addiert, nicht abgezogen)
pub fn boundary_area(boundary: &PolygonBoundary) -> f64 {
    boundary.rings.iter().map(ring_area).sum()
}

/// Summe über alle Teilpolygone
pub fn geometry_area(geometry: &CountryGeometry) -> f64 {
    geometry.polygons().iter().map(boundary_area).sum()
}

/// Fläche relativ zur Halbkugel (2π)
pub fn relative_area(geometry: &CountryGeometry) -> f64 {
    geometry_area(geometry) / constants::HALF_SPHERE_AREA
}
