// src/math/geometry/polygon/country.rs

use crate::math::types::*;
use geo::{MultiPolygon, Polygon};

/// Ein Polygon aus Lon/Lat-Ringen (Außenrand plus optionale Löcher).
/// Alle Ringe werden gleich behandelt; Löcher werden nicht abgezogen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonBoundary {
    pub rings: Vec<Ring>,
}

impl PolygonBoundary {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Erstellt ein Polygon mit einem einzelnen Ring aus (lon, lat)-Paaren
    pub fn from_lon_lat(points: &[(f64, f64)]) -> Self {
        Self::new(vec![points.iter().map(|&(lon, lat)| Coord { x: lon, y: lat }).collect()])
    }

    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::from_rings(&self.rings)
    }

    pub fn is_empty(&self) -> bool {
        self.rings.iter().all(|ring| ring.0.is_empty())
    }
}

/// Geometrie eines Landes, wie sie aus dem Weltdatensatz dekodiert wird
#[derive(Debug, Clone, PartialEq)]
pub enum CountryGeometry {
    Polygon(PolygonBoundary),
    MultiPolygon(Vec<PolygonBoundary>),
}

impl CountryGeometry {
    /// Alle Teilpolygone (ein Element für `Polygon`)
    pub fn polygons(&self) -> &[PolygonBoundary] {
        match self {
            Self::Polygon(polygon) => std::slice::from_ref(polygon),
            Self::MultiPolygon(polygons) => polygons,
        }
    }

    /// Iteriert über alle Ringe aller Teilpolygone
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons().iter().flat_map(|polygon| polygon.rings.iter())
    }

    pub fn ring_count(&self) -> usize {
        self.rings().count()
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Self::MultiPolygon(_))
    }

    /// Bounding Box über alle Ringe
    pub fn bounds(&self) -> GeoBounds {
        GeoBounds::from_rings(self.rings())
    }

    /// Umwandlung in `geo`-Typen (erster Ring = Außenrand, weitere = Löcher)
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        MultiPolygon::new(
            self.polygons()
                .iter()
                .filter_map(|boundary| {
                    let mut rings = boundary.rings.iter().cloned();
                    let exterior = rings.next()?;
                    Some(Polygon::new(exterior, rings.collect()))
                })
                .collect(),
        )
    }
}

impl From<Polygon<f64>> for PolygonBoundary {
    fn from(polygon: Polygon<f64>) -> Self {
        let (exterior, interiors) = polygon.into_inner();
        let mut rings = Vec::with_capacity(interiors.len() + 1);
        rings.push(exterior);
        rings.extend(interiors);
        Self::new(rings)
    }
}

impl From<MultiPolygon<f64>> for CountryGeometry {
    fn from(multi: MultiPolygon<f64>) -> Self {
        Self::MultiPolygon(multi.into_iter().map(PolygonBoundary::from).collect())
    }
}
