// src/atlas/locations.rs

use crate::math::error::{GlobeError, GlobeResult};
use crate::math::geometry::sphere::coordinates::GeoPoint;
use crate::math::types::*;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

const BUILTIN_CATALOG: &str = include_str!("../../assets/locations.json");

/// Verweis auf ein Land im Atlas; die Reihenfolge in einer Liste bestimmt die Tour
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct SelectedLocation {
    pub name: String,
    pub id: String,
}

impl SelectedLocation {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    pub countries: Vec<SelectedLocation>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationGroup {
    pub label: String,
    pub companies: Vec<Company>,
}

/// Firmen nach Gruppe plus Zielpunkt der Kamera je Standortname
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationCatalog {
    pub groups: Vec<LocationGroup>,
    #[serde(default)]
    pub anchors: HashMap<String, GeoPoint>,
}

impl LocationCatalog {
    /// Der mitgelieferte Katalog
    pub fn builtin() -> GlobeResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    pub fn from_json_str(json: &str) -> GlobeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> GlobeResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.groups.iter().flat_map(|group| group.companies.iter())
    }

    pub fn company(&self, name: &str) -> GlobeResult<&Company> {
        self.companies()
            .find(|company| company.name == name)
            .ok_or_else(|| GlobeError::UnknownLocation {
                name: name.to_string(),
            })
    }

    /// Alle Standorte aller Firmen, jede Country-ID nur einmal (erste Nennung gewinnt)
    pub fn all_locations(&self) -> Vec<SelectedLocation> {
        let mut seen = HashSet::new();
        self.companies()
            .flat_map(|company| company.countries.iter())
            .filter(|location| seen.insert(location.id.as_str()))
            .cloned()
            .collect()
    }

    pub fn anchor(&self, name: &str) -> Option<GeoPoint> {
        self.anchors.get(name).copied()
    }

    /// Zielpunkt knapp über der Oberfläche; fehlender Anker ergibt `None`
    pub fn anchor_point(
        &self,
        location: &SelectedLocation,
        radius: f32,
        offset: f32,
    ) -> Option<Point3D> {
        self.anchor(&location.name)
            .map(|point| point.to_sphere(radius + offset))
    }

    /// Standorte ohne Anker (für Diagnose beim Laden)
    pub fn missing_anchors(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .companies()
            .flat_map(|company| company.countries.iter())
            .map(|location| location.name.as_str())
            .filter(|name| !self.anchors.contains_key(*name))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}
