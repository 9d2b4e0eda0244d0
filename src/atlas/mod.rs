// src/atlas/mod.rs

pub mod locations;
pub mod topology;

pub use locations::{Company, LocationCatalog, LocationGroup, SelectedLocation};
pub use topology::{DecodedCountry, Topology};

use crate::math::error::GlobeResult;
use crate::math::geometry::polygon::CountryGeometry;
use bevy::log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
struct AtlasEntry {
    name: Option<String>,
    geometry: CountryGeometry,
}

/// Ländergeometrien nach ID. Wird einmal geladen und danach nur noch gelesen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountryAtlas {
    countries: HashMap<String, AtlasEntry>,
}

impl CountryAtlas {
    pub fn from_topology(topology: &Topology, object_name: &str) -> GlobeResult<Self> {
        let decoded = topology.decode_object(object_name)?;
        let mut countries = HashMap::with_capacity(decoded.len());
        let mut skipped = 0usize;

        for country in decoded {
            let Some(id) = country.id else {
                skipped += 1;
                continue;
            };
            // Bei doppelten IDs gewinnt der erste Eintrag
            countries.entry(id).or_insert(AtlasEntry {
                name: country.name,
                geometry: country.geometry,
            });
        }

        if skipped > 0 {
            debug!("Skipped {} features without id.", skipped);
        }
        Ok(Self { countries })
    }

    pub fn from_topology_str(json: &str, object_name: &str) -> GlobeResult<Self> {
        Self::from_topology(&Topology::from_json_str(json)?, object_name)
    }

    pub fn load(path: impl AsRef<Path>, object_name: &str) -> GlobeResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let atlas = Self::from_topology_str(&json, object_name)?;
        info!("Loaded {} countries from {}", atlas.len(), path.display());
        Ok(atlas)
    }

    pub fn get(&self, id: &str) -> Option<&CountryGeometry> {
        self.countries.get(id).map(|entry| &entry.geometry)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.countries.contains_key(id)
    }

    pub fn name(&self, id: &str) -> Option<&str> {
        self.countries.get(id).and_then(|entry| entry.name.as_deref())
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl FromIterator<(String, CountryGeometry)> for CountryAtlas {
    fn from_iter<T: IntoIterator<Item = (String, CountryGeometry)>>(iter: T) -> Self {
        let mut countries = HashMap::new();
        for (id, geometry) in iter {
            countries
                .entry(id)
                .or_insert(AtlasEntry { name: None, geometry });
        }
        Self { countries }
    }
}
