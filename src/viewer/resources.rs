// src/viewer/resources.rs
use crate::atlas::{Company, CountryAtlas, LocationCatalog, SelectedLocation};
use crate::camera::{CameraPathPlanner, CameraTour, KeyframeTicket};
use crate::config::GlobeConfig;
use crate::math::geometry::sphere::sampling::CountrySampler;
use bevy::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

/// Geladener Atlas; leer, wenn der Datensatz nicht gelesen werden konnte
#[derive(Resource, Debug, Clone, Default)]
pub struct AtlasResource(pub Arc<CountryAtlas>);

#[derive(Resource, Debug, Clone, Default)]
pub struct CatalogResource(pub LocationCatalog);

#[derive(Resource)]
pub struct SamplerResource(pub CountrySampler);

/// Aktuell angezeigte Standorte. Änderungen lösen Partikel-Neuaufbau und Tour-Reset aus.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// `None` zeigt alle Standorte aller Firmen
    pub company: Option<String>,
    pub locations: Vec<SelectedLocation>,
}

impl Selection {
    pub fn all(catalog: &LocationCatalog) -> Self {
        Self {
            company: None,
            locations: catalog.all_locations(),
        }
    }

    pub fn for_company(company: &Company) -> Self {
        Self {
            company: Some(company.name.clone()),
            locations: company.countries.clone(),
        }
    }

    /// Country-IDs in Auswahlreihenfolge, ohne Duplikate
    pub fn unique_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.locations
            .iter()
            .map(|location| location.id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[derive(Resource, Debug, Clone)]
pub struct DisplayOptions {
    pub show_borders: bool,
    pub show_markers: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_borders: true,
            show_markers: true,
        }
    }
}

/// Keyframe, auf den die Kamera gerade zusteuert
#[derive(Debug, Clone, Copy)]
pub struct ActiveKeyframe {
    pub ticket: KeyframeTicket,
    pub remaining: f32,
}

/// Tour-Automat, Planer und der gerade laufende Keyframe
#[derive(Resource, Debug)]
pub struct CameraDirector {
    pub tour: CameraTour,
    pub planner: CameraPathPlanner,
    pub active: Option<ActiveKeyframe>,
    pub keyframe_seconds: f32,
}

impl CameraDirector {
    pub fn new(config: &GlobeConfig) -> Self {
        Self {
            tour: CameraTour::new(config.tour.clone()),
            planner: CameraPathPlanner::new(config.camera.clone()),
            active: None,
            keyframe_seconds: config.tour.keyframe_seconds,
        }
    }
}
