// src/config.rs
use crate::math::error::{GlobeError, GlobeResult};
use bevy::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Standardpfad der optionalen Konfigurationsdatei
pub const DEFAULT_CONFIG_PATH: &str = "assets/globe.json";

/// Steuerung der Partikeldichte pro Land
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Mindestanzahl Punkte (auch für sehr kleine Länder)
    pub base_points: usize,
    pub max_points: usize,
    /// Verstärkung der relativen Fläche vor dem Clamping
    pub area_gain: f64,
    /// Sub-lineare Kompression der Fläche
    pub area_exponent: f64,
    /// Untergrenze der normierten Fläche (ε)
    pub min_area: f64,
    /// Versuchsbudget = Punktbudget × Multiplikator
    pub attempt_multiplier: usize,
    /// Abstand der Partikel über der Kugeloberfläche
    pub surface_offset: f32,
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            base_points: 100,
            max_points: 20_000,
            area_gain: 8.0,
            area_exponent: 0.8,
            min_area: 1e-5,
            attempt_multiplier: 20,
            surface_offset: 0.05,
            seed: None,
        }
    }
}

/// Kameraführung zwischen Standorten
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub distance: f32,
    pub y_offset: f32,
    /// Zieht den Blickpunkt Richtung Kugelmitte (0..=1)
    pub target_dampening: f32,
    /// Zusätzliche Höhe in der Mitte eines Bogens (sin(t·π)-Profil)
    pub arc_height: f32,
    pub keyframes_per_arc: usize,
    /// Abstand der Standort-Anker über der Oberfläche
    pub marker_offset: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 20.0,
            y_offset: 4.0,
            target_dampening: 0.5,
            arc_height: 0.0,
            keyframes_per_arc: 3,
            marker_offset: 0.1,
        }
    }
}

/// Zeitsteuerung der automatischen Standort-Tour
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Verweildauer an einem Standort, bevor der nächste angeflogen wird
    pub dwell_seconds: f32,
    /// Pause nach einer Benutzerinteraktion
    pub resume_delay_seconds: f32,
    /// Dauer, die jeder Keyframe zum Einschwingen bekommt
    pub keyframe_seconds: f32,
    pub auto_start: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            dwell_seconds: 8.0,
            resume_delay_seconds: 5.0,
            keyframe_seconds: 0.8,
            auto_start: true,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    pub radius: f32,
    pub dataset_path: PathBuf,
    /// Name der Objektsammlung im TopoJSON
    pub countries_object: String,
    /// Überschreibt den eingebauten Standortkatalog
    pub locations_path: Option<PathBuf>,
    pub particles: ParticleConfig,
    pub camera: CameraConfig,
    pub tour: TourConfig,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            dataset_path: PathBuf::from("assets/world-110m.json"),
            countries_object: "countries".to_string(),
            locations_path: None,
            particles: ParticleConfig::default(),
            camera: CameraConfig::default(),
            tour: TourConfig::default(),
        }
    }
}

impl GlobeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn validate(&self) -> GlobeResult<()> {
        if self.radius <= 0.0 {
            return Err(invalid("Radius must be greater than 0"));
        }

        let p = &self.particles;
        if p.max_points == 0 || p.base_points > p.max_points {
            return Err(invalid(
                "Particle budget needs max_points > 0 and base_points <= max_points",
            ));
        }
        if !(p.area_exponent > 0.0 && p.area_exponent <= 1.0) {
            return Err(invalid("Area exponent must be in (0, 1]"));
        }
        if !(p.min_area > 0.0 && p.min_area <= 1.0) {
            return Err(invalid("Minimum area must be in (0, 1]"));
        }
        if p.area_gain <= 0.0 {
            return Err(invalid("Area gain must be greater than 0"));
        }
        if p.attempt_multiplier == 0 {
            return Err(invalid("Attempt multiplier must be at least 1"));
        }

        let c = &self.camera;
        if c.distance <= 0.0 {
            return Err(invalid("Camera distance must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&c.target_dampening) {
            return Err(invalid("Target dampening must be between 0.0 and 1.0"));
        }
        if c.keyframes_per_arc == 0 {
            return Err(invalid("Need at least 1 keyframe per arc"));
        }

        let t = &self.tour;
        if t.dwell_seconds < 0.0 || t.resume_delay_seconds < 0.0 || t.keyframe_seconds < 0.0 {
            return Err(invalid("Tour durations must not be negative"));
        }

        Ok(())
    }

    /// Liest eine (teilweise) Konfiguration; fehlende Felder bleiben auf ihren Defaults
    pub fn from_json_str(json: &str) -> GlobeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> GlobeResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Wie `load`, fällt aber bei fehlender oder ungültiger Datei auf die Defaults zurück
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No config at {}, using defaults.", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                warn!("Ignoring config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}

fn invalid(message: &str) -> GlobeError {
    GlobeError::InvalidConfiguration {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GlobeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particles.base_points, 100);
        assert_eq!(config.camera.distance, 20.0);
        assert_eq!(config.tour.dwell_seconds, 8.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GlobeConfig::from_json_str(
            r#"{ "radius": 5.0, "particles": { "max_points": 500, "seed": 42 } }"#,
        )
        .unwrap();
        assert_eq!(config.radius, 5.0);
        assert_eq!(config.particles.max_points, 500);
        assert_eq!(config.particles.base_points, 100);
        assert_eq!(config.particles.seed, Some(42));
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            GlobeConfig::new().with_radius(0.0).validate(),
            Err(GlobeError::InvalidConfiguration { .. })
        ));
        let mut config = GlobeConfig::new();
        config.particles.base_points = 30_000;
        assert!(config.validate().is_err());
        let mut config = GlobeConfig::new();
        config.camera.target_dampening = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_particle_budget_bounds() {
        let mut config = GlobeConfig::new();
        config.particles.base_points = 0;
        assert!(config.validate().is_ok());

        config.particles.max_points = 0;
        let Err(GlobeError::InvalidConfiguration { message }) = config.validate() else {
            panic!("max_points = 0 must be rejected");
        };
        assert!(message.contains("max_points > 0"), "{message}");
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            GlobeConfig::from_json_str("{ radius: }"),
            Err(GlobeError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = GlobeConfig::load_or_default("does/not/exist.json");
        assert_eq!(config, GlobeConfig::default());
    }
}
