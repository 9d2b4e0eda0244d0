// src/math/geometry/sphere/sampling.rs

use crate::atlas::CountryAtlas;
use crate::config::ParticleConfig;
use crate::math::geometry::polygon::{
    CountryGeometry, PolygonBoundary, boundary_area, boundary_contains, geometry_contains,
    relative_area,
};
use crate::math::types::*;
use bevy::log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ergebnis des Samplings eines Landes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledCountry {
    /// Akzeptierte Punkte, bereits auf `radius + surface_offset` projiziert
    pub points: Vec<Point3D>,
    /// Normierte, sub-linear komprimierte Fläche (steuert Dichte und Alpha beim Rendern)
    pub area_scale: f32,
    /// Angefordertes Punktbudget
    pub requested: usize,
    /// Verbrauchte Versuche
    pub attempts: usize,
}

impl SampledCountry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Versuchsbudget erschöpft, bevor das Budget erreicht wurde
    pub fn is_partial(&self) -> bool {
        self.points.len() < self.requested
    }
}

/// Vorberechnete Daten eines Teilpolygons
struct SamplingPart<'a> {
    boundary: &'a PolygonBoundary,
    bounds: GeoBounds,
    area: f64,
}

/// Rejection-Sampler für Partikel innerhalb von Ländergrenzen
pub struct CountrySampler {
    config: ParticleConfig,
    rng: StdRng,
}

impl CountrySampler {
    /// Erstellt einen neuen Sampler (Seed aus der Konfiguration oder zufällig)
    pub fn new(config: ParticleConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }

    /// Erstellt einen Sampler mit festem Seed
    pub fn with_seed(config: ParticleConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// `clamp(relative_area · gain, ε, 1) ^ exponent`
    pub fn area_scale(&self, relative_area: f64) -> f64 {
        (relative_area * self.config.area_gain)
            .clamp(self.config.min_area, 1.0)
            .powf(self.config.area_exponent)
    }

    /// `base + (max − base) · area_scale`, abgerundet
    pub fn point_budget(&self, area_scale: f64) -> usize {
        let base = self.config.base_points as f64;
        let max = self.config.max_points as f64;
        (base + (max - base) * area_scale).floor() as usize
    }

    /// Sampelt ein Land mit dem aus seiner Fläche abgeleiteten Punktbudget
    pub fn sample_country(&mut self, geometry: &CountryGeometry, radius: f32) -> SampledCountry {
        let area_scale = self.area_scale(relative_area(geometry));
        let count = self.point_budget(area_scale);
        self.sample_inner(geometry, radius, count, area_scale)
    }

    /// Sampelt ein Land mit explizitem Punktbudget
    pub fn sample_with_budget(
        &mut self,
        geometry: &CountryGeometry,
        radius: f32,
        count: usize,
    ) -> SampledCountry {
        let area_scale = self.area_scale(relative_area(geometry));
        self.sample_inner(geometry, radius, count, area_scale)
    }

    /// Sucht das Land im Atlas; unbekannte IDs ergeben ein leeres Ergebnis
    pub fn sample_by_id(&mut self, atlas: &CountryAtlas, id: &str, radius: f32) -> SampledCountry {
        match atlas.get(id) {
            Some(geometry) => self.sample_country(geometry, radius),
            None => {
                warn!("Country {} not found in atlas, no particles generated.", id);
                SampledCountry::empty()
            }
        }
    }

    fn sample_inner(
        &mut self,
        geometry: &CountryGeometry,
        radius: f32,
        count: usize,
        area_scale: f64,
    ) -> SampledCountry {
        let mut result = SampledCountry {
            points: Vec::with_capacity(count),
            area_scale: area_scale as f32,
            requested: count,
            attempts: 0,
        };

        let bounds = geometry.bounds();
        if count == 0 || !bounds.is_valid() {
            return result;
        }

        let parts: Vec<SamplingPart> = if geometry.is_multi() {
            geometry
                .polygons()
                .iter()
                .map(|boundary| SamplingPart {
                    boundary,
                    bounds: boundary.bounds(),
                    area: boundary_area(boundary),
                })
                .collect()
        } else {
            Vec::new()
        };
        let areas: Vec<f64> = parts.iter().map(|part| part.area).collect();
        let total_area: f64 = areas.iter().sum();
        let weighted = !parts.is_empty() && total_area > 0.0;

        let sample_radius = radius + self.config.surface_offset;
        let max_attempts = count.saturating_mul(self.config.attempt_multiplier);

        while result.points.len() < count && result.attempts < max_attempts {
            result.attempts += 1;

            let accepted = if weighted {
                let index = pick_weighted(&areas, self.rng.random::<f64>() * total_area);
                let part = &parts[index];
                let candidate = part.bounds.sample(&mut self.rng);
                boundary_contains(part.boundary, candidate).then_some(candidate)
            } else {
                let candidate = bounds.sample(&mut self.rng);
                geometry_contains(geometry, candidate).then_some(candidate)
            };

            if let Some(point) = accepted {
                result.points.push(point.to_sphere(sample_radius));
            }
        }

        if result.is_partial() {
            debug!(
                "Sampling budget exhausted: {} of {} points after {} attempts.",
                result.points.len(),
                count,
                result.attempts
            );
        }

        result
    }
}

/// Gewichtete Auswahl: `draw` ∈ [0, Σareas). Zieht die Flächen nacheinander ab und
/// nimmt den ersten Index, bei dem der Rest ≤ 0 wird; Rundungsreste fallen auf den letzten.
pub fn pick_weighted(areas: &[f64], draw: f64) -> usize {
    let mut remaining = draw;
    for (index, area) in areas.iter().enumerate() {
        remaining -= area;
        if remaining <= 0.0 {
            return index;
        }
    }
    areas.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::geometry::sphere::coordinates::{CoordinateConverter, GeoPoint};

    fn square(lon0: f64, lat0: f64, size: f64) -> PolygonBoundary {
        PolygonBoundary::from_lon_lat(&[
            (lon0, lat0),
            (lon0 + size, lat0),
            (lon0 + size, lat0 + size),
            (lon0, lat0 + size),
        ])
    }

    fn sampler(seed: u64) -> CountrySampler {
        CountrySampler::with_seed(ParticleConfig::default(), seed)
    }

    #[test]
    fn test_square_scenario() {
        let geometry = CountryGeometry::Polygon(square(0.0, 0.0, 2.0));
        let radius = 10.0;
        let result = sampler(42).sample_with_budget(&geometry, radius, 50);

        assert!(result.len() <= 50);
        assert!(!result.is_empty());
        for p in &result.points {
            let geo = CoordinateConverter::sphere_to_geo(*p);
            assert!((-1e-3..=2.0 + 1e-3).contains(&geo.longitude), "lon {}", geo.longitude);
            assert!((-1e-3..=2.0 + 1e-3).contains(&geo.latitude), "lat {}", geo.latitude);
            assert!((p.length() - (radius + 0.05)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_accepted_points_inside_geometry() {
        let triangle = PolygonBoundary::from_lon_lat(&[(10.0, 10.0), (30.0, 10.0), (20.0, 30.0)]);
        let geometry = CountryGeometry::Polygon(triangle);
        let result = sampler(3).sample_with_budget(&geometry, 1.0, 300);
        assert_eq!(result.len(), 300);
        for p in &result.points {
            let geo = CoordinateConverter::sphere_to_geo(*p);
            // Toleranz für die f32-Rundung nahe der Kanten
            let nudged_in = GeoPoint::new(
                geo.longitude + (20.0 - geo.longitude) * 1e-4,
                geo.latitude + (16.0 - geo.latitude) * 1e-4,
            );
            assert!(geometry_contains(&geometry, nudged_in), "outside: {:?}", geo);
        }
    }

    #[test]
    fn test_budget_scales_with_area() {
        let s = sampler(0);
        let tiny = s.point_budget(s.area_scale(0.0));
        let huge = s.point_budget(s.area_scale(1.0));
        assert!(tiny >= 100);
        assert_eq!(huge, 20_000);

        let small = s.point_budget(s.area_scale(0.001));
        let medium = s.point_budget(s.area_scale(0.01));
        assert!(tiny <= small && small < medium && medium < huge);
    }

    #[test]
    fn test_area_scale_is_clamped() {
        let s = sampler(0);
        let min = s.area_scale(0.0);
        assert!((min - 1e-5f64.powf(0.8)).abs() < 1e-12);
        assert_eq!(s.area_scale(10.0), 1.0);
    }

    #[test]
    fn test_exhaustion_returns_partial() {
        // Kollinearer Ring: gültige Bounding Box, aber kein Kandidat liegt je innen
        let sliver = PolygonBoundary::from_lon_lat(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let geometry = CountryGeometry::Polygon(sliver);
        let result = sampler(5).sample_with_budget(&geometry, 1.0, 40);
        assert!(result.is_empty());
        assert!(result.is_partial());
        assert_eq!(result.attempts, 40 * 20);
    }

    #[test]
    fn test_multipolygon_without_area_uses_whole_bounds() {
        // Nur Zweipunkt-Ringe: Gesamtfläche 0, keine gewichtete Auswahl möglich
        let geometry = CountryGeometry::MultiPolygon(vec![
            PolygonBoundary::from_lon_lat(&[(0.0, 0.0), (4.0, 2.0)]),
            PolygonBoundary::from_lon_lat(&[(10.0, -3.0), (12.0, 1.0)]),
        ]);
        assert_eq!(relative_area(&geometry), 0.0);

        let result = sampler(8).sample_with_budget(&geometry, 1.0, 40);
        assert!(result.is_empty());
        assert!(result.is_partial());
        assert_eq!(result.attempts, 40 * ParticleConfig::default().attempt_multiplier);
    }

    #[test]
    fn test_unknown_id_gives_empty_result() {
        let atlas = CountryAtlas::default();
        let result = sampler(1).sample_by_id(&atlas, "999", 10.0);
        assert!(result.is_empty());
        assert_eq!(result.requested, 0);
    }

    #[test]
    fn test_pick_weighted_fallback() {
        assert_eq!(pick_weighted(&[1.0, 2.0], 0.5), 0);
        assert_eq!(pick_weighted(&[1.0, 2.0], 2.9), 1);
        // Rundungsüberlauf -> letzter Index
        assert_eq!(pick_weighted(&[1.0, 2.0], 3.0 + 1e-9), 1);
        assert_eq!(pick_weighted(&[], 0.3), 0);
    }

    #[test]
    fn test_pick_weighted_converges_to_area_ratio() {
        let areas = [9.0, 1.0];
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 100_000;
        let mut counts = [0usize; 2];
        for _ in 0..draws {
            counts[pick_weighted(&areas, rng.random::<f64>() * 10.0)] += 1;
        }
        let ratio = counts[0] as f64 / counts[1] as f64;
        assert!((ratio - 9.0).abs() < 0.5, "ratio {ratio}");
    }

    #[test]
    fn test_multipolygon_points_follow_part_area() {
        // 3°×3° und 1°×1° am Äquator: Flächenverhältnis ≈ 9:1
        let big = square(0.0, 0.0, 3.0);
        let small = square(50.0, 0.0, 1.0);
        let geometry = CountryGeometry::MultiPolygon(vec![big, small]);
        let result = sampler(11).sample_with_budget(&geometry, 1.0, 20_000);
        assert_eq!(result.len(), 20_000);

        let in_big = result
            .points
            .iter()
            .filter(|p| CoordinateConverter::sphere_to_geo(**p).longitude < 25.0)
            .count();
        let ratio = in_big as f64 / (result.len() - in_big) as f64;
        assert!((ratio - 9.0).abs() < 1.0, "ratio {ratio}");
    }
}
