// src/camera/path.rs

use crate::config::CameraConfig;
use crate::math::geometry::sphere::rotation::SphereRotation;
use crate::math::types::*;
use crate::math::utils::constants::PI;

/// Kamera-Keyframe: Position und Blickpunkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Point3D,
    pub target: Point3D,
}

impl CameraState {
    pub fn new(position: Point3D, target: Point3D) -> Self {
        Self { position, target }
    }
}

/// Plant Keyframe-Folgen für Kamerabewegungen zwischen Punkten auf der Kugel.
/// Tweening zwischen den Keyframes übernimmt der Aufrufer.
#[derive(Debug, Clone, Default)]
pub struct CameraPathPlanner {
    config: CameraConfig,
}

impl CameraPathPlanner {
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Direktanflug mit konfiguriertem Abstand und Höhenversatz
    pub fn plan_direct_approach(&self, point: Point3D) -> CameraState {
        self.direct_approach(point, self.config.distance, self.config.y_offset)
    }

    /// Bogen mit konfiguriertem Abstand, Höhenversatz und Keyframe-Anzahl
    pub fn plan_arc_between(&self, prev: Point3D, curr: Point3D) -> Vec<CameraState> {
        self.arc_between(
            prev,
            curr,
            self.config.distance,
            self.config.y_offset,
            self.config.keyframes_per_arc,
        )
    }

    /// Bogen, wenn es einen Vorgänger gibt, sonst Direktanflug
    pub fn plan_step(&self, prev: Option<Point3D>, curr: Point3D) -> Vec<CameraState> {
        match prev {
            Some(prev) => self.plan_arc_between(prev, curr),
            None => vec![self.plan_direct_approach(curr)],
        }
    }

    /// `position = normalize(point) · distance + (0, y_offset, 0)`,
    /// `target = point · target_dampening`
    pub fn direct_approach(&self, point: Point3D, distance: f32, y_offset: f32) -> CameraState {
        CameraState {
            position: point.normalize_or_zero() * distance + Point3D::Y * y_offset,
            target: point * self.config.target_dampening,
        }
    }

    /// Rotiert `prev` schrittweise um die Achse `prev × curr`. Keyframe `i` liegt bei
    /// `t = i / (n − 1)`; ein einzelner Keyframe ist direkt das Ziel.
    pub fn arc_between(
        &self,
        prev: Point3D,
        curr: Point3D,
        distance: f32,
        y_offset: f32,
        keyframes: usize,
    ) -> Vec<CameraState> {
        let angle = SphereRotation::angle_between(prev, curr);
        let axis = SphereRotation::rotation_axis(prev, curr);
        let dampening = self.config.target_dampening;

        (0..keyframes)
            .map(|i| {
                let t = if keyframes == 1 {
                    1.0
                } else {
                    i as f32 / (keyframes - 1) as f32
                };

                let rotated = SphereRotation::rotate_around_axis(prev, axis, angle * t);
                let lift = y_offset + (t * PI).sin() * self.config.arc_height;

                CameraState {
                    position: rotated.normalize_or_zero() * distance + Point3D::Y * lift,
                    target: (prev * dampening).lerp(curr * dampening, t),
                }
            })
            .collect()
    }
}
