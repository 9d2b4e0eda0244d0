// src/math/geometry/sphere/rotation.rs

use crate::math::{types::*, utils::*};
use nalgebra::{Rotation3, Unit, Vector3 as NVec3};

/// Rotationshilfen für Bewegungen über die Kugeloberfläche
pub struct SphereRotation;

impl SphereRotation {
    /// Rotiert `point` um die Achse `axis` um `angle_rad`.
    /// Eine Achse nahe Null führt zu keiner Rotation.
    pub fn rotate_around_axis(point: Point3D, axis: Point3D, angle_rad: f32) -> Point3D {
        if axis.length_squared() < constants::EPSILON {
            bevy::log::debug!("Rotation axis is near zero, point left unrotated.");
            return point;
        }
        let unit_axis = Unit::new_normalize(NVec3::new(axis.x, axis.y, axis.z));
        let rotation = Rotation3::from_axis_angle(&unit_axis, angle_rad);
        let rotated = rotation * NVec3::new(point.x, point.y, point.z);

        Point3D::new(rotated.x, rotated.y, rotated.z)
    }

    /// Winkel zwischen zwei Richtungen in Radiant (0 für Nullvektoren)
    pub fn angle_between(a: Point3D, b: Point3D) -> f32 {
        let denominator = (a.length_squared() * b.length_squared()).sqrt();
        if denominator < constants::EPSILON {
            return 0.0;
        }
        (a.dot(b) / denominator).clamp(-1.0, 1.0).acos()
    }

    /// Normalisierte Rotationsachse von `from` nach `to`.
    /// Bei (nahezu) kollinearen Punkten wird die vertikale Achse verwendet,
    /// an den Polen (Start parallel zu Y) die X-Achse.
    pub fn rotation_axis(from: Point3D, to: Point3D) -> Point3D {
        let from = from.normalize_or_zero();
        let cross = from.cross(to.normalize_or_zero());
        if cross.length_squared() >= constants::AXIS_EPSILON_SQUARED {
            return cross.normalize();
        }
        let on_pole = from != Point3D::ZERO
            && from.cross(Point3D::Y).length_squared() < constants::AXIS_EPSILON_SQUARED;
        if on_pole { Point3D::X } else { Point3D::Y }
    }
}
