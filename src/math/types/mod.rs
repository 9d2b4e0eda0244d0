// src/math/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendete externe Typen
pub use bevy::math::Vec3;
pub use geo::{Coord, LineString};

// Einheitliche Typen für das gesamte Modul
pub type Point3D = Vec3;
/// Geschlossene Lon/Lat-Randlinie (x = Längengrad, y = Breitengrad, in Grad)
pub type Ring = LineString<f64>;
