// src/math/geometry/sphere/mod.rs

pub mod coordinates;
pub mod rotation;
pub mod sampling;

pub use self::coordinates::{CoordinateConverter, GeoPoint};
pub use self::rotation::SphereRotation;
pub use self::sampling::{CountrySampler, SampledCountry, pick_weighted};
