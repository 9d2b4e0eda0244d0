// src/math/geometry/mod.rs

pub mod polygon;
pub mod sphere;

pub use self::polygon::{
    CountryGeometry, PolygonBoundary, boundary_area, boundary_contains, geometry_area,
    geometry_contains, outline_points, relative_area, ring_area, ring_contains,
};
pub use self::sphere::{
    CoordinateConverter, CountrySampler, GeoPoint, SampledCountry, SphereRotation, pick_weighted,
};
