// src/math/geometry/polygon/mod.rs

pub mod area; // Flächennäherung über den sphärischen Exzess
pub mod containment; // Even-odd Punkt-in-Polygon
pub mod country; // Ringe, Polygone und Ländergeometrie
pub mod outline; // Ländergrenzen als 3D-Linien

pub use self::area::{boundary_area, geometry_area, relative_area, ring_area};
pub use self::containment::{boundary_contains, geometry_contains, ring_contains};
pub use self::country::{CountryGeometry, PolygonBoundary};
pub use self::outline::outline_points;
