// src/math/geometry/polygon/containment.rs

use super::country::{CountryGeometry, PolygonBoundary};
use crate::math::{geometry::sphere::coordinates::GeoPoint, types::*};

/// Even-odd Ray-Casting gegen einen einzelnen Ring (in der Lon/Lat-Ebene)
pub fn ring_contains(ring: &Ring, point: GeoPoint) -> bool {
    let coords = &ring.0;
    if coords.len() < 3 {
        return false;
    }

    let (lon, lat) = (point.longitude, point.latitude);
    let mut inside = false;
    let mut j = coords.len() - 1;
    for i in 0..coords.len() {
        let (xi, yi) = (coords[i].x, coords[i].y);
        let (xj, yj) = (coords[j].x, coords[j].y);

        if (yi > lat) != (yj > lat) && lon < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Ein Punkt liegt im Polygon, wenn irgendein Ring ihn enthält
pub fn boundary_contains(boundary: &PolygonBoundary, point: GeoPoint) -> bool {
    boundary.rings.iter().any(|ring| ring_contains(ring, point))
}

/// Ein Punkt liegt im Land, wenn irgendein Teilpolygon ihn enthält
pub fn geometry_contains(geometry: &CountryGeometry, point: GeoPoint) -> bool {
    geometry.polygons().iter().any(|boundary| boundary_contains(boundary, point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Contains, Point};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn triangle() -> PolygonBoundary {
        PolygonBoundary::from_lon_lat(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0), (0.0, 0.0)])
    }

    #[test]
    fn test_simple_containment() {
        let tri = triangle();
        assert!(boundary_contains(&tri, GeoPoint::new(5.0, 2.0)));
        assert!(!boundary_contains(&tri, GeoPoint::new(9.0, 7.0)));
        assert!(!boundary_contains(&tri, GeoPoint::new(-1.0, 1.0)));
    }

    #[test]
    fn test_agrees_with_geo_on_concave_polygon() {
        // L-förmiges Polygon ohne Löcher
        let l_shape = PolygonBoundary::from_lon_lat(&[
            (0.0, 0.0),
            (6.0, 0.0),
            (6.0, 2.0),
            (2.0, 2.0),
            (2.0, 6.0),
            (0.0, 6.0),
            (0.0, 0.0),
        ]);
        let geometry = CountryGeometry::Polygon(l_shape);
        let reference = geometry.to_multi_polygon();

        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..2000 {
            let lon = rng.random_range(-1.0..7.0);
            let lat = rng.random_range(-1.0..7.0);
            let expected = reference.contains(&Point::new(lon, lat));
            assert_eq!(
                geometry_contains(&geometry, GeoPoint::new(lon, lat)),
                expected,
                "mismatch at ({lon}, {lat})"
            );
        }
    }

    #[test]
    fn test_hole_counts_as_inside() {
        let outer = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)];
        let hole = [(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0), (4.0, 4.0)];
        let boundary = PolygonBoundary::new(vec![
            PolygonBoundary::from_lon_lat(&outer).rings.remove(0),
            PolygonBoundary::from_lon_lat(&hole).rings.remove(0),
        ]);
        assert!(boundary_contains(&boundary, GeoPoint::new(5.0, 5.0)));
    }

    #[test]
    fn test_multipolygon_any_part() {
        let geometry = CountryGeometry::MultiPolygon(vec![
            triangle(),
            PolygonBoundary::from_lon_lat(&[(20.0, 20.0), (22.0, 20.0), (22.0, 22.0), (20.0, 22.0)]),
        ]);
        assert!(geometry_contains(&geometry, GeoPoint::new(21.0, 21.0)));
        assert!(geometry_contains(&geometry, GeoPoint::new(5.0, 1.0)));
        assert!(!geometry_contains(&geometry, GeoPoint::new(15.0, 15.0)));
    }

    #[test]
    fn test_degenerate_ring_contains_nothing() {
        let ring: Ring = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }].into();
        assert!(!ring_contains(&ring, GeoPoint::new(0.5, 0.5)));
    }
}
