// src/atlas/topology.rs

use crate::math::error::{GlobeError, GlobeResult};
use crate::math::geometry::polygon::{CountryGeometry, PolygonBoundary};
use crate::math::types::*;
use serde::Deserialize;
use std::collections::HashMap;

/// TopoJSON-Dokument (nur die Teile, die für Länderflächen gebraucht werden)
#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<Vec<f64>>>,
    pub objects: HashMap<String, TopoGeometry>,
}

/// Quantisierung: `position = delta_sum · scale + translate`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

/// Country-IDs kommen je nach Datensatz als String ("036") oder Zahl (840)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FeatureId {
    Text(String),
    Number(serde_json::Number),
}

impl FeatureId {
    pub fn as_key(&self) -> String {
        match self {
            FeatureId::Text(text) => text.clone(),
            FeatureId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum TopoGeometry {
    GeometryCollection {
        geometries: Vec<TopoGeometry>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<FeatureId>,
        #[serde(default)]
        properties: Option<FeatureProperties>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<FeatureId>,
        #[serde(default)]
        properties: Option<FeatureProperties>,
    },
    /// Punkte, Linien und `null`-Geometrien haben keine Fläche
    #[serde(other)]
    Other,
}

/// Ein dekodiertes Land
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedCountry {
    pub id: Option<String>,
    pub name: Option<String>,
    pub geometry: CountryGeometry,
}

impl Topology {
    pub fn from_json_str(json: &str) -> GlobeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Löst die Delta-Kodierung auf und wendet die Transformation an
    pub fn decode_arcs(&self) -> GlobeResult<Vec<Vec<Coord<f64>>>> {
        self.arcs
            .iter()
            .enumerate()
            .map(|(index, arc)| {
                let (mut x, mut y) = (0.0, 0.0);
                arc.iter()
                    .map(|position| {
                        let [dx, dy] = match position.as_slice() {
                            [dx, dy, ..] => [*dx, *dy],
                            _ => {
                                return Err(invalid(format!(
                                    "arc {} has a position with fewer than 2 values",
                                    index
                                )));
                            }
                        };
                        Ok(match &self.transform {
                            Some(t) => {
                                x += dx;
                                y += dy;
                                Coord {
                                    x: x * t.scale[0] + t.translate[0],
                                    y: y * t.scale[1] + t.translate[1],
                                }
                            }
                            None => Coord { x: dx, y: dy },
                        })
                    })
                    .collect::<GlobeResult<Vec<_>>>()
            })
            .collect()
    }

    /// Dekodiert alle flächigen Geometrien einer Objektsammlung
    pub fn decode_object(&self, object_name: &str) -> GlobeResult<Vec<DecodedCountry>> {
        let object = self
            .objects
            .get(object_name)
            .ok_or_else(|| invalid(format!("object '{}' not found", object_name)))?;

        let arcs = self.decode_arcs()?;
        let mut countries = Vec::new();
        collect_countries(object, &arcs, &mut countries)?;
        Ok(countries)
    }
}

fn collect_countries(
    geometry: &TopoGeometry,
    arcs: &[Vec<Coord<f64>>],
    out: &mut Vec<DecodedCountry>,
) -> GlobeResult<()> {
    match geometry {
        TopoGeometry::GeometryCollection { geometries } => {
            for child in geometries {
                collect_countries(child, arcs, out)?;
            }
        }
        TopoGeometry::Polygon {
            arcs: rings,
            id,
            properties,
        } => out.push(DecodedCountry {
            id: id.as_ref().map(FeatureId::as_key),
            name: properties.as_ref().and_then(|p| p.name.clone()),
            geometry: CountryGeometry::Polygon(stitch_polygon(rings, arcs)?),
        }),
        TopoGeometry::MultiPolygon {
            arcs: polygons,
            id,
            properties,
        } => {
            let parts = polygons
                .iter()
                .map(|rings| stitch_polygon(rings, arcs))
                .collect::<GlobeResult<Vec<_>>>()?;
            out.push(DecodedCountry {
                id: id.as_ref().map(FeatureId::as_key),
                name: properties.as_ref().and_then(|p| p.name.clone()),
                geometry: CountryGeometry::MultiPolygon(parts),
            });
        }
        TopoGeometry::Other => {}
    }
    Ok(())
}

fn stitch_polygon(rings: &[Vec<i64>], arcs: &[Vec<Coord<f64>>]) -> GlobeResult<PolygonBoundary> {
    let rings = rings
        .iter()
        .map(|indices| stitch_ring(indices, arcs))
        .collect::<GlobeResult<Vec<_>>>()?;
    Ok(PolygonBoundary::new(rings))
}

/// Verkettet Arcs zu einem Ring. Negative Indizes (`!i`) laufen rückwärts;
/// der gemeinsame Endpunkt aufeinanderfolgender Arcs wird nur einmal übernommen.
pub fn stitch_ring(indices: &[i64], arcs: &[Vec<Coord<f64>>]) -> GlobeResult<Ring> {
    let mut coords: Vec<Coord<f64>> = Vec::new();

    for &index in indices {
        let reversed = index < 0;
        let resolved = if reversed { !index } else { index };
        let arc = usize::try_from(resolved)
            .ok()
            .and_then(|i| arcs.get(i))
            .ok_or_else(|| invalid(format!("arc index {} out of range", index)))?;

        coords.pop();
        let start = coords.len();
        coords.extend_from_slice(arc);
        if reversed {
            coords[start..].reverse();
        }
    }

    // Entartete Ringe wie topojson-client schließen
    if !coords.is_empty() && coords.len() < 4 {
        coords.push(coords[0]);
    }

    Ok(LineString::new(coords))
}

fn invalid(message: String) -> GlobeError {
    GlobeError::InvalidTopology { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    // Zwei Arcs bilden das Quadrat (0,0)-(2,2); Arc 0 unten/rechts, Arc 1 oben/links
    const SQUARE: &str = r#"{
        "type": "Topology",
        "transform": { "scale": [1.0, 1.0], "translate": [0.0, 0.0] },
        "arcs": [
            [[0, 0], [2, 0], [0, 2]],
            [[2, 2], [-2, 0], [0, -2]]
        ],
        "objects": {
            "countries": {
                "type": "GeometryCollection",
                "geometries": [
                    { "type": "Polygon", "id": "036", "arcs": [[0, 1]], "properties": { "name": "Square" } },
                    { "type": "Polygon", "id": 840, "arcs": [[-2, -1]] },
                    { "type": "MultiPolygon", "arcs": [[[0, 1]], [[-2, -1]]] },
                    { "type": "Point", "coordinates": [1, 1] }
                ]
            }
        }
    }"#;

    #[test]
    fn test_delta_decoding_with_transform() {
        let json = r#"{
            "transform": { "scale": [0.5, 2.0], "translate": [-180.0, -90.0] },
            "arcs": [[[0, 0], [4, 1], [2, 3]]],
            "objects": {}
        }"#;
        let topology = Topology::from_json_str(json).unwrap();
        let arcs = topology.decode_arcs().unwrap();
        assert_eq!(
            arcs[0],
            vec![
                Coord { x: -180.0, y: -90.0 },
                Coord { x: -178.0, y: -88.0 },
                Coord { x: -177.0, y: -82.0 },
            ]
        );
    }

    #[test]
    fn test_untransformed_arcs_are_absolute() {
        let json = r#"{ "arcs": [[[10.5, 20.5, 99], [11.0, 21.0]]], "objects": {} }"#;
        let arcs = Topology::from_json_str(json).unwrap().decode_arcs().unwrap();
        assert_eq!(arcs[0][0], Coord { x: 10.5, y: 20.5 });
        assert_eq!(arcs[0][1], Coord { x: 11.0, y: 21.0 });
    }

    #[test]
    fn test_stitching_drops_shared_endpoint() {
        let topology = Topology::from_json_str(SQUARE).unwrap();
        let countries = topology.decode_object("countries").unwrap();
        assert_eq!(countries.len(), 3);

        let first = &countries[0];
        assert_eq!(first.id.as_deref(), Some("036"));
        assert_eq!(first.name.as_deref(), Some("Square"));
        let expected = line_string![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0),
            (x: 0.0, y: 0.0),
        ];
        assert_eq!(first.geometry.polygons()[0].rings[0], expected);
    }

    #[test]
    fn test_negative_indices_reverse_arcs() {
        let topology = Topology::from_json_str(SQUARE).unwrap();
        let countries = topology.decode_object("countries").unwrap();
        let reversed = &countries[1];
        assert_eq!(reversed.id.as_deref(), Some("840"));
        let expected = line_string![
            (x: 0.0, y: 0.0),
            (x: 0.0, y: 2.0),
            (x: 2.0, y: 2.0),
            (x: 2.0, y: 0.0),
            (x: 0.0, y: 0.0),
        ];
        assert_eq!(reversed.geometry.polygons()[0].rings[0], expected);
    }

    #[test]
    fn test_multipolygon_and_missing_id() {
        let topology = Topology::from_json_str(SQUARE).unwrap();
        let countries = topology.decode_object("countries").unwrap();
        let multi = &countries[2];
        assert!(multi.id.is_none());
        assert!(multi.geometry.is_multi());
        assert_eq!(multi.geometry.polygons().len(), 2);
    }

    #[test]
    fn test_missing_object_and_bad_index() {
        let topology = Topology::from_json_str(SQUARE).unwrap();
        assert!(matches!(
            topology.decode_object("land"),
            Err(GlobeError::InvalidTopology { .. })
        ));

        let arcs = topology.decode_arcs().unwrap();
        assert!(matches!(
            stitch_ring(&[0, 7], &arcs),
            Err(GlobeError::InvalidTopology { .. })
        ));
        assert!(stitch_ring(&[-8], &arcs).is_err());
    }

    #[test]
    fn test_short_ring_gets_closed() {
        let arcs = vec![vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }]];
        let ring = stitch_ring(&[0], &arcs).unwrap();
        assert_eq!(ring.0.len(), 3);
        assert_eq!(ring.0[0], ring.0[2]);
    }
}
