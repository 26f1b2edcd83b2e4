//! TopoJSON decoding for county geometry.
//!
//! A topology stores shared boundary lines once in a top-level `arcs` table;
//! polygons reference arcs by index, with a negative index `!i` meaning arc
//! `i` traversed backwards. When a `transform` is present, arc positions are
//! quantized integers, delta-encoded from the previous position in the arc.

use crate::error::{ChdError, Result};
use crate::fips::Fips;
use serde::Deserialize;
use std::collections::HashMap;

/// Name of the county object in the us-atlas topology files.
pub const COUNTIES_OBJECT: &str = "counties";

/// A (longitude, latitude) position in degrees.
pub type Position = (f64, f64);
/// A closed ring of positions.
pub type Ring = Vec<Position>;
/// An exterior ring followed by any holes.
pub type Polygon = Vec<Ring>;

/// Decoded geometry for one county.
#[derive(Debug, Clone, PartialEq)]
pub struct CountyShape {
    pub fips: Fips,
    /// Name from the geometry properties, if any.
    pub name: Option<String>,
    pub polygons: Vec<Polygon>,
}

#[derive(Debug, Deserialize)]
struct Topology {
    #[serde(default)]
    transform: Option<Transform>,
    objects: HashMap<String, Geometry>,
    arcs: Vec<Vec<Vec<f64>>>,
}

#[derive(Debug, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
    Polygon {
        arcs: Vec<Vec<i64>>,
        #[serde(default)]
        id: Option<serde_json::Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    MultiPolygon {
        arcs: Vec<Vec<Vec<i64>>>,
        #[serde(default)]
        id: Option<serde_json::Value>,
        #[serde(default)]
        properties: Option<Properties>,
    },
    #[serde(other)]
    Unsupported,
}

/// Absolute arc coordinates after undoing quantization and delta encoding.
struct ArcTable {
    arcs: Vec<Vec<Position>>,
}

impl ArcTable {
    fn decode(raw: Vec<Vec<Vec<f64>>>, transform: Option<&Transform>) -> Self {
        let arcs = raw
            .into_iter()
            .map(|arc| match transform {
                Some(t) => {
                    let (mut x, mut y) = (0.0, 0.0);
                    arc.iter()
                        .filter(|p| p.len() >= 2)
                        .map(|p| {
                            x += p[0];
                            y += p[1];
                            (x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1])
                        })
                        .collect()
                }
                None => arc.iter().filter(|p| p.len() >= 2).map(|p| (p[0], p[1])).collect(),
            })
            .collect();
        Self { arcs }
    }

    /// Stitch a ring from arc references. Consecutive arcs share an endpoint,
    /// which is emitted once.
    fn ring(&self, refs: &[i64]) -> Result<Ring> {
        let mut ring: Ring = Vec::new();
        for &r in refs {
            let (index, reversed) = if r >= 0 { (r, false) } else { (!r, true) };
            let arc = usize::try_from(index)
                .ok()
                .and_then(|i| self.arcs.get(i))
                .ok_or(ChdError::InvalidArc {
                    index: r,
                    available: self.arcs.len(),
                })?;
            if !ring.is_empty() {
                ring.pop();
            }
            if reversed {
                ring.extend(arc.iter().rev().copied());
            } else {
                ring.extend(arc.iter().copied());
            }
        }
        Ok(ring)
    }

    fn polygon(&self, rings: &[Vec<i64>]) -> Result<Polygon> {
        rings.iter().map(|r| self.ring(r)).collect()
    }
}

/// Decode the `counties` object of a TopoJSON document into county shapes.
pub fn parse_counties(topojson: &str) -> Result<Vec<CountyShape>> {
    parse_object(topojson, COUNTIES_OBJECT)
}

/// Decode the polygons of the named topology object.
///
/// Geometries without a valid FIPS id and non-polygonal geometries are
/// skipped.
pub fn parse_object(topojson: &str, object: &str) -> Result<Vec<CountyShape>> {
    let topology: Topology = serde_json::from_str(topojson)?;
    let Topology {
        transform,
        mut objects,
        arcs,
    } = topology;
    let root = objects
        .remove(object)
        .ok_or_else(|| ChdError::MissingObject(object.to_string()))?;
    let table = ArcTable::decode(arcs, transform.as_ref());

    let mut shapes = Vec::new();
    let mut skipped = 0u32;
    collect_shapes(&table, root, &mut shapes, &mut skipped)?;
    if skipped > 0 {
        log::warn!("[CHD] topology: skipped {} geometries without a county shape", skipped);
    }
    log::info!("[CHD] topology: decoded {} {} shapes", shapes.len(), object);
    Ok(shapes)
}

fn collect_shapes(
    table: &ArcTable,
    geometry: Geometry,
    out: &mut Vec<CountyShape>,
    skipped: &mut u32,
) -> Result<()> {
    let (id, properties, polygons) = match geometry {
        Geometry::GeometryCollection { geometries } => {
            for g in geometries {
                collect_shapes(table, g, out, skipped)?;
            }
            return Ok(());
        }
        Geometry::Polygon { arcs, id, properties } => (id, properties, vec![table.polygon(&arcs)?]),
        Geometry::MultiPolygon { arcs, id, properties } => {
            let polygons = arcs
                .iter()
                .map(|p| table.polygon(p))
                .collect::<Result<Vec<_>>>()?;
            (id, properties, polygons)
        }
        Geometry::Unsupported => {
            *skipped += 1;
            return Ok(());
        }
    };

    match id.as_ref().and_then(Fips::from_json) {
        Some(fips) => out.push(CountyShape {
            fips,
            name: properties.and_then(|p| p.name),
            polygons,
        }),
        None => *skipped += 1,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TOPOLOGY: &str = include_str!("../../fixtures/sample_counties.topo.json");

    fn close(a: Position, b: Position) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    fn assert_ring(actual: &Ring, expected: &[Position]) {
        assert_eq!(actual.len(), expected.len(), "ring {:?}", actual);
        for (a, e) in actual.iter().zip(expected) {
            assert!(close(*a, *e), "{:?} != {:?}", a, e);
        }
    }

    #[test]
    fn decodes_counties_from_fixture() {
        let shapes = parse_counties(SAMPLE_TOPOLOGY).unwrap();
        let ids: Vec<&str> = shapes.iter().map(|s| s.fips.as_str()).collect();
        assert_eq!(ids, vec!["01001", "01003", "01005"]);
        assert_eq!(shapes[0].name.as_deref(), Some("Autauga"));
    }

    #[test]
    fn stitches_consecutive_arcs() {
        let shapes = parse_counties(SAMPLE_TOPOLOGY).unwrap();
        assert_ring(
            &shapes[0].polygons[0][0],
            &[(-90.0, 30.0), (-89.0, 30.0), (-89.0, 31.0), (-90.0, 31.0), (-90.0, 30.0)],
        );
    }

    #[test]
    fn reverses_negative_arc_references() {
        let shapes = parse_counties(SAMPLE_TOPOLOGY).unwrap();
        assert_ring(
            &shapes[1].polygons[0][0],
            &[(-89.0, 30.0), (-88.0, 30.0), (-88.0, 31.0), (-89.0, 31.0), (-89.0, 30.0)],
        );
    }

    #[test]
    fn numeric_ids_and_multipolygons() {
        let shapes = parse_counties(SAMPLE_TOPOLOGY).unwrap();
        let barbour = &shapes[2];
        assert_eq!(barbour.fips.as_str(), "01005");
        assert_eq!(barbour.polygons.len(), 1);
        assert_ring(
            &barbour.polygons[0][0],
            &[(-87.0, 30.0), (-86.0, 30.0), (-86.5, 31.0), (-87.0, 30.0)],
        );
    }

    #[test]
    fn untransformed_arcs_are_absolute() {
        let topo = r#"{
            "type": "Topology",
            "objects": { "counties": { "type": "Polygon", "arcs": [[0]], "id": "06037" } },
            "arcs": [[[-118.0, 34.0], [-117.5, 34.0], [-117.5, 34.5], [-118.0, 34.0]]]
        }"#;
        let shapes = parse_counties(topo).unwrap();
        assert_ring(
            &shapes[0].polygons[0][0],
            &[(-118.0, 34.0), (-117.5, 34.0), (-117.5, 34.5), (-118.0, 34.0)],
        );
    }

    #[test]
    fn missing_object_is_an_error() {
        let result = parse_object(SAMPLE_TOPOLOGY, "states");
        assert!(matches!(result, Err(ChdError::MissingObject(_))));
    }

    #[test]
    fn out_of_range_arc_is_an_error() {
        let topo = r#"{
            "type": "Topology",
            "objects": { "counties": { "type": "Polygon", "arcs": [[7]], "id": "01001" } },
            "arcs": []
        }"#;
        assert!(matches!(parse_counties(topo), Err(ChdError::InvalidArc { index: 7, .. })));
    }
}
