//! SVG path data for projected county shapes.

use crate::projection::{AlbersUsa, Point, Region};
use chd_core::topology::Ring;
use chd_core::{CountyShape, Fips};
use std::fmt::Write;

/// A county ready to draw: its FIPS code and SVG `d` attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFeature {
    pub fips: Fips,
    pub d: String,
}

/// Append `M x,y L x,y ... Z` for a closed ring of screen points.
pub fn push_ring(out: &mut String, points: &[Point]) {
    // A closed ring repeats its first point; `Z` draws that segment.
    let points = match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && first == last => &points[..points.len() - 1],
        _ => points,
    };
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(out, "{}{:.1},{:.1}", cmd, x, y);
    }
    if !points.is_empty() {
        out.push('Z');
    }
}

/// Project a ring into the region of its first projectable vertex so insets
/// stay whole. `None` when no vertex lies in any region.
pub fn project_ring(projection: &AlbersUsa, ring: &Ring) -> Option<Vec<Point>> {
    let region: Region = ring.iter().find_map(|&(lon, lat)| projection.region(lon, lat))?;
    Some(
        ring.iter()
            .map(|&(lon, lat)| projection.project_in(region, lon, lat))
            .collect(),
    )
}

/// SVG path data for every ring of a shape, or `None` if nothing projects.
pub fn shape_path(projection: &AlbersUsa, shape: &CountyShape) -> Option<String> {
    let mut d = String::new();
    for ring in shape.polygons.iter().flatten() {
        if let Some(points) = project_ring(projection, ring) {
            push_ring(&mut d, &points);
        }
    }
    (!d.is_empty()).then_some(d)
}

/// Project all shapes, dropping those entirely outside the projection.
pub fn project_shapes(projection: &AlbersUsa, shapes: &[CountyShape]) -> Vec<MapFeature> {
    let features: Vec<MapFeature> = shapes
        .iter()
        .filter_map(|shape| {
            shape_path(projection, shape).map(|d| MapFeature {
                fips: shape.fips.clone(),
                d,
            })
        })
        .collect();
    if features.len() < shapes.len() {
        log::warn!(
            "[CHD] path: {} of {} shapes fell outside the projection",
            shapes.len() - features.len(),
            shapes.len()
        );
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use chd_core::topology::parse_counties;

    #[test]
    fn ring_path_closes_with_z() {
        let mut d = String::new();
        push_ring(&mut d, &[(0.0, 0.0), (10.0, 0.0), (10.0, 5.5), (0.0, 0.0)]);
        assert_eq!(d, "M0.0,0.0L10.0,0.0L10.0,5.5Z");
    }

    #[test]
    fn empty_ring_writes_nothing() {
        let mut d = String::new();
        push_ring(&mut d, &[]);
        assert!(d.is_empty());
    }

    #[test]
    fn projects_fixture_shapes() {
        let shapes = parse_counties(include_str!("../../fixtures/sample_counties.topo.json")).unwrap();
        let usa = AlbersUsa::new(900.0, (400.0, 250.0));
        let features = project_shapes(&usa, &shapes);
        assert_eq!(features.len(), 3);
        for f in &features {
            assert!(f.d.starts_with('M'));
            assert!(f.d.ends_with('Z'));
        }
        assert_eq!(features[1].fips.as_str(), "01003");
    }

    #[test]
    fn shapes_outside_the_us_are_dropped() {
        let shape = CountyShape {
            fips: Fips::parse("99001").unwrap(),
            name: None,
            polygons: vec![vec![vec![(2.0, 48.0), (3.0, 48.0), (3.0, 49.0), (2.0, 48.0)]]],
        };
        let usa = AlbersUsa::new(900.0, (400.0, 250.0));
        assert!(shape_path(&usa, &shape).is_none());
        assert!(project_shapes(&usa, &[shape]).is_empty());
    }
}
