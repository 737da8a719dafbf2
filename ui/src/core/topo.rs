//! Minimal TopoJSON support for the choropleth map.
//!
//! The county atlas ships pre-projected planar coordinates, so geometry
//! decoding is arc stitching rather than cartography: quantized arcs are
//! delta-decoded through the topology transform and joined into SVG path
//! strings. `interior_mesh` reproduces the shared-border overlay (arcs used
//! by two different geometries) drawn on top of the counties.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopoError {
    #[error("topology has no object named `{0}`")]
    MissingObject(String),
    #[error("arc index {0} out of bounds ({1} arcs)")]
    ArcOutOfBounds(usize, usize),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub transform: Option<Transform>,
    pub arcs: Vec<Vec<[f64; 2]>>,
    pub objects: BTreeMap<String, Geometry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Transform {
    pub scale: [f64; 2],
    pub translate: [f64; 2],
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
    Polygon {
        #[serde(default)]
        id: Option<u32>,
        arcs: Vec<Vec<i32>>,
    },
    MultiPolygon {
        #[serde(default)]
        id: Option<u32>,
        arcs: Vec<Vec<Vec<i32>>>,
    },
}

/// One renderable region: a geometry id (the county fips) plus its SVG path.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: Option<u32>,
    pub path: String,
}

impl Topology {
    /// Arc positions in absolute coordinates, transform applied.
    fn decoded_arcs(&self) -> Vec<Vec<(f64, f64)>> {
        self.arcs
            .iter()
            .map(|arc| match self.transform {
                Some(t) => {
                    let mut x = 0.0;
                    let mut y = 0.0;
                    arc.iter()
                        .map(|p| {
                            x += p[0];
                            y += p[1];
                            (x * t.scale[0] + t.translate[0], y * t.scale[1] + t.translate[1])
                        })
                        .collect()
                }
                None => arc.iter().map(|p| (p[0], p[1])).collect(),
            })
            .collect()
    }

    fn object(&self, name: &str) -> Result<&Geometry, TopoError> {
        self.objects
            .get(name)
            .ok_or_else(|| TopoError::MissingObject(name.to_string()))
    }
}

/// Every polygonal geometry of `object` as an id + closed SVG path.
pub fn feature_paths(topology: &Topology, object: &str) -> Result<Vec<Region>, TopoError> {
    let arcs = topology.decoded_arcs();
    let mut regions = Vec::new();
    collect_regions(topology.object(object)?, &arcs, &mut regions)?;
    Ok(regions)
}

/// A single path covering each arc shared by two different geometries of
/// `object` — the interior borders, without the outer outline.
pub fn interior_mesh(topology: &Topology, object: &str) -> Result<String, TopoError> {
    let mut usage: BTreeMap<usize, usize> = BTreeMap::new();

    if let Geometry::GeometryCollection { geometries } = topology.object(object)? {
        for geometry in geometries {
            let mut seen = Vec::new();
            for_each_arc(geometry, &mut |arc_index| {
                let index = normalize(arc_index);
                // Count each arc once per geometry so a ring reusing its own
                // arc does not masquerade as a shared border.
                if !seen.contains(&index) {
                    seen.push(index);
                    *usage.entry(index).or_insert(0) += 1;
                }
            });
        }
    } else {
        for_each_arc(topology.object(object)?, &mut |arc_index| {
            *usage.entry(normalize(arc_index)).or_insert(0) += 1;
        });
    }

    let arcs = topology.decoded_arcs();
    let mut path = String::new();
    for (index, count) in usage {
        if count < 2 {
            continue;
        }
        let arc = arcs
            .get(index)
            .ok_or(TopoError::ArcOutOfBounds(index, arcs.len()))?;
        append_polyline(&mut path, arc);
    }
    Ok(path)
}

fn for_each_arc(geometry: &Geometry, visit: &mut impl FnMut(i32)) {
    match geometry {
        Geometry::GeometryCollection { geometries } => {
            for child in geometries {
                for_each_arc(child, visit);
            }
        }
        Geometry::Polygon { arcs, .. } => {
            for index in arcs.iter().flatten() {
                visit(*index);
            }
        }
        Geometry::MultiPolygon { arcs, .. } => {
            for index in arcs.iter().flatten().flatten() {
                visit(*index);
            }
        }
    }
}

fn collect_regions(
    geometry: &Geometry,
    arcs: &[Vec<(f64, f64)>],
    out: &mut Vec<Region>,
) -> Result<(), TopoError> {
    match geometry {
        Geometry::GeometryCollection { geometries } => {
            for child in geometries {
                collect_regions(child, arcs, out)?;
            }
        }
        Geometry::Polygon { id, arcs: rings } => {
            out.push(Region {
                id: *id,
                path: polygon_path(rings, arcs)?,
            });
        }
        Geometry::MultiPolygon { id, arcs: polygons } => {
            let mut path = String::new();
            for rings in polygons {
                path.push_str(&polygon_path(rings, arcs)?);
            }
            out.push(Region { id: *id, path });
        }
    }
    Ok(())
}

fn polygon_path(rings: &[Vec<i32>], arcs: &[Vec<(f64, f64)>]) -> Result<String, TopoError> {
    let mut path = String::new();
    for ring in rings {
        let points = stitch_ring(ring, arcs)?;
        append_ring(&mut path, &points);
    }
    Ok(path)
}

/// Join a ring's arcs into one point sequence. Negative indices take the
/// complement arc reversed; consecutive arcs share their junction point.
fn stitch_ring(ring: &[i32], arcs: &[Vec<(f64, f64)>]) -> Result<Vec<(f64, f64)>, TopoError> {
    let mut points: Vec<(f64, f64)> = Vec::new();
    for arc_index in ring {
        let index = normalize(*arc_index);
        let arc = arcs
            .get(index)
            .ok_or(TopoError::ArcOutOfBounds(index, arcs.len()))?;

        let mut segment: Vec<(f64, f64)> = arc.clone();
        if *arc_index < 0 {
            segment.reverse();
        }
        if !points.is_empty() {
            segment.remove(0);
        }
        points.extend(segment);
    }
    Ok(points)
}

fn normalize(arc_index: i32) -> usize {
    if arc_index < 0 {
        !arc_index as usize
    } else {
        arc_index as usize
    }
}

fn append_ring(path: &mut String, points: &[(f64, f64)]) {
    append_points(path, points);
    if !points.is_empty() {
        path.push('Z');
    }
}

fn append_polyline(path: &mut String, points: &[(f64, f64)]) {
    append_points(path, points);
}

fn append_points(path: &mut String, points: &[(f64, f64)]) {
    for (i, (x, y)) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{command}{x:.1},{y:.1}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two unit squares sharing one vertical edge. Arc 0 is the shared edge,
    // arcs 1 and 2 the outer three-sided hooks of each square.
    fn two_squares() -> Topology {
        serde_json::from_str(
            r#"{
                "type": "Topology",
                "transform": {"scale": [1, 1], "translate": [0, 0]},
                "arcs": [
                    [[1, 0], [0, 1]],
                    [[1, 1], [-1, 0], [0, -1], [1, 0]],
                    [[1, 0], [1, 0], [0, 1], [-1, 0]]
                ],
                "objects": {
                    "squares": {
                        "type": "GeometryCollection",
                        "geometries": [
                            {"type": "Polygon", "id": 1, "arcs": [[0, 1]]},
                            {"type": "Polygon", "id": 2, "arcs": [[-1, 2]]}
                        ]
                    }
                }
            }"#,
        )
        .expect("test topology parses")
    }

    #[test]
    fn feature_paths_yield_one_region_per_geometry() {
        let topo = two_squares();
        let regions = feature_paths(&topo, "squares").unwrap();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].id, Some(1));
        assert_eq!(regions[1].id, Some(2));
        for region in &regions {
            assert!(region.path.starts_with('M'));
            assert!(region.path.ends_with('Z'));
        }
    }

    #[test]
    fn transform_delta_decodes_arcs() {
        let topo = two_squares();
        let arcs = topo.decoded_arcs();
        // Arc 0 runs from (1, 0) up to (1, 1).
        assert_eq!(arcs[0], vec![(1.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn absolute_arcs_pass_through_without_transform() {
        let topo: Topology = serde_json::from_str(
            r#"{
                "arcs": [[[3.5, 2.0], [4.0, 2.5]]],
                "objects": {
                    "one": {"type": "Polygon", "id": 7, "arcs": [[0]]}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(topo.decoded_arcs()[0], vec![(3.5, 2.0), (4.0, 2.5)]);
    }

    #[test]
    fn mesh_keeps_only_shared_arcs() {
        let topo = two_squares();
        let mesh = interior_mesh(&topo, "squares").unwrap();
        // Only arc 0 (the shared edge) appears, rendered open.
        assert_eq!(mesh, "M1.0,0.0L1.0,1.0");
    }

    #[test]
    fn missing_object_is_reported() {
        let topo = two_squares();
        let err = feature_paths(&topo, "nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
