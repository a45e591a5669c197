//! # Boolean Evaluation
//!
//! Intersect and subtract over pairs of solids, by BSP clipping. Both
//! operands must be frozen (placements baked into vertices) so that the
//! clipping happens in a single shared frame.
//!
//! The clip sequences mirror the classic CSG formulation: build a tree per
//! operand, clip each against the other with the appropriate inversions,
//! then merge the surviving polygons back into an indexed mesh.

mod bsp;
mod plane;
mod polygon;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::solid::Solid;
use bsp::BspNode;
use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;
use polygon::Polygon;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Boolean operator over two solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    /// Volume common to both operands.
    Intersect,
    /// First operand minus the second.
    Subtract,
}

/// Evaluates `a <op> b` into a new solid with identity placement.
///
/// # Errors
///
/// Returns [`MeshError::OperandNotFrozen`] when either operand still
/// carries a pending placement.
pub fn evaluate(a: &Solid, b: &Solid, op: BooleanOp) -> Result<Solid, MeshError> {
    if !a.is_frozen() || !b.is_frozen() {
        return Err(MeshError::OperandNotFrozen);
    }
    let mut a = BspNode::new(mesh_to_polygons(a.mesh()));
    let mut b = BspNode::new(mesh_to_polygons(b.mesh()));

    match op {
        BooleanOp::Intersect => {
            a.invert();
            b.clip_to(&a);
            b.invert();
            a.clip_to(&b);
            b.clip_to(&a);
            a.build(b.all_polygons());
            a.invert();
        }
        BooleanOp::Subtract => {
            a.invert();
            a.clip_to(&b);
            b.clip_to(&a);
            b.invert();
            b.clip_to(&a);
            b.invert();
            a.build(b.all_polygons());
            a.invert();
        }
    }

    Ok(Solid::new(polygons_to_mesh(&a.all_polygons())))
}

/// Converts mesh triangles into BSP polygons.
///
/// Zero-area triangles (extrusion caps keep them for edge pairing) carry no
/// volume and are dropped here.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangles
        .iter()
        .filter_map(|&[a, b, c]| {
            Polygon::new(vec![
                mesh.vertices[a as usize],
                mesh.vertices[b as usize],
                mesh.vertices[c as usize],
            ])
        })
        .collect()
}

/// Fans clipped polygons back into an indexed mesh, merging vertices that
/// fall into the same quantization cell.
///
/// Clipping computes shared intersection points independently per polygon,
/// so coincident vertices differ by rounding noise; quantizing restores the
/// shared indices that watertightness checks and exports rely on.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();
    let mut merged: HashMap<(i64, i64, i64), u32> = HashMap::new();

    let mut index_of = |mesh: &mut Mesh, v: DVec3| -> u32 {
        let key = (
            (v.x / VERTEX_MERGE_EPSILON).round() as i64,
            (v.y / VERTEX_MERGE_EPSILON).round() as i64,
            (v.z / VERTEX_MERGE_EPSILON).round() as i64,
        );
        *merged.entry(key).or_insert_with(|| mesh.add_vertex(v))
    };

    for polygon in polygons {
        let anchor = index_of(&mut mesh, polygon.vertices[0]);
        for window in polygon.vertices[1..].windows(2) {
            let b = index_of(&mut mesh, window[0]);
            let c = index_of(&mut mesh, window[1]);
            if anchor != b && b != c && c != anchor {
                mesh.add_triangle(anchor, b, c);
            }
        }
    }
    mesh
}
