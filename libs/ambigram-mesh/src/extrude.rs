//! # Outline Extrusion
//!
//! Sweeps a closed outline along z to build a watertight solid. The sweep
//! depth is not a parameter: it always equals the width of the outline's
//! exterior bounding box, so that a quarter-turn about the vertical axis
//! presents the same silhouette width the front view does. That self-similar
//! depth is what lets two digit solids intersect into a shape readable from
//! both directions.
//!
//! Outline data is authored y-down; the finished mesh is mirrored into the
//! y-up world frame with `scale(1, -1, -1)`, which has positive determinant
//! and therefore preserves winding.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::solid::Solid;
use crate::triangulate::triangulate_outline;
use ambigram_outline::Outline;
use glam::{DMat4, DVec3};

/// Extrudes an outline into a solid, depth equal to its exterior width.
///
/// Returns `Ok(None)` for a degenerate outline (no enclosed area), so that
/// callers building batches can skip empty shapes without treating them as
/// failures. With `center_origin` the solid's bounding box is re-centered on
/// the world origin, which is what the rotating display expects.
///
/// # Errors
///
/// Returns [`MeshError`] when cap triangulation fails on a malformed ring.
pub fn extrude(outline: &Outline, center_origin: bool) -> Result<Option<Solid>, MeshError> {
    if outline.is_degenerate() {
        return Ok(None);
    }
    let outline = outline.normalized();
    // is_degenerate checked above, so the bounding box exists.
    let Some(bbox) = outline.bounding_box() else {
        return Ok(None);
    };
    let depth = bbox.width();

    let cap = triangulate_outline(&outline)?;

    // Flattened ring layout, matching the triangulation's index space:
    // bottom layer first, then the same points again at z = depth.
    let mut rings: Vec<&[glam::DVec2]> = vec![outline.exterior()];
    for hole in outline.holes() {
        rings.push(hole);
    }
    let layer: usize = rings.iter().map(|r| r.len()).sum();

    let mut mesh = Mesh::with_capacity(layer * 2, cap.len() * 2 + layer * 2);
    for z in [0.0, depth] {
        for ring in &rings {
            for p in *ring {
                mesh.add_vertex(DVec3::new(p.x, p.y, z));
            }
        }
    }
    let top = layer as u32;

    // Bottom cap faces -z, top cap faces +z.
    for &[a, b, c] in &cap {
        mesh.add_triangle(a, c, b);
    }
    for &[a, b, c] in &cap {
        mesh.add_triangle(top + a, top + b, top + c);
    }

    // Walls: one quad per ring edge. With a counter-clockwise exterior and
    // clockwise holes this split faces outward on both.
    let mut base = 0u32;
    for ring in &rings {
        let n = ring.len() as u32;
        for i in 0..n {
            let j = (i + 1) % n;
            let (ba, bb) = (base + i, base + j);
            let (ta, tb) = (top + base + i, top + base + j);
            mesh.add_triangle(ba, bb, tb);
            mesh.add_triangle(ba, tb, ta);
        }
        base += n;
    }

    // Mirror into the y-up world frame.
    mesh.transform(&DMat4::from_scale(DVec3::new(1.0, -1.0, -1.0)));
    if center_origin {
        if let Some((min, max)) = mesh.bounding_box() {
            let center = (min + max) * 0.5;
            mesh.transform(&DMat4::from_translation(-center));
        }
    }

    mesh.validate()?;
    Ok(Some(Solid::new(mesh)))
}
