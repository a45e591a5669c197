//! # Ambigram STL
//!
//! Binary STL export for ambigram solids, so a pair solid can go straight
//! from the pair table to a slicer. The solid's placement is baked into the
//! written coordinates; triangles keep their mesh winding and carry the
//! computed facet normal.
//!
//! Layout per the binary STL format: an 80-byte header, a little-endian
//! `u32` triangle count, then 50 bytes per triangle (normal, three
//! vertices, all `f32`, plus a zero attribute word).

use ambigram_mesh::Solid;
use glam::DVec3;
use std::io::{self, Write};
use thiserror::Error;

const HEADER: &[u8; 18] = b"ambigram stl 0.1.0";

/// Errors during STL export.
#[derive(Error, Debug)]
pub enum StlError {
    /// The mesh has no triangles to write.
    #[error("empty mesh cannot be exported")]
    EmptyMesh,

    /// Underlying writer failure.
    #[error("stl write failed: {0}")]
    Io(#[from] io::Error),
}

/// Number of bytes a solid occupies as binary STL.
pub fn binary_size(solid: &Solid) -> usize {
    84 + solid.mesh().triangle_count() * 50
}

/// Writes a solid as binary STL.
///
/// # Errors
///
/// Returns [`StlError::EmptyMesh`] for a solid with no triangles, and
/// propagates writer errors.
pub fn write_binary<W: Write>(solid: &Solid, writer: &mut W) -> Result<(), StlError> {
    if solid.mesh().is_empty() {
        return Err(StlError::EmptyMesh);
    }
    let solid = solid.frozen();
    let mesh = solid.mesh();

    let mut header = [0u8; 80];
    header[..HEADER.len()].copy_from_slice(HEADER);
    writer.write_all(&header)?;
    writer.write_all(&(mesh.triangle_count() as u32).to_le_bytes())?;

    for &[ia, ib, ic] in &mesh.triangles {
        let a = mesh.vertices[ia as usize];
        let b = mesh.vertices[ib as usize];
        let c = mesh.vertices[ic as usize];
        let normal = facet_normal(a, b, c);

        for v in [normal, a, b, c] {
            writer.write_all(&(v.x as f32).to_le_bytes())?;
            writer.write_all(&(v.y as f32).to_le_bytes())?;
            writer.write_all(&(v.z as f32).to_le_bytes())?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }
    Ok(())
}

/// Unit facet normal by the right-hand rule; zero for degenerate facets,
/// which the format permits (readers fall back to computing their own).
fn facet_normal(a: DVec3, b: DVec3, c: DVec3) -> DVec3 {
    let n = (b - a).cross(c - a);
    if n.length_squared() > 0.0 {
        n.normalize()
    } else {
        DVec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambigram_mesh::{extrude, Mesh};
    use ambigram_outline::Outline;
    use glam::DVec2;
    use std::f64::consts::FRAC_PI_2;

    fn cube() -> Solid {
        let outline = Outline::new(vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(0.0, 2.0),
        ]);
        extrude(&outline, true).unwrap().unwrap()
    }

    fn f32_at(bytes: &[u8], offset: usize) -> f32 {
        f32::from_le_bytes([
            bytes[offset],
            bytes[offset + 1],
            bytes[offset + 2],
            bytes[offset + 3],
        ])
    }

    #[test]
    fn test_binary_layout() {
        let solid = cube();
        let mut bytes = Vec::new();
        write_binary(&solid, &mut bytes).unwrap();

        assert_eq!(bytes.len(), binary_size(&solid));
        let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]);
        assert_eq!(count as usize, solid.mesh().triangle_count());
        assert_eq!(bytes.len(), 84 + count as usize * 50);

        // Each facet normal is unit length (no degenerate cap triangles in
        // a plain cube).
        for i in 0..count as usize {
            let base = 84 + i * 50;
            let n = [
                f32_at(&bytes, base),
                f32_at(&bytes, base + 4),
                f32_at(&bytes, base + 8),
            ];
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((length - 1.0).abs() < 1e-6);
            // attribute word is zero
            assert_eq!(bytes[base + 48], 0);
            assert_eq!(bytes[base + 49], 0);
        }
    }

    #[test]
    fn test_placement_is_baked() {
        let solid = cube().rotated_y(FRAC_PI_2).translated(DVec3::X * 100.0);
        let mut bytes = Vec::new();
        write_binary(&solid, &mut bytes).unwrap();

        // Every written x coordinate sits near 100.
        let count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;
        for i in 0..count {
            let base = 84 + i * 50;
            for vertex in 1..4 {
                let x = f32_at(&bytes, base + vertex * 12);
                assert!((x - 100.0).abs() <= 1.0 + 1e-5, "x = {x}");
            }
        }
    }

    #[test]
    fn test_empty_mesh_rejected() {
        let solid = Solid::new(Mesh::new());
        let mut bytes = Vec::new();
        assert!(matches!(
            write_binary(&solid, &mut bytes),
            Err(StlError::EmptyMesh)
        ));
    }
}
