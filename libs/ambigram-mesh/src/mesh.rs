//! # Triangle Mesh
//!
//! Indexed triangle mesh with `f64` vertices. Triangles wind
//! counter-clockwise when seen from outside the solid, so per-face normals
//! point outward and the signed volume of a closed mesh is positive.

use crate::error::MeshError;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<DVec3>,
    /// Triangles as index triples into `vertices`, CCW from outside.
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with preallocated capacity.
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Appends a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Appends a triangle.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Checks that every triangle index is in bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexOutOfBounds`] for the first bad index.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();
        for triangle in &self.triangles {
            for &index in triangle {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfBounds {
                        index,
                        vertex_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Axis-aligned bounding box, or `None` for a vertexless mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }
        Some((min, max))
    }

    /// Applies a transform to every vertex in place.
    ///
    /// The caller is responsible for the transform's handedness: a negative
    /// determinant flips winding and must be paired with
    /// [`Mesh::flip_winding`] to keep normals outward.
    pub fn transform(&mut self, matrix: &DMat4) {
        for vertex in &mut self.vertices {
            *vertex = matrix.transform_point3(*vertex);
        }
    }

    /// Reverses the winding of every triangle.
    pub fn flip_winding(&mut self) {
        for triangle in &mut self.triangles {
            triangle.swap(1, 2);
        }
    }

    /// Signed volume via the divergence theorem.
    ///
    /// Positive for a closed mesh with outward-facing normals.
    pub fn signed_volume(&self) -> f64 {
        let mut sum = 0.0;
        for &[ia, ib, ic] in &self.triangles {
            let a = self.vertices[ia as usize];
            let b = self.vertices[ib as usize];
            let c = self.vertices[ic as usize];
            sum += a.dot(b.cross(c));
        }
        sum / 6.0
    }

    /// True when every undirected edge is shared by exactly two triangles,
    /// once in each direction.
    ///
    /// This is the manifold condition for a closed oriented surface; an open
    /// boundary or an inconsistently wound face both fail it.
    pub fn is_watertight(&self) -> bool {
        use std::collections::HashMap;

        if self.triangles.is_empty() {
            return false;
        }
        // Count directed edges; watertight means every (a, b) is balanced
        // by exactly one (b, a).
        let mut directed: HashMap<(u32, u32), i32> = HashMap::new();
        for &[a, b, c] in &self.triangles {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                if u == v {
                    return false;
                }
                let key = if u < v { (u, v) } else { (v, u) };
                let delta = if u < v { 1 } else { -1 };
                *directed.entry(key).or_insert(0) += delta;
                // More than two uses of an undirected edge is non-manifold
                // even when the signs happen to balance; track totals too.
            }
        }
        let mut totals: HashMap<(u32, u32), u32> = HashMap::new();
        for &[a, b, c] in &self.triangles {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                let key = if u < v { (u, v) } else { (v, u) };
                *totals.entry(key).or_insert(0) += 1;
            }
        }
        directed.values().all(|&balance| balance == 0)
            && totals.values().all(|&count| count == 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DVec3;

    /// Unit tetrahedron with outward-facing CCW triangles.
    fn tetrahedron() -> Mesh {
        let mut mesh = Mesh::new();
        let o = mesh.add_vertex(DVec3::ZERO);
        let x = mesh.add_vertex(DVec3::X);
        let y = mesh.add_vertex(DVec3::Y);
        let z = mesh.add_vertex(DVec3::Z);
        mesh.add_triangle(o, y, x);
        mesh.add_triangle(o, x, z);
        mesh.add_triangle(o, z, y);
        mesh.add_triangle(x, y, z);
        mesh
    }

    #[test]
    fn test_counts_and_bounds() {
        let mesh = tetrahedron();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 4);
        let (min, max) = mesh.bounding_box().unwrap();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::ONE);
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.bounding_box().is_none());
        assert!(!mesh.is_watertight());
    }

    #[test]
    fn test_validate_catches_bad_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::IndexOutOfBounds { index: 1, .. })
        ));
        assert!(tetrahedron().validate().is_ok());
    }

    #[test]
    fn test_signed_volume_of_tetrahedron() {
        assert_relative_eq!(tetrahedron().signed_volume(), 1.0 / 6.0);
    }

    #[test]
    fn test_flip_winding_negates_volume() {
        let mut mesh = tetrahedron();
        mesh.flip_winding();
        assert_relative_eq!(mesh.signed_volume(), -1.0 / 6.0);
    }

    #[test]
    fn test_transform_translates_volume_invariantly() {
        let mut mesh = tetrahedron();
        mesh.transform(&DMat4::from_translation(DVec3::new(5.0, -2.0, 3.0)));
        assert_relative_eq!(mesh.signed_volume(), 1.0 / 6.0, epsilon = 1e-12);
        let (min, _) = mesh.bounding_box().unwrap();
        assert_eq!(min, DVec3::new(5.0, -2.0, 3.0));
    }

    #[test]
    fn test_tetrahedron_is_watertight() {
        assert!(tetrahedron().is_watertight());
    }

    #[test]
    fn test_open_mesh_is_not_watertight() {
        let mut mesh = tetrahedron();
        mesh.triangles.pop();
        assert!(!mesh.is_watertight());
    }

    #[test]
    fn test_inconsistent_winding_is_not_watertight() {
        let mut mesh = tetrahedron();
        mesh.triangles[3].swap(1, 2);
        assert!(!mesh.is_watertight());
    }
}
