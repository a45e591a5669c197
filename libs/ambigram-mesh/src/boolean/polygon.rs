//! Convex polygon carried through BSP clipping.

use crate::boolean::plane::Plane;
use glam::DVec3;

/// A convex planar polygon with a cached supporting plane.
///
/// Polygons start out as mesh triangles but grow extra vertices when a
/// clipping plane slices through them.
#[derive(Debug, Clone)]
pub(crate) struct Polygon {
    pub vertices: Vec<DVec3>,
    pub plane: Plane,
}

impl Polygon {
    /// Builds a polygon from its vertex loop.
    ///
    /// Returns `None` when the loop is degenerate (no supporting plane).
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Reverses orientation: vertex order and supporting plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }
}
