//! # Placed Solid
//!
//! A [`Solid`] pairs a triangle mesh with a rigid placement. The placement
//! stays symbolic (translation, yaw, uniform scale) until a consumer needs
//! baked coordinates, at which point [`Solid::frozen`] folds it into the
//! vertices. Boolean evaluation requires frozen operands so that clipping
//! happens in one shared coordinate frame.

use crate::mesh::Mesh;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Rigid placement: scale, then yaw about +Y, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World-space offset, applied last.
    pub translation: DVec3,
    /// Rotation about the vertical (+Y) axis, radians.
    pub rotation_y: f64,
    /// Uniform scale, applied first.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity placement.
    pub const IDENTITY: Self = Self {
        translation: DVec3::ZERO,
        rotation_y: 0.0,
        scale: 1.0,
    };

    /// True when applying this placement changes nothing.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Composes the placement into a matrix.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(self.translation)
            * DMat4::from_rotation_y(self.rotation_y)
            * DMat4::from_scale(DVec3::splat(self.scale))
    }
}

/// A triangle mesh with a pending placement.
///
/// Solids are immutable values: the placement builders return new solids
/// instead of mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    mesh: Mesh,
    transform: Transform,
}

impl Solid {
    /// Wraps a mesh with the identity placement.
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            transform: Transform::IDENTITY,
        }
    }

    /// The underlying mesh, in local coordinates.
    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The pending placement.
    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns a copy yawed by `radians` about +Y (composed onto any
    /// existing yaw).
    pub fn rotated_y(&self, radians: f64) -> Self {
        let mut solid = self.clone();
        solid.transform.rotation_y += radians;
        solid
    }

    /// Returns a copy offset by `delta` in world space.
    pub fn translated(&self, delta: DVec3) -> Self {
        let mut solid = self.clone();
        solid.transform.translation += delta;
        solid
    }

    /// True when the placement has already been baked into the vertices.
    #[inline]
    pub fn is_frozen(&self) -> bool {
        self.transform.is_identity()
    }

    /// Bakes the placement into the vertices and resets it to identity.
    ///
    /// Uniform positive scale and yaw preserve orientation, so winding is
    /// untouched.
    pub fn frozen(&self) -> Self {
        if self.is_frozen() {
            return self.clone();
        }
        let mut mesh = self.mesh.clone();
        mesh.transform(&self.transform.matrix());
        Self::new(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn unit_tetrahedron() -> Mesh {
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
    fn test_identity_transform() {
        assert!(Transform::IDENTITY.is_identity());
        assert_eq!(Transform::default().matrix(), DMat4::IDENTITY);
        let solid = Solid::new(unit_tetrahedron());
        assert!(solid.is_frozen());
        assert_eq!(solid.frozen(), solid);
    }

    #[test]
    fn test_rotated_y_composes() {
        let solid = Solid::new(unit_tetrahedron())
            .rotated_y(FRAC_PI_2)
            .rotated_y(FRAC_PI_2);
        assert_relative_eq!(solid.transform().rotation_y, std::f64::consts::PI);
        assert!(!solid.is_frozen());
    }

    #[test]
    fn test_frozen_bakes_placement() {
        let solid = Solid::new(unit_tetrahedron())
            .rotated_y(FRAC_PI_2)
            .translated(DVec3::new(10.0, 0.0, 0.0));
        let frozen = solid.frozen();
        assert!(frozen.is_frozen());
        // +X yawed a quarter turn about +Y lands on -Z, then shifts +10 in x.
        let x_vertex = frozen.mesh().vertices[1];
        assert_relative_eq!(x_vertex.x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(x_vertex.z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_frozen_preserves_volume_and_winding() {
        let solid = Solid::new(unit_tetrahedron()).rotated_y(1.25);
        let frozen = solid.frozen();
        assert_relative_eq!(
            frozen.mesh().signed_volume(),
            1.0 / 6.0,
            epsilon = 1e-12
        );
    }
}
