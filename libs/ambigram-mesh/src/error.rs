//! # Mesh Error Types
//!
//! Error handling for solid generation and boolean evaluation.

use thiserror::Error;

/// Errors produced while building or combining solids.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// An outline had no interior to sweep.
    #[error("degenerate outline: {reason}")]
    DegenerateOutline {
        /// Why the outline cannot produce a solid.
        reason: String,
    },

    /// Cap triangulation could not find an ear.
    ///
    /// This indicates a self-intersecting or otherwise malformed ring.
    #[error("triangulation failed: no ear found with {remaining} vertices remaining")]
    NoEarFound {
        /// Vertices left in the working ring when clipping stalled.
        remaining: usize,
    },

    /// A hole could not be bridged to the outer boundary.
    #[error("triangulation failed: hole at index {hole} has no visible outer vertex")]
    HoleBridgeFailed {
        /// Index of the offending hole.
        hole: usize,
    },

    /// A boolean operand still carried a pending transform.
    #[error("boolean operand not frozen: bake the transform into vertices first")]
    OperandNotFrozen,

    /// A triangle referenced a vertex index past the end of the vertex list.
    #[error("triangle index {index} out of bounds ({vertex_count} vertices)")]
    IndexOutOfBounds {
        /// Offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
}

impl MeshError {
    /// Convenience constructor for degenerate-outline errors.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateOutline {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("fewer than 3 exterior points");
        assert!(err.to_string().contains("fewer than 3"));

        let err = MeshError::NoEarFound { remaining: 5 };
        assert!(err.to_string().contains("5 vertices"));

        let err = MeshError::IndexOutOfBounds {
            index: 9,
            vertex_count: 4,
        };
        assert!(err.to_string().contains("9"));
        assert!(err.to_string().contains("4"));
    }
}
