//! # Animation Error Types

use ambigram_mesh::MeshError;
use thiserror::Error;

/// Errors from pair table construction and display switching.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimError {
    /// No solids were available to build a pair table from.
    #[error("no solids to build a pair table from")]
    NoSolids,

    /// A requested pair is not present in the table.
    #[error("pair ({from}, {to}) not in the table")]
    MissingPair {
        /// Source solid index.
        from: usize,
        /// Target solid index.
        to: usize,
    },

    /// The per-tick rotation step is outside the usable range.
    #[error("step of {degrees} degrees per tick is outside (0, 90]")]
    InvalidStep {
        /// Offending step size.
        degrees: f64,
    },

    /// Geometry failure while evaluating a pair solid.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnimError::MissingPair { from: 3, to: 7 };
        assert_eq!(err.to_string(), "pair (3, 7) not in the table");

        let err = AnimError::InvalidStep { degrees: -1.0 };
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_mesh_error_converts() {
        let err: AnimError = MeshError::OperandNotFrozen.into();
        assert!(matches!(err, AnimError::Mesh(_)));
    }
}
