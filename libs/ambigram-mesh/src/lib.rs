//! # Ambigram Mesh
//!
//! Solid geometry for the ambigram pipeline: extrudes closed 2D outlines
//! into watertight triangle meshes and evaluates boolean combinations of
//! pairs of solids.
//!
//! ## Architecture
//!
//! ```text
//! ambigram-outline (Outline) → extrude → Solid → boolean::evaluate → Solid
//! ```
//!
//! ## Algorithms
//!
//! - **Cap triangulation**: ear clipping with hole bridging
//! - **Boolean evaluation**: BSP clipping (csg.js algorithm)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ambigram_mesh::{extrude, boolean::{evaluate, BooleanOp}};
//!
//! let a = extrude(&outline_a, true)?.ok_or("degenerate")?;
//! let b = extrude(&outline_b, true)?.ok_or("degenerate")?;
//! let b = b.rotated_y(std::f64::consts::FRAC_PI_2).frozen();
//! let cross = evaluate(&a, &b, BooleanOp::Intersect)?;
//! ```

pub mod boolean;
pub mod error;
pub mod extrude;
pub mod mesh;
pub mod solid;
mod triangulate;

pub use error::MeshError;
pub use extrude::extrude;
pub use mesh::Mesh;
pub use solid::{Solid, Transform};
