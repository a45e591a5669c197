//! # Ambigram Outline
//!
//! Closed 2D outlines for the ambigram pipeline: an exterior boundary plus
//! zero or more hole boundaries, with winding normalization and bounding-box
//! queries. Also ships the ten built-in digit outlines (0-9), parsed from
//! the compact axis-aligned path data they were authored in.
//!
//! ## Architecture
//!
//! ```text
//! path data ("M0 1100V0h660v1100z...") → Outline → ambigram-mesh (extrusion)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ambigram_outline::digits::digit_outline;
//!
//! let zero = digit_outline(0).unwrap();
//! assert_eq!(zero.holes().len(), 1);
//! ```

pub mod digits;
pub mod error;
pub mod outline;
pub mod path_data;

pub use digits::{digit_outline, digit_outlines};
pub use error::OutlineError;
pub use outline::{signed_area, Aabb2, Outline};
