//! # Config Crate
//!
//! Centralized configuration constants for the ambigram pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DIGIT_VIEWBOX_WIDTH};
//!
//! let value: f64 = 1e-11; // smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! assert_eq!(DIGIT_VIEWBOX_WIDTH, 660.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
