//! # Ambigram Anim
//!
//! Rotation-driven display logic: precomputes a table of boolean pair
//! solids, then walks it with a quadrant-tracking switcher that swaps
//! solids every quarter turn. The net effect is a shape that spins
//! continuously while reading as an endless sequence of digits.
//!
//! ## Architecture
//!
//! ```text
//! outlines → solids_from_outlines → PairTable::build ┐
//!                                                    ▼
//!            AnimationConfig + AdvanceRule → DisplaySwitcher::tick
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let solids = solids_from_outlines(&digit_outlines()?)?;
//! let config = AnimationConfig::default();
//! let table = PairTable::build(&solids, &config)?;
//! let mut switcher = DisplaySwitcher::new(table, &config, Box::new(Sequential))?;
//! loop {
//!     switcher.tick()?;
//!     render(switcher.current(), switcher.world_transform());
//! }
//! ```

pub mod advance;
pub mod error;
pub mod pair_table;
pub mod quadrant;
pub mod settings;
pub mod switcher;

pub use advance::{AdvanceRule, RandomNoRepeat, Sequential};
pub use error::AnimError;
pub use pair_table::{solids_from_outlines, PairTable};
pub use quadrant::Quadrant;
pub use settings::{AnimationConfig, PairPolicy, SpinDirection};
pub use switcher::DisplaySwitcher;
