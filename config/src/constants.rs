//! # Configuration Constants
//!
//! Centralized constants for the ambigram pipeline. All geometry tolerances,
//! digit outline dimensions, and animation defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Outlines**: Digit viewbox dimensions
//! - **Animation**: Default rotation parameters

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for plane classification during BSP clipping.
///
/// Larger than [`EPSILON`] because boolean evaluation must tolerate the
/// numerical noise that accumulates when intersection points are computed
/// on near-coincident geometry. Points closer to a plane than this are
/// treated as lying on it.
pub const BSP_EPSILON: f64 = 1e-5;

/// Epsilon for vertex deduplication.
///
/// Tolerance used when merging nearly-identical vertices while stitching
/// boolean output back into an indexed mesh. This cleans up numerical noise
/// from polygon splitting so shared edges index the same vertices.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Snap tolerance for quadrant classification.
///
/// A heading component closer to zero than this is treated as exactly on a
/// quadrant boundary, so accumulated per-tick floating-point drift cannot
/// move a boundary crossing by a tick.
pub const QUADRANT_EPSILON: f64 = 1e-9;

// =============================================================================
// OUTLINE CONSTANTS
// =============================================================================

/// Width of the digit outline viewbox.
///
/// Every built-in digit outline is authored in a 660x1100 coordinate box.
/// The width doubles as the extrusion depth under the self-referential
/// depth rule, which keeps all ten digit solids commensurable for the
/// 90-degree-rotated intersections.
pub const DIGIT_VIEWBOX_WIDTH: f64 = 660.0;

/// Height of the digit outline viewbox.
pub const DIGIT_VIEWBOX_HEIGHT: f64 = 1100.0;

/// Number of built-in digit outlines (0 through 9).
pub const DIGIT_COUNT: usize = 10;

// =============================================================================
// ANIMATION CONSTANTS
// =============================================================================

/// Default per-tick rotation step in degrees.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_STEP_DEGREES;
/// assert!(DEFAULT_STEP_DEGREES < 90.0);
/// ```
pub const DEFAULT_STEP_DEGREES: f64 = 0.5;

/// A quarter turn in radians.
///
/// The displayed solid is swapped every quarter turn of the outer rotation,
/// and the corrective reset applied on each swap is exactly this amount.
pub const QUARTER_TURN: f64 = std::f64::consts::FRAC_PI_2;
