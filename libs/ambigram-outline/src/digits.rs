//! # Built-In Digit Outlines
//!
//! The ten digit silhouettes (0-9) used to build the rotating-digit
//! illusion, authored as axis-aligned path data in a 660x1100 viewbox with
//! even-odd fill: the first ring of each path is the exterior, any further
//! rings are holes.

use crate::error::OutlineError;
use crate::outline::Outline;
use crate::path_data;
use config::constants::DIGIT_COUNT;

/// Path data for digits 0 through 9 (viewbox 660x1100, y pointing down).
const DIGIT_PATHS: [&str; DIGIT_COUNT] = [
    "M0 1100V0h660v1100zm220-220V220h220v660z",
    "M220 220v660H0v220h660V880H440V0H0v220z",
    "M220 660h440V0H0v220h440v220H0v660h660V880H220z",
    "M0 1100h660V0H0v220h440v220H220v220h220v220H0z",
    "M440 440H220V0H0v660h440v440h220V0H440z",
    "M220 440h440v660H0V880h440V660H0V0h660v220H220z",
    "M0 1100V0h660v220H220v220h440v660zm220-220V660h220v220z",
    "M660 1100V0H0v220h440v880z",
    "M660 0v1100H0V0zM220 880V660h220v220zm220-660v220H220V220z",
    "M660 0v1100H0V880h440V660H0V0zM440 220v220H220V220z",
];

/// Returns the outline for a single digit, winding-normalized.
///
/// # Errors
///
/// Returns [`OutlineError::DigitOutOfRange`] for digits above 9. Parse
/// errors cannot occur for the built-in data but propagate for uniformity.
pub fn digit_outline(digit: u8) -> Result<Outline, OutlineError> {
    let path = DIGIT_PATHS
        .get(digit as usize)
        .ok_or(OutlineError::DigitOutOfRange(digit))?;
    let rings = path_data::parse(path)?;
    // Every digit path has at least one ring, so from_rings cannot fail.
    Ok(Outline::from_rings(rings)
        .unwrap_or_else(|| Outline::new(Vec::new()))
        .normalized())
}

/// Returns all ten digit outlines in order.
pub fn digit_outlines() -> Result<Vec<Outline>, OutlineError> {
    (0..DIGIT_COUNT as u8).map(digit_outline).collect()
}
