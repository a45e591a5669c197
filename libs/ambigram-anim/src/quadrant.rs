//! # Rotation Quadrants
//!
//! Classifies a display heading into one of four quadrants of the
//! horizontal plane. The swap logic only cares about quadrant crossings,
//! not the angle itself, so the classification has to be exact at the
//! boundaries: headings within [`QUADRANT_EPSILON`] of an axis snap onto
//! it, and each axis belongs to the quadrant that begins there (walking
//! counter-clockwise in the projected plane). A heading that lands exactly
//! on an axis therefore counts as already crossed.

use crate::settings::SpinDirection;
use config::constants::QUADRANT_EPSILON;
use glam::DVec3;

/// Quarter of the horizontal plane a heading points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Facing the viewer (+z heading).
    Q0,
    /// One quarter turn clockwise from the viewer.
    Q1,
    /// Facing away.
    Q2,
    /// One quarter turn counter-clockwise from the viewer.
    Q3,
}

impl Quadrant {
    /// Classifies a world-space heading (the solid's forward vector).
    ///
    /// The heading is projected onto the horizontal plane as
    /// `(x, y) = (heading.z, -heading.x)`, so that the rest heading `+z`
    /// maps to the positive x half-axis and a clockwise spin walks the
    /// projected point counter-clockwise through Q0, Q1, Q2, Q3.
    ///
    /// A heading with no horizontal component classifies as [`Quadrant::Q0`].
    pub fn from_heading(heading: DVec3) -> Self {
        let mut x = heading.z;
        let mut y = -heading.x;
        if x.abs() <= QUADRANT_EPSILON {
            x = 0.0;
        }
        if y.abs() <= QUADRANT_EPSILON {
            y = 0.0;
        }
        if x > 0.0 && y >= 0.0 {
            Self::Q0
        } else if x <= 0.0 && y > 0.0 {
            Self::Q1
        } else if x < 0.0 {
            Self::Q2
        } else if y < 0.0 {
            Self::Q3
        } else {
            Self::Q0 // zero heading
        }
    }

    /// Classifies a yaw angle about the vertical axis.
    ///
    /// Yaw zero faces the viewer; positive yaw turns counter-clockwise
    /// seen from above.
    pub fn from_yaw(yaw: f64) -> Self {
        Self::from_heading(DVec3::new(yaw.sin(), 0.0, yaw.cos()))
    }

    /// Classifies a yaw for crossing detection under a given spin.
    ///
    /// The fixed convention of [`Quadrant::from_heading`] closes each
    /// boundary on the side a clockwise spin enters. A counter-clockwise
    /// spin mirrors the yaw before classifying, so the boundary closure
    /// follows the motion either way: the rest heading opens a fresh
    /// quadrant, and the heading reached by an exact quarter turn counts
    /// as crossed. Under this classification both spins walk Q0, Q1, Q2,
    /// Q3 in travel order.
    pub fn from_yaw_under(yaw: f64, spin: SpinDirection) -> Self {
        match spin {
            SpinDirection::Clockwise => Self::from_yaw(yaw),
            SpinDirection::CounterClockwise => Self::from_yaw(-yaw),
        }
    }
}
