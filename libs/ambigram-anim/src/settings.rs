//! # Animation Settings
//!
//! Declarative configuration for the rotating display: spin direction,
//! per-tick step, pair selection policy, and the boolean operator used to
//! build pair solids. Deserializable so that a host can load the whole
//! animation setup from a settings file.

use crate::error::AnimError;
use ambigram_mesh::boolean::BooleanOp;
use config::constants::{DEFAULT_STEP_DEGREES, QUARTER_TURN};
use serde::{Deserialize, Serialize};

/// Direction the display spins, as seen from above (looking down -Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpinDirection {
    /// Yaw decreases each tick.
    #[default]
    Clockwise,
    /// Yaw increases each tick.
    CounterClockwise,
}

impl SpinDirection {
    /// Sign applied to the per-tick step.
    pub fn step_sign(self) -> f64 {
        match self {
            Self::Clockwise => -1.0,
            Self::CounterClockwise => 1.0,
        }
    }

    /// Signed quarter turn opposing the spin, in radians.
    ///
    /// Serves double duty: the yaw the "to" operand is baked at when a pair
    /// solid is built, and the correction added to the display's inner
    /// rotation at each swap so the fresh pair faces the viewer again.
    pub fn quarter_turn(self) -> f64 {
        -self.step_sign() * QUARTER_TURN
    }
}

/// Which pairs the table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairPolicy {
    /// Every ordered pair of solids, diagonal included.
    #[default]
    AllPairs,
    /// Only (i, i+1 mod n): enough for a sequential count-up and much
    /// cheaper to build.
    CyclicAdjacent,
}

/// Full animation setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Rotation per tick, degrees (unsigned; direction comes from `spin`).
    pub step_degrees: f64,
    /// Spin direction.
    pub spin: SpinDirection,
    /// Pair selection policy.
    pub policy: PairPolicy,
    /// Boolean operator used for pair solids.
    pub op: BooleanOp,
    /// Pair shown first, as (from, to) solid indices.
    pub initial_pair: (usize, usize),
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_degrees: DEFAULT_STEP_DEGREES,
            spin: SpinDirection::default(),
            policy: PairPolicy::default(),
            op: BooleanOp::Intersect,
            initial_pair: (0, 1),
        }
    }
}

impl AnimationConfig {
    /// Per-tick step in radians, signed by the spin direction.
    pub fn signed_step(&self) -> f64 {
        self.spin.step_sign() * self.step_degrees.to_radians()
    }

    /// Checks the step size.
    ///
    /// A step above 90 degrees can cross a whole quadrant in one tick and
    /// skip swaps, so it is rejected along with non-positive steps.
    ///
    /// # Errors
    ///
    /// Returns [`AnimError::InvalidStep`] for steps outside `(0, 90]`.
    pub fn validate(&self) -> Result<(), AnimError> {
        if !self.step_degrees.is_finite()
            || self.step_degrees <= 0.0
            || self.step_degrees > 90.0
        {
            return Err(AnimError::InvalidStep {
                degrees: self.step_degrees,
            });
        }
        Ok(())
    }
}
