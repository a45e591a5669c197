//! # Display Switcher
//!
//! Drives the rotating display. Each tick advances the outer rotation by
//! one step; when the combined heading crosses into a new quadrant the
//! switcher swaps to the next pair and folds a corrective quarter turn into
//! the inner rotation, so the fresh pair's source silhouette faces the
//! viewer exactly as the old pair's target did.

use crate::advance::AdvanceRule;
use crate::error::AnimError;
use crate::pair_table::PairTable;
use crate::quadrant::Quadrant;
use crate::settings::{AnimationConfig, SpinDirection};
use ambigram_mesh::{Solid, Transform};

/// Rotating display state machine.
pub struct DisplaySwitcher {
    table: PairTable,
    advance: Box<dyn AdvanceRule>,
    spin: SpinDirection,
    signed_step: f64,
    correction: f64,
    /// Accumulated spin, grows monotonically.
    outer: f64,
    /// Accumulated swap corrections, one quarter turn per swap.
    inner: f64,
    pair: (usize, usize),
    baseline: Quadrant,
}

impl DisplaySwitcher {
    /// Creates a switcher over a prebuilt table.
    ///
    /// # Errors
    ///
    /// Returns [`AnimError::InvalidStep`] for an unusable step size and
    /// [`AnimError::MissingPair`] when the configured initial pair has no
    /// table entry.
    pub fn new(
        table: PairTable,
        config: &AnimationConfig,
        advance: Box<dyn AdvanceRule>,
    ) -> Result<Self, AnimError> {
        config.validate()?;
        let (from, to) = config.initial_pair;
        if !table.contains(from, to) {
            return Err(AnimError::MissingPair { from, to });
        }
        Ok(Self {
            table,
            advance,
            spin: config.spin,
            signed_step: config.signed_step(),
            correction: config.spin.quarter_turn(),
            outer: 0.0,
            inner: 0.0,
            pair: (from, to),
            baseline: Quadrant::from_yaw_under(0.0, config.spin),
        })
    }

    /// Advances one tick.
    ///
    /// Returns the newly displayed pair when this tick crossed a quadrant
    /// boundary, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AnimError::MissingPair`] when the advance rule selects a
    /// pair the table does not hold (a non-sequential rule over a cyclic
    /// table).
    pub fn tick(&mut self) -> Result<Option<(usize, usize)>, AnimError> {
        self.outer += self.signed_step;
        let quadrant = Quadrant::from_yaw_under(self.yaw(), self.spin);
        if quadrant == self.baseline {
            return Ok(None);
        }

        self.inner += self.correction;
        let next = self.advance.next_pair(self.pair, self.table.solid_count());
        if !self.table.contains(next.0, next.1) {
            return Err(AnimError::MissingPair {
                from: next.0,
                to: next.1,
            });
        }
        self.pair = next;
        // Baseline must reflect the corrected heading, or the next tick
        // would read the correction itself as another crossing.
        self.baseline = Quadrant::from_yaw_under(self.yaw(), self.spin);
        tracing::debug!(
            from = self.pair.0,
            to = self.pair.1,
            yaw = self.yaw(),
            "swapped pair"
        );
        Ok(Some(self.pair))
    }

    /// Combined display yaw: outer spin plus inner corrections.
    #[inline]
    pub fn yaw(&self) -> f64 {
        self.outer + self.inner
    }

    /// Placement to render the current solid at.
    pub fn world_transform(&self) -> Transform {
        Transform {
            rotation_y: self.yaw(),
            ..Transform::IDENTITY
        }
    }

    /// The solid currently on display.
    pub fn current(&self) -> &Solid {
        match self.table.get(self.pair.0, self.pair.1) {
            Some(solid) => solid,
            // Pair membership is checked at construction and on every swap.
            None => unreachable!("displayed pair missing from table"),
        }
    }

    /// The (from, to) indices currently on display.
    #[inline]
    pub fn displayed_pair(&self) -> (usize, usize) {
        self.pair
    }
}
