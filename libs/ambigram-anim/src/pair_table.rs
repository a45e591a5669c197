//! # Pair Table
//!
//! Precomputed boolean solids for every pair the animation can display.
//! Each entry combines the source solid (facing the viewer) with the target
//! solid baked at a quarter turn opposing the spin, so that finishing the
//! quarter presents the target silhouette. Entries are independent, so the
//! table builds its rows in parallel.
//!
//! Solid lists are index-stable: a degenerate outline leaves a `None` slot
//! instead of compacting the list, so pair indices always match outline
//! indices and never shift when a shape drops out.

use crate::error::AnimError;
use crate::settings::{AnimationConfig, PairPolicy};
use ambigram_mesh::boolean::evaluate;
use ambigram_mesh::{extrude, Solid};
use ambigram_outline::Outline;
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Extrudes outlines into display-ready solids, centered on the origin.
///
/// Degenerate outlines yield `None` in their slot rather than failing the
/// batch or shifting later indices.
///
/// # Errors
///
/// Propagates mesh errors from outlines that are malformed beyond being
/// degenerate.
pub fn solids_from_outlines(outlines: &[Outline]) -> Result<Vec<Option<Solid>>, AnimError> {
    let mut solids = Vec::with_capacity(outlines.len());
    for (index, outline) in outlines.iter().enumerate() {
        let solid = extrude(outline, true)?;
        if solid.is_none() {
            tracing::warn!(index, "degenerate outline produced no solid");
        }
        solids.push(solid);
    }
    Ok(solids)
}

/// Lookup table of pair solids.
#[derive(Debug, Clone)]
pub struct PairTable {
    entries: HashMap<(usize, usize), Solid>,
    solid_count: usize,
}

impl PairTable {
    /// Builds the table for `solids` under the given configuration.
    ///
    /// The policy decides which ordered pairs get an entry; pairs touching
    /// a `None` slot are left out. The spin direction decides which way the
    /// target operand is baked.
    ///
    /// # Errors
    ///
    /// Returns [`AnimError::NoSolids`] when no slot holds a solid, and
    /// propagates boolean evaluation failures.
    pub fn build(solids: &[Option<Solid>], config: &AnimationConfig) -> Result<Self, AnimError> {
        Self::build_with_progress(solids, config, |_, _| {})
    }

    /// [`PairTable::build`] with a per-pair progress callback.
    ///
    /// `progress(done, total)` fires after each pair solid finishes; calls
    /// arrive from worker threads in completion order.
    pub fn build_with_progress(
        solids: &[Option<Solid>],
        config: &AnimationConfig,
        progress: impl Fn(usize, usize) + Sync,
    ) -> Result<Self, AnimError> {
        if !solids.iter().any(Option::is_some) {
            return Err(AnimError::NoSolids);
        }
        let n = solids.len();
        let present = |i: usize| solids[i].is_some();
        let pairs: Vec<(usize, usize)> = match config.policy {
            PairPolicy::AllPairs => (0..n)
                .flat_map(|from| (0..n).map(move |to| (from, to)))
                .filter(|&(from, to)| present(from) && present(to))
                .collect(),
            PairPolicy::CyclicAdjacent => (0..n)
                .map(|from| (from, (from + 1) % n))
                .filter(|&(from, to)| present(from) && present(to))
                .collect(),
        };
        tracing::info!(
            solids = n,
            pairs = pairs.len(),
            policy = ?config.policy,
            op = ?config.op,
            "building pair table"
        );

        let quarter = config.spin.quarter_turn();
        let total = pairs.len();
        let done = AtomicUsize::new(0);
        let entries = pairs
            .par_iter()
            .map(|&(from, to)| {
                // presence filtered above
                let (Some(a), Some(b)) = (&solids[from], &solids[to]) else {
                    return Err(AnimError::MissingPair { from, to });
                };
                let a = a.frozen();
                let b = b.rotated_y(quarter).frozen();
                let solid = evaluate(&a, &b, config.op)?;
                tracing::debug!(
                    from,
                    to,
                    triangles = solid.mesh().triangle_count(),
                    "pair solid built"
                );
                progress(done.fetch_add(1, Ordering::Relaxed) + 1, total);
                Ok(((from, to), solid))
            })
            .collect::<Result<HashMap<_, _>, AnimError>>()?;

        Ok(Self {
            entries,
            solid_count: n,
        })
    }

    /// The solid displayed for a pair, if the table holds it.
    pub fn get(&self, from: usize, to: usize) -> Option<&Solid> {
        self.entries.get(&(from, to))
    }

    /// True when the table holds an entry for the pair.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.entries.contains_key(&(from, to))
    }

    /// Number of pair entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the index space pairs are drawn from (including `None`
    /// slots).
    pub fn solid_count(&self) -> usize {
        self.solid_count
    }
}
