// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insert/delete transition tracking for batched updates.
//!
//! A batch moves the tracker from idle to collecting. While collecting,
//! inserted items (by post-update index) and deleted items (by pre-update
//! index) are remembered so that their one-shot entry and exit geometry can
//! be served. Each index is served at most once; finalizing the batch drops
//! whatever was never asked for.
//!
//! Moves and reloads carry no special geometry and are not tracked.

use hashbrown::HashSet;
use kurbo::Point;

use crate::attributes::TransformedAttributes;

/// One operation of a batched update, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateOp {
    /// An item was inserted.
    Insert {
        /// Index of the item after the update.
        after: usize,
    },
    /// An item was deleted.
    Delete {
        /// Index of the item before the update.
        before: usize,
    },
    /// An item moved.
    Move {
        /// Index before the update.
        before: usize,
        /// Index after the update.
        after: usize,
    },
    /// An item was reloaded in place.
    Reload {
        /// Index of the reloaded item.
        index: usize,
    },
}

/// Which half of a batch the tracker is in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BatchPhase {
    /// No batch is in flight.
    #[default]
    Idle,
    /// Between announce and finalize.
    Collecting,
}

/// Counts of operations accepted by [`TransitionTracker::announce`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Inserts recorded.
    pub inserts: u32,
    /// Deletes recorded.
    pub deletes: u32,
    /// Moves and reloads seen but not tracked.
    pub untracked: u32,
    /// Entries left over from a batch that was never finalized.
    pub discarded: u32,
}

/// Pending insert and delete indices for the current batch.
#[derive(Clone, Debug, Default)]
pub struct TransitionTracker {
    phase: BatchPhase,
    inserting: HashSet<usize>,
    deleting: HashSet<usize>,
}

impl TransitionTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a batch and records its inserts and deletes.
    ///
    /// Any state left over from an unfinalized batch is discarded first so
    /// unrelated transitions never merge.
    pub fn announce(&mut self, ops: &[UpdateOp]) -> BatchSummary {
        let mut summary = BatchSummary {
            discarded: saturating_u32(self.inserting.len() + self.deleting.len()),
            ..BatchSummary::default()
        };
        self.inserting.clear();
        self.deleting.clear();
        self.phase = BatchPhase::Collecting;

        for op in ops {
            match *op {
                UpdateOp::Insert { after } => {
                    self.inserting.insert(after);
                    summary.inserts += 1;
                }
                UpdateOp::Delete { before } => {
                    self.deleting.insert(before);
                    summary.deletes += 1;
                }
                UpdateOp::Move { .. } | UpdateOp::Reload { .. } => summary.untracked += 1,
            }
        }
        summary
    }

    /// Ends the batch, dropping every unserved entry.
    ///
    /// Returns how many entries were never served.
    pub fn finalize(&mut self) -> u32 {
        let unserved = saturating_u32(self.inserting.len() + self.deleting.len());
        self.inserting.clear();
        self.deleting.clear();
        self.phase = BatchPhase::Idle;
        unserved
    }

    /// Whether `index` has an unserved insert transition.
    #[must_use]
    pub fn is_inserting(&self, index: usize) -> bool {
        self.inserting.contains(&index)
    }

    /// Whether `index` has an unserved delete transition.
    #[must_use]
    pub fn is_deleting(&self, index: usize) -> bool {
        self.deleting.contains(&index)
    }

    /// Removes `index` from the inserting set, returning whether it was there.
    pub fn take_inserting(&mut self, index: usize) -> bool {
        self.inserting.remove(&index)
    }

    /// Removes `index` from the deleting set, returning whether it was there.
    pub fn take_deleting(&mut self, index: usize) -> bool {
        self.deleting.remove(&index)
    }

    /// Current batch phase.
    #[must_use]
    pub fn phase(&self) -> BatchPhase {
        self.phase
    }

    /// Whether a batch is between announce and finalize.
    #[must_use]
    pub fn is_collecting(&self) -> bool {
        self.phase == BatchPhase::Collecting
    }

    /// Number of inserts not yet served.
    #[must_use]
    pub fn pending_inserts(&self) -> usize {
        self.inserting.len()
    }

    /// Number of deletes not yet served.
    #[must_use]
    pub fn pending_deletes(&self) -> usize {
        self.deleting.len()
    }
}

/// Moves the item so it sits just above the content origin.
///
/// The override always acts on `y`: for horizontal carousels that is the
/// cross axis, for vertical ones the item slides in from before the first
/// item.
#[must_use]
pub fn offscreen_attributes(attrs: TransformedAttributes) -> TransformedAttributes {
    TransformedAttributes {
        center: Point::new(attrs.center.x, -attrs.size.height / 2.0),
        ..attrs
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "counts are capped at u32::MAX"
)]
fn saturating_u32(n: usize) -> u32 {
    n.min(u32::MAX as usize) as u32
}
