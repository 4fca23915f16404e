// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport state cache guarding parameter derivation.
//!
//! Deriving insets and line spacing is idempotent but not free, and hosts
//! call `prepare` on every frame. [`LayoutStateCache`] remembers the last
//! viewport size and axis that parameters were derived for so unchanged
//! frames skip the derivation entirely.

use kurbo::Size;

use crate::axis::ScrollAxis;

/// The viewport geometry that derived parameters depend on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportState {
    /// Layout viewport size.
    pub size: Size,
    /// Active scroll axis.
    pub axis: ScrollAxis,
}

impl ViewportState {
    /// Creates a viewport state.
    #[inline]
    #[must_use]
    pub const fn new(size: Size, axis: ScrollAxis) -> Self {
        Self { size, axis }
    }
}

/// Remembers the last committed [`ViewportState`].
///
/// The cache starts empty, so the first query always asks for a
/// recomputation.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutStateCache {
    committed: Option<ViewportState>,
}

impl LayoutStateCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { committed: None }
    }

    /// Returns `true` iff `size` or `axis` differs from the committed state.
    ///
    /// Sizes are compared by exact equality of both dimensions.
    #[must_use]
    pub fn should_recompute(&self, size: Size, axis: ScrollAxis) -> bool {
        self.committed != Some(ViewportState::new(size, axis))
    }

    /// Records `size` and `axis` as the state parameters were derived for.
    pub fn commit(&mut self, size: Size, axis: ScrollAxis) {
        self.committed = Some(ViewportState::new(size, axis));
    }

    /// Forgets the committed state so the next query recomputes.
    pub fn invalidate(&mut self) {
        self.committed = None;
    }

    /// The last committed state, if any.
    #[must_use]
    pub const fn committed(&self) -> Option<ViewportState> {
        self.committed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_always_recomputes() {
        let cache = LayoutStateCache::new();
        assert!(cache.should_recompute(Size::ZERO, ScrollAxis::Horizontal));
        assert!(cache.committed().is_none());
    }

    #[test]
    fn unchanged_state_skips_recompute() {
        let mut cache = LayoutStateCache::new();
        cache.commit(Size::new(320.0, 200.0), ScrollAxis::Horizontal);
        assert!(!cache.should_recompute(Size::new(320.0, 200.0), ScrollAxis::Horizontal));
        // Querying has no side effects.
        assert!(!cache.should_recompute(Size::new(320.0, 200.0), ScrollAxis::Horizontal));
    }

    #[test]
    fn size_or_axis_change_recomputes() {
        let mut cache = LayoutStateCache::new();
        cache.commit(Size::new(320.0, 200.0), ScrollAxis::Horizontal);
        assert!(cache.should_recompute(Size::new(320.0, 201.0), ScrollAxis::Horizontal));
        assert!(cache.should_recompute(Size::new(321.0, 200.0), ScrollAxis::Horizontal));
        assert!(cache.should_recompute(Size::new(320.0, 200.0), ScrollAxis::Vertical));
    }

    #[test]
    fn invalidate_clears_committed_state() {
        let mut cache = LayoutStateCache::new();
        cache.commit(Size::new(10.0, 10.0), ScrollAxis::Vertical);
        cache.invalidate();
        assert!(cache.should_recompute(Size::new(10.0, 10.0), ScrollAxis::Vertical));
    }
}
