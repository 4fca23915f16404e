// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract: collaborator traits and the layout capability interface.
//!
//! The carousel engine does not lay out cells, own a scroll view, or draw
//! anything. A host UI framework provides those pieces:
//!
//! - **Grid** — Implements [`ItemGrid`]: produces raw, untransformed cell
//!   rectangles for a query rectangle or index, and accepts the section
//!   inset and line spacing the engine derives.
//!
//! - **Scroll surface** — Implements [`ScrollSurface`]: reports viewport
//!   size, content offset, and paging state, and accepts the deceleration
//!   rate the engine prefers. Its
//!   [`default_target_offset`](ScrollSurface::default_target_offset) is the
//!   snapping behavior used when paging is active.
//!
//! - **Driver** — Calls the [`CollectionLayout`] methods from its layout and
//!   gesture callbacks and renders the returned attributes.
//!
//! # Frame loop pseudocode
//!
//! ```rust,ignore
//! fn on_layout(bounds: Rect) {
//!     if layout.should_invalidate(bounds) {
//!         layout.prepare();
//!     }
//!     for attrs in layout.attributes_in_rect(bounds) {
//!         renderer.place(attrs.index, attrs.scaled_frame(), attrs.alpha, attrs.z_index);
//!     }
//! }
//!
//! fn on_fling_end(proposed: Point, velocity: Vec2) -> Point {
//!     layout.target_offset(proposed, velocity)
//! }
//! ```

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::attributes::{RawAttributes, TransformedAttributes};
use crate::axis::ScrollAxis;
use crate::transition::UpdateOp;

/// How quickly a released scroll decelerates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DecelerationRate {
    /// The platform's standard deceleration.
    #[default]
    Normal,
    /// Faster deceleration, suited to snapping carousels.
    Fast,
}

/// The underlying grid layout that produces raw cell geometry.
pub trait ItemGrid {
    /// Size of every item.
    fn item_size(&self) -> Size;

    /// Axis the grid lays items out along.
    fn scroll_axis(&self) -> ScrollAxis;

    /// Current section inset.
    fn section_inset(&self) -> Insets;

    /// Replaces the section inset.
    fn set_section_inset(&mut self, inset: Insets);

    /// Current spacing between consecutive items.
    fn line_spacing(&self) -> f64;

    /// Replaces the spacing between consecutive items.
    fn set_line_spacing(&mut self, spacing: f64);

    /// Raw attributes of every item whose frame intersects `rect`.
    fn raw_attributes_in_rect(&self, rect: Rect) -> Vec<RawAttributes>;

    /// Raw attributes of one item, or `None` if it is not materialized.
    fn raw_attributes_at(&self, index: usize) -> Option<RawAttributes>;
}

/// The scrollable surface hosting the carousel.
pub trait ScrollSurface {
    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Insets of the region obscured by system chrome.
    ///
    /// Parameters are derived for the viewport minus these insets.
    fn safe_area_insets(&self) -> Insets {
        Insets::ZERO
    }

    /// Current content offset.
    fn content_offset(&self) -> Point;

    /// Whether discrete paging is active.
    fn is_paging_enabled(&self) -> bool;

    /// Current deceleration rate.
    fn deceleration_rate(&self) -> DecelerationRate;

    /// Replaces the deceleration rate.
    fn set_deceleration_rate(&mut self, rate: DecelerationRate);

    /// The surface's own resting offset for a released gesture.
    fn default_target_offset(&self, proposed: Point, velocity: Vec2) -> Point {
        _ = velocity;
        proposed
    }
}

/// Capability interface a host drives a layout through.
///
/// The appearance hooks default to the standard attributes for the index,
/// which is what a layout without transition effects would return.
pub trait CollectionLayout {
    /// Recomputes derived parameters if the viewport or axis changed.
    fn prepare(&mut self);

    /// Whether a bounds change invalidates the layout.
    fn should_invalidate(&self, new_bounds: Rect) -> bool;

    /// Attributes of every item intersecting `rect`.
    fn attributes_in_rect(&self, rect: Rect) -> Vec<TransformedAttributes>;

    /// Attributes of one item.
    fn attributes_at(&self, index: usize) -> Option<TransformedAttributes>;

    /// Resting offset for a released gesture.
    fn target_offset(&self, proposed: Point, velocity: Vec2) -> Point;

    /// Announces a batch of update operations.
    fn prepare_for_updates(&mut self, ops: &[UpdateOp]);

    /// Ends the current batch.
    fn finalize_updates(&mut self);

    /// Starting attributes for an item appearing during a batch.
    fn initial_attributes_for_appearing(&mut self, index: usize) -> Option<TransformedAttributes> {
        self.attributes_at(index)
    }

    /// Ending attributes for an item disappearing during a batch.
    fn final_attributes_for_disappearing(&mut self, index: usize) -> Option<TransformedAttributes> {
        self.attributes_at(index)
    }
}
