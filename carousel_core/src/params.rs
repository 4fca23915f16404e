// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derivation of section insets and line spacing.
//!
//! The underlying grid lays items out at a fixed pitch of
//! `item_extent + line_spacing`. For the carousel effect to work, two things
//! must hold:
//!
//! - The first and last items must be able to scroll to the viewport
//!   center, so the leading and trailing insets on the scroll axis are half
//!   the slack between viewport and item.
//! - A neighbor rendered at its minimum scale must appear where the
//!   [`SpacingMode`] says it should. A scaled-down neighbor loses
//!   `(side - side * side_item_scale) / 2` on the edge facing the centered
//!   item, so the raw line spacing is reduced by that amount.

use kurbo::{Insets, Size};

use crate::axis::ScrollAxis;
use crate::config::{CarouselConfig, SpacingMode};

/// Section insets and line spacing written back into the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DerivedParameters {
    /// Insets around the single section.
    pub section_inset: Insets,
    /// Raw spacing between consecutive items along the scroll axis.
    pub line_spacing: f64,
}

impl DerivedParameters {
    /// Whether the derived spacing leaves items with a positive pitch.
    ///
    /// A zero or negative pitch makes the transform ratio undefined.
    #[must_use]
    pub fn has_positive_pitch(&self, item_extent: f64) -> bool {
        item_extent + self.line_spacing > 0.0
    }
}

/// Half of the edge lost by an item rendered at `side_item_scale`.
#[inline]
#[must_use]
pub fn scaled_item_offset(side: f64, side_item_scale: f64) -> f64 {
    (side - side * side_item_scale) / 2.0
}

/// Derives section insets and line spacing for a viewport.
///
/// No validation is performed; a zero item size degrades to zero or
/// negative spacing.
#[must_use]
pub fn derive_parameters(
    viewport: Size,
    item_size: Size,
    axis: ScrollAxis,
    config: &CarouselConfig,
) -> DerivedParameters {
    let main_inset = (axis.main_extent(viewport) - axis.main_extent(item_size)) / 2.0;

    let section_inset = match axis {
        ScrollAxis::Horizontal => Insets::new(main_inset, 0.0, main_inset, 0.0),
        ScrollAxis::Vertical => Insets::new(0.0, main_inset, 0.0, main_inset),
    };

    let side = axis.main_extent(item_size);
    let offset = scaled_item_offset(side, config.side_item_scale);
    let line_spacing = match config.spacing_mode {
        SpacingMode::Fixed { spacing } => spacing - offset,
        SpacingMode::Overlap { visible_offset } => main_inset - (visible_offset + offset),
    };

    DerivedParameters {
        section_inset,
        line_spacing,
    }
}
