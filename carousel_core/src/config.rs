// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-settable carousel configuration.

/// How neighboring items are spaced relative to the centered item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpacingMode {
    /// A fixed visual gap between a full-size item and a minimum-scale
    /// neighbor.
    Fixed {
        /// Visual gap in points.
        spacing: f64,
    },
    /// Neighbors overlap the centered item, leaving `visible_offset` of each
    /// neighbor visible beyond the viewport edge of the centered item.
    Overlap {
        /// Visible portion of a neighbor in points.
        visible_offset: f64,
    },
}

impl Default for SpacingMode {
    #[inline]
    fn default() -> Self {
        Self::Fixed { spacing: 40.0 }
    }
}

/// Visual parameters applied to side items.
///
/// Side items are interpolated linearly between these values (at one full
/// step from the center and beyond) and identity (at dead center).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Scale of a fully-side item, in `(0, 1]`.
    pub side_item_scale: f64,
    /// Opacity of a fully-side item, in `[0, 1]`.
    pub side_item_alpha: f64,
    /// Cross-axis displacement of a fully-side item.
    pub side_item_shift: f64,
    /// Neighbor spacing strategy.
    pub spacing_mode: SpacingMode,
}

impl Default for CarouselConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselConfig {
    /// The default configuration: scale and alpha `0.6`, no shift, fixed
    /// spacing of `40`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            side_item_scale: 0.6,
            side_item_alpha: 0.6,
            side_item_shift: 0.0,
            spacing_mode: SpacingMode::Fixed { spacing: 40.0 },
        }
    }

    /// Returns a copy with the side item scale replaced.
    #[must_use]
    pub const fn with_side_item_scale(mut self, scale: f64) -> Self {
        self.side_item_scale = scale;
        self
    }

    /// Returns a copy with the side item alpha replaced.
    #[must_use]
    pub const fn with_side_item_alpha(mut self, alpha: f64) -> Self {
        self.side_item_alpha = alpha;
        self
    }

    /// Returns a copy with the side item shift replaced.
    #[must_use]
    pub const fn with_side_item_shift(mut self, shift: f64) -> Self {
        self.side_item_shift = shift;
        self
    }

    /// Returns a copy with the spacing mode replaced.
    #[must_use]
    pub const fn with_spacing_mode(mut self, mode: SpacingMode) -> Self {
        self.spacing_mode = mode;
        self
    }

    /// Whether every field is inside its documented range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let spacing = match self.spacing_mode {
            SpacingMode::Fixed { spacing } => spacing,
            SpacingMode::Overlap { visible_offset } => visible_offset,
        };
        self.side_item_scale > 0.0
            && self.side_item_scale <= 1.0
            && (0.0..=1.0).contains(&self.side_item_alpha)
            && self.side_item_shift.is_finite()
            && spacing.is_finite()
    }
}
