// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance-from-center attribute transform.
//!
//! For each item, the transform measures how far the item's center is from
//! the viewport's center line along the scroll axis, clamps that distance at
//! one full step (`item_extent + line_spacing`), and maps it to a ratio in
//! `[0, 1]`:
//!
//! ```text
//!   ratio = (max_distance - distance) / max_distance
//!   alpha = ratio * (1 - side_item_alpha) + side_item_alpha
//!   scale = ratio * (1 - side_item_scale) + side_item_scale
//!   shift = (1 - ratio) * side_item_shift        (cross axis)
//!   z     = floor(alpha * 10)
//! ```
//!
//! A `max_distance` of zero (zero item extent and zero spacing) is a
//! configuration error the host must avoid; the result is not meaningful.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Size};

use crate::attributes::{RawAttributes, TransformedAttributes};
use crate::axis::ScrollAxis;
use crate::config::CarouselConfig;

/// Everything the transform needs besides the item itself.
///
/// Built once per query from the live scroll offset and the cached
/// parameters; cheap to copy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformContext {
    /// Active scroll axis.
    pub axis: ScrollAxis,
    /// Size of the visible viewport (its half-extent is the center line).
    pub viewport_size: Size,
    /// Current content offset of the scroll surface.
    pub content_offset: Point,
    /// Item extent along the scroll axis.
    pub item_extent: f64,
    /// Raw line spacing between items.
    pub line_spacing: f64,
    /// Side-item scale, alpha, and shift.
    pub config: CarouselConfig,
}

impl TransformContext {
    /// Half of the viewport's extent along the scroll axis.
    #[inline]
    #[must_use]
    pub fn center_line(&self) -> f64 {
        self.axis.main_extent(self.viewport_size) / 2.0
    }

    /// Distance at which an item is treated as fully "side".
    #[inline]
    #[must_use]
    pub fn max_distance(&self) -> f64 {
        self.item_extent + self.line_spacing
    }

    /// Clamped distance between the center line and `center`, which is given
    /// in content coordinates.
    #[must_use]
    pub fn distance_of(&self, center: Point) -> f64 {
        let relative = self.axis.main(center) - self.axis.main(self.content_offset);
        (self.center_line() - relative).abs().min(self.max_distance())
    }
}

/// Per-item interpolation result, before it is applied to a center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interpolation {
    /// Clamped distance from the center line.
    pub distance: f64,
    /// `1` at dead center, `0` at or beyond one full step.
    pub ratio: f64,
    /// Opacity.
    pub alpha: f64,
    /// Uniform scale.
    pub scale: f64,
    /// Cross-axis displacement.
    pub shift: f64,
    /// Stacking key.
    pub z_index: i32,
}

/// Maps a clamped distance to the interpolated visual values.
#[must_use]
pub fn interpolate(distance: f64, max_distance: f64, config: &CarouselConfig) -> Interpolation {
    let ratio = (max_distance - distance) / max_distance;
    let alpha = ratio * (1.0 - config.side_item_alpha) + config.side_item_alpha;
    let scale = ratio * (1.0 - config.side_item_scale) + config.side_item_scale;
    let shift = (1.0 - ratio) * config.side_item_shift;
    Interpolation {
        distance,
        ratio,
        alpha,
        scale,
        shift,
        z_index: z_index_for_alpha(alpha),
    }
}

/// Coarse stacking key: `floor(alpha * 10)`, eleven buckets over `[0, 1]`.
#[inline]
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "alpha is in [0, 1], so the floored product fits in i32"
)]
pub fn z_index_for_alpha(alpha: f64) -> i32 {
    (alpha * 10.0).floor() as i32
}

/// Transforms one raw attribute into render geometry.
///
/// `raw` is taken by reference and never modified; the result is a fresh
/// value.
#[must_use]
pub fn transform_attributes(raw: &RawAttributes, ctx: &TransformContext) -> TransformedAttributes {
    let i = interpolate(ctx.distance_of(raw.center), ctx.max_distance(), &ctx.config);
    let cross = ctx.axis.cross(raw.center) + i.shift;
    TransformedAttributes {
        index: raw.index,
        center: ctx.axis.with_cross(raw.center, cross),
        size: raw.size,
        alpha: i.alpha,
        scale: i.scale,
        z_index: i.z_index,
    }
}
