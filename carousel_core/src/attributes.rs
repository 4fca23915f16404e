// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item layout attributes.
//!
//! [`RawAttributes`] are produced by the underlying grid and are never
//! mutated; [`TransformedAttributes`] are fresh values produced on every
//! query since the scroll offset changes every frame.

use kurbo::{Affine, Point, Rect, Size};

/// Untransformed geometry of one item, as produced by the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawAttributes {
    /// Item index in the single section.
    pub index: usize,
    /// Center of the item's frame in content coordinates.
    pub center: Point,
    /// Size of the item's frame.
    pub size: Size,
}

impl RawAttributes {
    /// Creates raw attributes.
    #[inline]
    #[must_use]
    pub const fn new(index: usize, center: Point, size: Size) -> Self {
        Self {
            index,
            center,
            size,
        }
    }

    /// Creates raw attributes from a frame rectangle.
    #[inline]
    #[must_use]
    pub fn from_frame(index: usize, frame: Rect) -> Self {
        Self::new(index, frame.center(), frame.size())
    }

    /// The item's frame in content coordinates.
    #[inline]
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }
}

/// Render geometry of one item for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformedAttributes {
    /// Item index in the single section.
    pub index: usize,
    /// Center after cross-axis shift, in content coordinates.
    pub center: Point,
    /// Unscaled frame size.
    pub size: Size,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
    /// Uniform scale applied around [`center`](Self::center).
    pub scale: f64,
    /// Stacking key; higher values draw above lower ones.
    pub z_index: i32,
}

impl TransformedAttributes {
    /// The unscaled frame around the (shifted) center.
    #[inline]
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size)
    }

    /// The frame as it appears on screen, after scaling around the center.
    #[must_use]
    pub fn scaled_frame(&self) -> Rect {
        Rect::from_center_size(self.center, self.size * self.scale)
    }

    /// The scale as an affine transform about the item's center.
    ///
    /// Hosts that position layers by frame and apply a separate transform
    /// can use this directly.
    #[must_use]
    pub fn transform(&self) -> Affine {
        let c = self.center.to_vec2();
        Affine::translate(c) * Affine::scale(self.scale) * Affine::translate(-c)
    }
}

impl From<RawAttributes> for TransformedAttributes {
    /// Identity transform: full opacity, unit scale, default stacking.
    fn from(raw: RawAttributes) -> Self {
        Self {
            index: raw.index,
            center: raw.center,
            size: raw.size,
            alpha: 1.0,
            scale: 1.0,
            z_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_round_trips_through_center_and_size() {
        let frame = Rect::new(10.0, 20.0, 110.0, 220.0);
        let raw = RawAttributes::from_frame(3, frame);
        assert_eq!(raw.center, Point::new(60.0, 120.0));
        assert_eq!(raw.size, Size::new(100.0, 200.0));
        assert_eq!(raw.frame(), frame);
    }

    #[test]
    fn identity_conversion_is_neutral() {
        let raw = RawAttributes::new(1, Point::new(5.0, 5.0), Size::new(10.0, 10.0));
        let t = TransformedAttributes::from(raw);
        assert_eq!(t.alpha, 1.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.z_index, 0);
        assert_eq!(t.frame(), raw.frame());
        assert_eq!(t.scaled_frame(), raw.frame());
    }

    #[test]
    fn scaled_frame_shrinks_around_center() {
        let t = TransformedAttributes {
            index: 0,
            center: Point::new(100.0, 50.0),
            size: Size::new(100.0, 40.0),
            alpha: 1.0,
            scale: 0.5,
            z_index: 10,
        };
        assert_eq!(t.scaled_frame(), Rect::new(75.0, 40.0, 125.0, 60.0));
    }

    #[test]
    fn transform_keeps_center_fixed() {
        let t = TransformedAttributes {
            index: 0,
            center: Point::new(100.0, 50.0),
            size: Size::new(100.0, 40.0),
            alpha: 1.0,
            scale: 0.5,
            z_index: 10,
        };
        let xf = t.transform();
        let c = xf * t.center;
        assert!((c.x - 100.0).abs() < 1e-9);
        assert!((c.y - 50.0).abs() < 1e-9);
        let corner = xf * Point::new(150.0, 70.0);
        assert!((corner.x - 125.0).abs() < 1e-9);
        assert!((corner.y - 60.0).abs() < 1e-9);
    }
}
