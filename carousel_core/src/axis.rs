// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll axis and axis-relative geometry projections.
//!
//! Every component of the carousel works in terms of a *main* axis (the
//! scroll axis) and a *cross* axis (perpendicular to it). [`ScrollAxis`]
//! centralizes the projection of `kurbo` points, sizes, and vectors onto
//! those two axes so the rest of the crate never branches on direction.

use kurbo::{Point, Size, Vec2};

/// The single dimension along which items are arranged and scrolled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollAxis {
    /// Items are laid out left to right; the cross axis is `y`.
    #[default]
    Horizontal,
    /// Items are laid out top to bottom; the cross axis is `x`.
    Vertical,
}

impl ScrollAxis {
    /// Returns `true` for [`ScrollAxis::Horizontal`].
    #[inline]
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Returns the perpendicular axis.
    #[inline]
    #[must_use]
    pub const fn cross_axis(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Component of `p` along the scroll axis.
    #[inline]
    #[must_use]
    pub const fn main(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.x,
            Self::Vertical => p.y,
        }
    }

    /// Component of `p` along the cross axis.
    #[inline]
    #[must_use]
    pub const fn cross(self, p: Point) -> f64 {
        match self {
            Self::Horizontal => p.y,
            Self::Vertical => p.x,
        }
    }

    /// Extent of `size` along the scroll axis.
    #[inline]
    #[must_use]
    pub const fn main_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of `size` along the cross axis.
    #[inline]
    #[must_use]
    pub const fn cross_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Component of a velocity vector along the scroll axis.
    #[inline]
    #[must_use]
    pub const fn main_velocity(self, v: Vec2) -> f64 {
        match self {
            Self::Horizontal => v.x,
            Self::Vertical => v.y,
        }
    }

    /// Returns `p` with its scroll-axis component replaced by `value`.
    #[inline]
    #[must_use]
    pub const fn with_main(self, p: Point, value: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(value, p.y),
            Self::Vertical => Point::new(p.x, value),
        }
    }

    /// Returns `p` with its cross-axis component replaced by `value`.
    #[inline]
    #[must_use]
    pub const fn with_cross(self, p: Point, value: f64) -> Point {
        match self {
            Self::Horizontal => Point::new(p.x, value),
            Self::Vertical => Point::new(value, p.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_horizontal() {
        assert_eq!(ScrollAxis::default(), ScrollAxis::Horizontal);
        assert!(ScrollAxis::default().is_horizontal());
    }

    #[test]
    fn projections_follow_axis() {
        let p = Point::new(3.0, 7.0);
        let s = Size::new(100.0, 40.0);

        assert_eq!(ScrollAxis::Horizontal.main(p), 3.0);
        assert_eq!(ScrollAxis::Horizontal.cross(p), 7.0);
        assert_eq!(ScrollAxis::Vertical.main(p), 7.0);
        assert_eq!(ScrollAxis::Vertical.cross(p), 3.0);

        assert_eq!(ScrollAxis::Horizontal.main_extent(s), 100.0);
        assert_eq!(ScrollAxis::Horizontal.cross_extent(s), 40.0);
        assert_eq!(ScrollAxis::Vertical.main_extent(s), 40.0);
        assert_eq!(ScrollAxis::Vertical.cross_extent(s), 100.0);
    }

    #[test]
    fn replacement_keeps_other_component() {
        let p = Point::new(3.0, 7.0);
        assert_eq!(ScrollAxis::Horizontal.with_main(p, 9.0), Point::new(9.0, 7.0));
        assert_eq!(ScrollAxis::Horizontal.with_cross(p, 9.0), Point::new(3.0, 9.0));
        assert_eq!(ScrollAxis::Vertical.with_main(p, 9.0), Point::new(3.0, 9.0));
        assert_eq!(ScrollAxis::Vertical.with_cross(p, 9.0), Point::new(9.0, 7.0));
    }

    #[test]
    fn cross_axis_round_trips() {
        for axis in [ScrollAxis::Horizontal, ScrollAxis::Vertical] {
            assert_eq!(axis.cross_axis().cross_axis(), axis);
            assert_ne!(axis.cross_axis(), axis);
        }
    }
}
