// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scroll surface with a simple fling model.

use kurbo::{Insets, Point, Rect, Size, Vec2};

use carousel_core::axis::ScrollAxis;
use carousel_core::host::{DecelerationRate, ScrollSurface};

/// Per-millisecond velocity retention for a deceleration rate.
#[must_use]
pub fn retention(rate: DecelerationRate) -> f64 {
    match rate {
        DecelerationRate::Normal => 0.998,
        DecelerationRate::Fast => 0.99,
    }
}

/// Distance a fling travels before coming to rest.
///
/// `velocity` is in points per millisecond; the velocity decays
/// geometrically by [`retention`] each millisecond.
#[must_use]
pub fn fling_distance(velocity: Vec2, rate: DecelerationRate) -> Vec2 {
    let r = retention(rate);
    velocity * (r / (1.0 - r))
}

/// An in-memory scroll surface.
///
/// When paging is enabled, [`default_target_offset`](ScrollSurface::default_target_offset)
/// rounds the proposed offset to a whole page on the paging axis. The
/// surface does not see the grid, so the paging axis must match the grid's
/// scroll axis; [`fling`](crate::fling) syncs it before snapping.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulatedSurface {
    viewport: Size,
    safe_area: Insets,
    offset: Point,
    paging: bool,
    paging_axis: ScrollAxis,
    rate: DecelerationRate,
}

impl SimulatedSurface {
    /// Creates a surface scrolled to the origin.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            safe_area: Insets::ZERO,
            offset: Point::ZERO,
            paging: false,
            paging_axis: ScrollAxis::Horizontal,
            rate: DecelerationRate::Normal,
        }
    }

    /// Sets the safe-area insets.
    #[must_use]
    pub fn with_safe_area(mut self, insets: Insets) -> Self {
        self.safe_area = insets;
        self
    }

    /// Enables paging along `axis`.
    #[must_use]
    pub fn with_paging(mut self, axis: ScrollAxis) -> Self {
        self.paging = true;
        self.paging_axis = axis;
        self
    }

    /// Resizes the viewport.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }

    /// Replaces the axis pages are rounded on.
    pub fn set_paging_axis(&mut self, axis: ScrollAxis) {
        self.paging_axis = axis;
    }

    /// The axis pages are rounded on.
    #[must_use]
    pub fn paging_axis(&self) -> ScrollAxis {
        self.paging_axis
    }

    /// Enables or disables paging.
    pub fn set_paging_enabled(&mut self, paging: bool) {
        self.paging = paging;
    }

    /// Jumps to an offset.
    pub fn scroll_to(&mut self, offset: Point) {
        self.offset = offset;
    }

    /// Scrolls by a delta.
    pub fn scroll_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    /// The visible region in content coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.viewport)
    }

    /// Where a fling released now with `velocity` would come to rest,
    /// before any snapping.
    #[must_use]
    pub fn proposed_rest(&self, velocity: Vec2) -> Point {
        self.offset + fling_distance(velocity, self.rate)
    }
}

impl ScrollSurface for SimulatedSurface {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn safe_area_insets(&self) -> Insets {
        self.safe_area
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn is_paging_enabled(&self) -> bool {
        self.paging
    }

    fn deceleration_rate(&self) -> DecelerationRate {
        self.rate
    }

    fn set_deceleration_rate(&mut self, rate: DecelerationRate) {
        self.rate = rate;
    }

    fn default_target_offset(&self, proposed: Point, _velocity: Vec2) -> Point {
        if !self.paging {
            return proposed;
        }
        let page = self.paging_axis.main_extent(self.viewport);
        if page <= 0.0 {
            return proposed;
        }
        // Round half up to a page boundary; `%` keeps this free of float intrinsics.
        let shifted = self.paging_axis.main(proposed) + page / 2.0;
        let rem = shifted % page;
        let snapped = if rem < 0.0 { shifted - rem - page } else { shifted - rem };
        self.paging_axis.with_main(proposed, snapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_deceleration_travels_less() {
        let v = Vec2::new(1.0, 0.0);
        let normal = fling_distance(v, DecelerationRate::Normal);
        let fast = fling_distance(v, DecelerationRate::Fast);
        assert!(fast.x < normal.x);
        assert!((fast.x - 99.0).abs() < 1e-6);
    }

    #[test]
    fn paging_rounds_to_whole_pages() {
        let s = SimulatedSurface::new(Size::new(300.0, 200.0)).with_paging(ScrollAxis::Horizontal);
        assert_eq!(
            s.default_target_offset(Point::new(440.0, 7.0), Vec2::ZERO),
            Point::new(300.0, 7.0)
        );
        assert_eq!(
            s.default_target_offset(Point::new(460.0, 7.0), Vec2::ZERO),
            Point::new(600.0, 7.0)
        );
    }

    #[test]
    fn without_paging_proposal_is_kept() {
        let s = SimulatedSurface::new(Size::new(300.0, 200.0));
        let p = Point::new(123.4, 5.0);
        assert_eq!(s.default_target_offset(p, Vec2::new(2.0, 0.0)), p);
    }

    #[test]
    fn scrolling_moves_the_visible_rect() {
        let mut s = SimulatedSurface::new(Size::new(300.0, 200.0));
        s.scroll_to(Point::new(100.0, 0.0));
        s.scroll_by(Vec2::new(20.0, 0.0));
        assert_eq!(s.visible_rect(), Rect::new(120.0, 0.0, 420.0, 200.0));
    }
}
