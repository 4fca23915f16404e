// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-line flow grid.

use alloc::vec::Vec;

use carousel_core::attributes::RawAttributes;
use carousel_core::axis::ScrollAxis;
use carousel_core::host::ItemGrid;
use kurbo::{Insets, Point, Rect, Size};

/// A one-line, one-section flow grid of equally sized items.
///
/// Items are placed along the scroll axis at a pitch of
/// `item_extent + line_spacing`, starting after the leading section inset.
/// On the cross axis the line is centered within `cross_extent` (usually
/// the viewport's cross extent) after the cross-axis insets are removed.
#[derive(Clone, Debug, PartialEq)]
pub struct LineGrid {
    item_count: usize,
    item_size: Size,
    axis: ScrollAxis,
    cross_extent: f64,
    section_inset: Insets,
    line_spacing: f64,
}

impl LineGrid {
    /// Creates a grid with no insets, no spacing, and a cross extent equal
    /// to the item's.
    #[must_use]
    pub fn new(item_count: usize, item_size: Size, axis: ScrollAxis) -> Self {
        Self {
            item_count,
            item_size,
            axis,
            cross_extent: axis.cross_extent(item_size),
            section_inset: Insets::ZERO,
            line_spacing: 0.0,
        }
    }

    /// Sets the cross extent the line is centered within.
    #[must_use]
    pub fn with_cross_extent(mut self, cross_extent: f64) -> Self {
        self.cross_extent = cross_extent;
        self
    }

    /// Number of items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Replaces the number of items.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
    }

    /// Inserts one item; later items shift by one index.
    pub fn insert_item(&mut self) {
        self.item_count = self.item_count.saturating_add(1);
    }

    /// Removes one item, returning whether there was one to remove.
    pub fn remove_item(&mut self) -> bool {
        let had = self.item_count > 0;
        self.item_count = self.item_count.saturating_sub(1);
        had
    }

    /// Replaces the item size.
    pub fn set_item_size(&mut self, size: Size) {
        self.item_size = size;
    }

    /// Replaces the scroll axis.
    pub fn set_scroll_axis(&mut self, axis: ScrollAxis) {
        self.axis = axis;
    }

    /// Replaces the cross extent the line is centered within.
    pub fn set_cross_extent(&mut self, cross_extent: f64) {
        self.cross_extent = cross_extent;
    }

    /// Distance between the leading edges of consecutive items.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.axis.main_extent(self.item_size) + self.line_spacing
    }

    fn leading_inset(&self) -> f64 {
        match self.axis {
            ScrollAxis::Horizontal => self.section_inset.x0,
            ScrollAxis::Vertical => self.section_inset.y0,
        }
    }

    fn trailing_inset(&self) -> f64 {
        match self.axis {
            ScrollAxis::Horizontal => self.section_inset.x1,
            ScrollAxis::Vertical => self.section_inset.y1,
        }
    }

    fn cross_insets(&self) -> (f64, f64) {
        match self.axis {
            ScrollAxis::Horizontal => (self.section_inset.y0, self.section_inset.y1),
            ScrollAxis::Vertical => (self.section_inset.x0, self.section_inset.x1),
        }
    }

    /// Frame of item `index`, whether or not it exists.
    #[must_use]
    pub fn frame_at(&self, index: usize) -> Rect {
        let main_extent = self.axis.main_extent(self.item_size);
        let cross_item = self.axis.cross_extent(self.item_size);
        let (cross_lead, cross_trail) = self.cross_insets();
        let cross_room = self.cross_extent - cross_lead - cross_trail - cross_item;

        let main = self.leading_inset() + self.pitch() * index as f64 + main_extent / 2.0;
        let cross = cross_lead + cross_room.max(0.0) / 2.0 + cross_item / 2.0;

        let center = self.axis.with_cross(self.axis.with_main(Point::ZERO, main), cross);
        Rect::from_center_size(center, self.item_size)
    }

    /// Total scrollable content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        let main_extent = self.axis.main_extent(self.item_size);
        let items = match self.item_count {
            0 => 0.0,
            n => self.pitch() * (n - 1) as f64 + main_extent,
        };
        let main = self.leading_inset() + items + self.trailing_inset();
        let (cross_lead, cross_trail) = self.cross_insets();
        let cross = self
            .cross_extent
            .max(cross_lead + self.axis.cross_extent(self.item_size) + cross_trail);
        match self.axis {
            ScrollAxis::Horizontal => Size::new(main, cross),
            ScrollAxis::Vertical => Size::new(cross, main),
        }
    }
}

fn overlaps(a: Rect, b: Rect) -> bool {
    a.x0 < b.x1 && b.x0 < a.x1 && a.y0 < b.y1 && b.y0 < a.y1
}

impl ItemGrid for LineGrid {
    fn item_size(&self) -> Size {
        self.item_size
    }

    fn scroll_axis(&self) -> ScrollAxis {
        self.axis
    }

    fn section_inset(&self) -> Insets {
        self.section_inset
    }

    fn set_section_inset(&mut self, inset: Insets) {
        self.section_inset = inset;
    }

    fn line_spacing(&self) -> f64 {
        self.line_spacing
    }

    fn set_line_spacing(&mut self, spacing: f64) {
        self.line_spacing = spacing;
    }

    fn raw_attributes_in_rect(&self, rect: Rect) -> Vec<RawAttributes> {
        (0..self.item_count)
            .map(|i| RawAttributes::from_frame(i, self.frame_at(i)))
            .filter(|a| overlaps(a.frame(), rect))
            .collect()
    }

    fn raw_attributes_at(&self, index: usize) -> Option<RawAttributes> {
        (index < self.item_count).then(|| RawAttributes::from_frame(index, self.frame_at(index)))
    }
}
