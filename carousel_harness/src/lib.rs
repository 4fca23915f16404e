// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference collaborators for driving a carousel layout without a UI
//! framework.
//!
//! - [`LineGrid`] — a single-line flow grid implementing
//!   [`ItemGrid`](carousel_core::host::ItemGrid).
//! - [`SimulatedSurface`] — an in-memory scroll surface with paging and a
//!   geometric fling model, implementing
//!   [`ScrollSurface`](carousel_core::host::ScrollSurface).
//! - [`fling`] — releases a gesture on a hosted layout and settles the
//!   surface on the snapped offset.

#![no_std]

extern crate alloc;

mod grid;
mod surface;

pub use grid::LineGrid;
pub use surface::{SimulatedSurface, fling_distance, retention};

use carousel_core::host::{ItemGrid, ScrollSurface};
use carousel_core::layout::CarouselLayout;
use carousel_core::trace::Tracer;
use kurbo::{Point, Vec2};

/// The layout type the harness builds.
pub type HarnessLayout = CarouselLayout<LineGrid, SimulatedSurface>;

/// Releases a gesture with `velocity` and scrolls the surface to the
/// resolved target.
///
/// The surface's paging axis is first aligned with the grid's scroll axis.
/// Returns the target, or `None` if no surface is attached.
pub fn fling<G: ItemGrid>(
    layout: &mut CarouselLayout<G, SimulatedSurface>,
    velocity: Vec2,
    tracer: &mut Tracer<'_>,
) -> Option<Point> {
    let axis = layout.grid().scroll_axis();
    layout.surface_mut()?.set_paging_axis(axis);
    let proposed = layout.surface()?.proposed_rest(velocity);
    let target = layout.target_offset_with(proposed, velocity, tracer);
    layout.surface_mut()?.scroll_to(target);
    Some(target)
}

/// Main-axis offset at which item `index` is centered in the viewport.
#[must_use]
pub fn centered_offset(layout: &HarnessLayout, index: usize) -> Option<f64> {
    let surface = layout.surface()?;
    let axis = layout.grid().scroll_axis();
    let frame = layout.grid().frame_at(index);
    Some(axis.main(frame.center()) - axis.main_extent(surface.viewport_size()) / 2.0)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use carousel_core::axis::ScrollAxis;
    use carousel_core::config::{CarouselConfig, SpacingMode};
    use carousel_core::host::{CollectionLayout, DecelerationRate};
    use carousel_core::transition::UpdateOp;
    use kurbo::{Insets, Rect, Size};

    use super::*;

    const EPS: f64 = 1e-9;

    fn horizontal(count: usize) -> HarnessLayout {
        let viewport = Size::new(400.0, 300.0);
        let grid = LineGrid::new(count, Size::new(100.0, 200.0), ScrollAxis::Horizontal)
            .with_cross_extent(viewport.height);
        CarouselLayout::with_surface(grid, SimulatedSurface::new(viewport), CarouselConfig::new())
    }

    fn visible(layout: &HarnessLayout) -> Rect {
        layout.surface().map_or(Rect::ZERO, SimulatedSurface::visible_rect)
    }

    #[test]
    fn first_and_last_items_can_reach_the_center() {
        let mut l = horizontal(6);
        l.prepare();

        let first = l.attributes_at(0).unwrap();
        assert!((first.alpha - 1.0).abs() < EPS);
        assert!((first.scale - 1.0).abs() < EPS);

        let last_offset = centered_offset(&l, 5).unwrap();
        let content = l.grid().content_size();
        // The last item centers exactly at the end of the content.
        assert!((last_offset + 400.0 - content.width).abs() < EPS);

        l.surface_mut().unwrap().scroll_to(Point::new(last_offset, 0.0));
        let last = l.attributes_at(5).unwrap();
        assert!((last.alpha - 1.0).abs() < EPS);
    }

    #[test]
    fn cross_axis_is_centered_and_shifted() {
        let mut l = horizontal(3);
        l.set_config(CarouselConfig::new().with_side_item_shift(24.0));
        l.prepare();

        let center = l.attributes_at(0).unwrap();
        assert_eq!(center.center.y, 150.0);

        let side = l.attributes_at(1).unwrap();
        assert!((side.center.y - 174.0).abs() < EPS);
    }

    #[test]
    fn every_visible_item_has_z_from_alpha() {
        let mut l = horizontal(10);
        l.prepare();
        for step in 0..40 {
            l.surface_mut().unwrap().scroll_to(Point::new(f64::from(step) * 17.5, 0.0));
            for a in l.attributes_in_rect(visible(&l)) {
                assert_eq!(a.z_index, carousel_core::transform::z_index_for_alpha(a.alpha));
                assert!(a.alpha >= 0.6 - EPS && a.alpha <= 1.0 + EPS);
                assert!(a.scale >= 0.6 - EPS && a.scale <= 1.0 + EPS);
            }
        }
    }

    #[test]
    fn prepare_switches_to_fast_deceleration() {
        let mut l = horizontal(3);
        assert_eq!(
            l.surface().unwrap().deceleration_rate(),
            DecelerationRate::Normal
        );
        l.prepare();
        assert_eq!(l.surface().unwrap().deceleration_rate(), DecelerationRate::Fast);
    }

    #[test]
    fn repeated_prepare_is_idempotent() {
        let mut l = horizontal(4);
        l.prepare();
        let grid_before = l.grid().clone();
        let params = l.parameters();
        for _ in 0..5 {
            l.prepare();
        }
        assert_eq!(l.parameters(), params);
        assert_eq!(l.grid(), &grid_before);
    }

    #[test]
    fn rotation_rederives_for_new_viewport() {
        let mut l = horizontal(4);
        l.prepare();
        l.surface_mut().unwrap().set_viewport_size(Size::new(300.0, 400.0));
        l.grid_mut().set_cross_extent(400.0);
        l.prepare();
        assert_eq!(
            l.grid().section_inset(),
            Insets::new(100.0, 0.0, 100.0, 0.0)
        );
        let first = l.attributes_at(0).unwrap();
        assert_eq!(first.center, Point::new(150.0, 200.0));
    }

    #[test]
    fn safe_area_reduces_derived_insets() {
        let viewport = Size::new(400.0, 300.0);
        let grid = LineGrid::new(3, Size::new(100.0, 200.0), ScrollAxis::Horizontal)
            .with_cross_extent(viewport.height);
        let surface =
            SimulatedSurface::new(viewport).with_safe_area(Insets::new(44.0, 0.0, 44.0, 0.0));
        let mut l = CarouselLayout::with_surface(grid, surface, CarouselConfig::new());
        l.prepare();
        assert_eq!(l.grid().section_inset(), Insets::new(106.0, 0.0, 106.0, 0.0));
    }

    #[test]
    fn fling_settles_with_an_item_centered() {
        let mut l = horizontal(12);
        l.prepare();
        // Pitch is 100 + 20.
        for v in [0.05, 0.3, 0.77, 1.5, -0.2] {
            l.surface_mut().unwrap().scroll_to(Point::new(250.0, 0.0));
            let target = fling(&mut l, Vec2::new(v, 0.0), &mut Tracer::none()).unwrap();
            let centered: Vec<_> = (0..12)
                .filter_map(|i| centered_offset(&l, i))
                .filter(|o| (0.0..1.0).contains(&(o - target.x)))
                .collect();
            assert_eq!(centered.len(), 1, "v = {v}, target = {target:?}");
            assert_eq!(target.y, 0.0);
        }
    }

    #[test]
    fn snap_prefers_the_projected_item() {
        let mut l = horizontal(12);
        l.prepare();
        l.surface_mut().unwrap().scroll_to(Point::new(0.0, 0.0));
        // A visible-rect of [0, 400] holds items 0..=2; with strong velocity
        // the prediction overshoots and the last visible item wins.
        let target = l.target_offset(Point::new(0.0, 0.0), Vec2::new(5.0, 0.0));
        assert_eq!(Some(target.x), centered_offset(&l, 2));
    }

    #[test]
    fn paging_surface_keeps_its_own_snapping() {
        let viewport = Size::new(400.0, 300.0);
        let grid = LineGrid::new(8, Size::new(100.0, 200.0), ScrollAxis::Horizontal)
            .with_cross_extent(viewport.height);
        let surface = SimulatedSurface::new(viewport).with_paging(ScrollAxis::Horizontal);
        let mut l = CarouselLayout::with_surface(grid, surface, CarouselConfig::new());
        l.prepare();
        let target = l.target_offset(Point::new(530.0, 0.0), Vec2::new(0.4, 0.0));
        assert_eq!(target, Point::new(400.0, 0.0));
    }

    #[test]
    fn fling_pages_along_the_grid_axis() {
        let viewport = Size::new(400.0, 300.0);
        let grid = LineGrid::new(8, Size::new(200.0, 100.0), ScrollAxis::Vertical)
            .with_cross_extent(viewport.width);
        // Paging configured on the wrong axis.
        let surface = SimulatedSurface::new(viewport).with_paging(ScrollAxis::Horizontal);
        let mut l = CarouselLayout::with_surface(grid, surface, CarouselConfig::new());
        l.prepare();

        // Fast deceleration travels 99 * v: 198 rounds up to one 300 page.
        let target = fling(&mut l, Vec2::new(0.0, 2.0), &mut Tracer::none()).unwrap();
        assert_eq!(target, Point::new(0.0, 300.0));
        assert_eq!(l.surface().unwrap().paging_axis(), ScrollAxis::Vertical);
        assert_eq!(l.surface().unwrap().content_offset(), target);
    }

    #[test]
    fn insert_enters_from_above_once() {
        let mut l = horizontal(5);
        l.prepare();

        l.grid_mut().insert_item();
        l.prepare_for_updates(&[UpdateOp::Insert { after: 3 }]);

        let entering = l.initial_attributes_for_appearing(3).unwrap();
        assert_eq!(entering.center.y, -100.0);
        assert_eq!(entering.center.x, l.attributes_at(3).unwrap().center.x);

        l.finalize_updates();
        let after = l.initial_attributes_for_appearing(3).unwrap();
        assert_eq!(after, l.attributes_at(3).unwrap());
        assert_eq!(after.center.y, 150.0);
    }

    #[test]
    fn delete_leaves_upward() {
        let mut l = horizontal(5);
        l.prepare();
        l.prepare_for_updates(&[UpdateOp::Delete { before: 1 }]);
        let leaving = l.final_attributes_for_disappearing(1).unwrap();
        l.grid_mut().remove_item();
        l.finalize_updates();

        assert_eq!(leaving.center.y, -100.0);
        assert_eq!(leaving.index, 1);
    }

    #[test]
    fn moves_get_the_standard_transform() {
        let mut l = horizontal(5);
        l.prepare();
        l.prepare_for_updates(&[UpdateOp::Move {
            before: 4,
            after: 0,
        }]);
        assert_eq!(l.initial_attributes_for_appearing(0), l.attributes_at(0));
        assert_eq!(l.final_attributes_for_disappearing(4), l.attributes_at(4));
        l.finalize_updates();
    }

    #[test]
    fn finalize_clears_unqueried_transitions() {
        let mut l = horizontal(5);
        l.prepare();
        l.prepare_for_updates(&[
            UpdateOp::Insert { after: 0 },
            UpdateOp::Insert { after: 4 },
            UpdateOp::Delete { before: 2 },
        ]);
        let _ = l.initial_attributes_for_appearing(0);
        l.finalize_updates();
        assert_eq!(l.transitions().pending_inserts(), 0);
        assert_eq!(l.transitions().pending_deletes(), 0);
        assert!(!l.transitions().is_collecting());
    }

    #[test]
    fn vertical_carousel_scrolls_on_y() {
        let viewport = Size::new(300.0, 600.0);
        let grid = LineGrid::new(6, Size::new(200.0, 100.0), ScrollAxis::Vertical)
            .with_cross_extent(viewport.width);
        let mut l = CarouselLayout::with_surface(
            grid,
            SimulatedSurface::new(viewport),
            CarouselConfig::new().with_spacing_mode(SpacingMode::Fixed { spacing: 30.0 }),
        );
        l.prepare();
        assert_eq!(l.grid().section_inset(), Insets::new(0.0, 250.0, 0.0, 250.0));
        // side = 100, offset = 20, spacing = 10.
        assert!((l.grid().line_spacing() - 10.0).abs() < EPS);

        let first = l.attributes_at(0).unwrap();
        assert_eq!(first.center, Point::new(150.0, 300.0));
        assert!((first.scale - 1.0).abs() < EPS);

        let target = l.target_offset(Point::new(0.0, 95.0), Vec2::ZERO);
        assert_eq!(Some(target.y), centered_offset(&l, 1));
        assert_eq!(target.x, 0.0);
    }

    #[test]
    fn overlap_mode_shows_neighbor_edges() {
        let viewport = Size::new(400.0, 300.0);
        let grid = LineGrid::new(3, Size::new(200.0, 200.0), ScrollAxis::Horizontal)
            .with_cross_extent(viewport.height);
        let config = CarouselConfig::new()
            .with_side_item_scale(0.8)
            .with_spacing_mode(SpacingMode::Overlap {
                visible_offset: 30.0,
            });
        let mut l = CarouselLayout::with_surface(grid, SimulatedSurface::new(viewport), config);
        l.prepare();

        let neighbor = l.attributes_at(1).unwrap();
        let leading_edge = neighbor.scaled_frame().x0;
        assert!((400.0 - leading_edge - 30.0).abs() < EPS);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn fling_reports_the_snap() {
        use carousel_core::trace::{SnapEvent, TraceSink};

        #[derive(Default)]
        struct Snaps(Vec<SnapEvent>);
        impl TraceSink for Snaps {
            fn on_snap(&mut self, e: &SnapEvent) {
                self.0.push(*e);
            }
        }

        let mut l = horizontal(8);
        l.prepare();
        let mut sink = Snaps::default();
        let target = fling(&mut l, Vec2::new(0.5, 0.0), &mut Tracer::new(&mut sink)).unwrap();
        assert_eq!(sink.0.len(), 1);
        assert_eq!(sink.0[0].resolution.offset, target);
        assert!(!sink.0[0].paging);
    }
}
