// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity-aware snap target resolution.
//!
//! When a scroll gesture is released, the surface proposes a resting offset.
//! The resolver projects the gesture's velocity onto that proposal, finds the
//! visible item whose center is nearest to the resulting center line, and
//! returns the offset that puts that item's center exactly on the viewport
//! center (floored to a whole point).

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

use crate::attributes::TransformedAttributes;
use crate::axis::ScrollAxis;

/// Velocity projection factor.
///
/// Velocities are reported in points per millisecond; one second of travel
/// under default deceleration approximates where the fling would land.
pub const VELOCITY_PROJECTION: f64 = 1000.0;

/// Outcome of a snap resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapResolution {
    /// The offset the surface should settle on.
    pub offset: Point,
    /// Predicted center-line coordinate the selection was made against.
    pub predicted: f64,
    /// Index of the selected item, or `None` if nothing was visible.
    pub selected: Option<usize>,
}

/// Predicted coordinate the scroll would center on.
#[inline]
#[must_use]
pub fn predicted_center(proposed: Point, velocity: Vec2, axis: ScrollAxis, half_extent: f64) -> f64 {
    axis.main(proposed) + VELOCITY_PROJECTION * axis.main_velocity(velocity) + half_extent
}

/// Resolves the snap offset among `candidates`.
///
/// Ties are broken in favor of the first candidate at the minimum distance.
/// With no candidates the proposed offset is returned unchanged.
#[must_use]
pub fn resolve_snap_offset(
    candidates: &[TransformedAttributes],
    proposed: Point,
    velocity: Vec2,
    axis: ScrollAxis,
    half_extent: f64,
) -> SnapResolution {
    let predicted = predicted_center(proposed, velocity, axis, half_extent);

    let mut best: Option<(&TransformedAttributes, f64)> = None;
    for attrs in candidates {
        let d = (axis.main(attrs.center) - predicted).abs();
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((attrs, d));
        }
    }

    match best {
        Some((attrs, _)) => SnapResolution {
            offset: axis.with_main(proposed, (axis.main(attrs.center) - half_extent).floor()),
            predicted,
            selected: Some(attrs.index),
        },
        None => SnapResolution {
            offset: proposed,
            predicted,
            selected: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Size;

    use super::*;

    fn items_at(xs: &[f64]) -> Vec<TransformedAttributes> {
        xs.iter()
            .enumerate()
            .map(|(index, &x)| TransformedAttributes {
                index,
                center: Point::new(x, 25.0),
                size: Size::new(80.0, 50.0),
                alpha: 1.0,
                scale: 1.0,
                z_index: 10,
            })
            .collect()
    }

    #[test]
    fn settles_on_nearest_center_without_velocity() {
        let items = items_at(&[0.0, 100.0, 200.0]);
        let r = resolve_snap_offset(
            &items,
            Point::new(40.0, 7.0),
            Vec2::ZERO,
            ScrollAxis::Horizontal,
            50.0,
        );
        assert_eq!(r.predicted, 90.0);
        assert_eq!(r.selected, Some(1));
        assert_eq!(r.offset, Point::new(50.0, 7.0));
    }

    #[test]
    fn velocity_projects_the_prediction() {
        let items = items_at(&[0.0, 100.0, 200.0, 300.0]);
        // 40 + 1000 * 0.2 + 50 = 290 -> item at 300.
        let r = resolve_snap_offset(
            &items,
            Point::new(40.0, 0.0),
            Vec2::new(0.2, 5.0),
            ScrollAxis::Horizontal,
            50.0,
        );
        assert_eq!(r.selected, Some(3));
        assert_eq!(r.offset, Point::new(250.0, 0.0));
    }

    #[test]
    fn ties_prefer_the_first_candidate() {
        let items = items_at(&[0.0, 100.0]);
        // Predicted 50 is equidistant from both.
        let r = resolve_snap_offset(
            &items,
            Point::ZERO,
            Vec2::ZERO,
            ScrollAxis::Horizontal,
            50.0,
        );
        assert_eq!(r.selected, Some(0));
        assert_eq!(r.offset, Point::new(-50.0, 0.0));
    }

    #[test]
    fn target_is_floored() {
        let items = items_at(&[120.6]);
        let r = resolve_snap_offset(
            &items,
            Point::ZERO,
            Vec2::ZERO,
            ScrollAxis::Horizontal,
            50.0,
        );
        assert_eq!(r.offset.x, 70.0);
    }

    #[test]
    fn vertical_axis_keeps_x() {
        let items: Vec<_> = items_at(&[0.0, 1.0])
            .into_iter()
            .map(|mut a| {
                a.center = Point::new(33.0, a.center.x * 200.0);
                a
            })
            .collect();
        let r = resolve_snap_offset(
            &items,
            Point::new(12.0, 150.0),
            Vec2::ZERO,
            ScrollAxis::Vertical,
            100.0,
        );
        // predicted 250 -> item at y = 200.
        assert_eq!(r.selected, Some(1));
        assert_eq!(r.offset, Point::new(12.0, 100.0));
    }

    #[test]
    fn empty_candidates_fall_back_to_proposed() {
        let r = resolve_snap_offset(
            &[],
            Point::new(13.5, 2.0),
            Vec2::new(1.0, 1.0),
            ScrollAxis::Horizontal,
            50.0,
        );
        assert_eq!(r.offset, Point::new(13.5, 2.0));
        assert_eq!(r.selected, None);
    }
}
