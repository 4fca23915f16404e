// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel layout: owns configuration, cached parameters, and pending
//! transitions, and delegates raw geometry to an injected grid.
//!
//! [`CarouselLayout`] implements [`CollectionLayout`]. Every trait method
//! also has a `*_with` variant taking a [`Tracer`] so hosts can observe
//! parameter derivation, snapping, and transitions.
//!
//! When no [`ScrollSurface`] is attached, the layout degrades gracefully:
//! `prepare` does nothing, attributes pass through the identity transform,
//! and snapping returns the proposed offset.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};

use crate::attributes::{RawAttributes, TransformedAttributes};
use crate::config::CarouselConfig;
use crate::host::{CollectionLayout, DecelerationRate, ItemGrid, ScrollSurface};
use crate::params::{DerivedParameters, derive_parameters};
use crate::snap::{SnapResolution, resolve_snap_offset};
use crate::state::LayoutStateCache;
#[cfg(feature = "trace-rich")]
use crate::trace::ItemTransformEvent;
use crate::trace::{
    BatchEventKind, PrepareEvent, SnapEvent, Tracer, TransitionEvent, TransitionKind,
    UpdateBatchEvent,
};
use crate::transform::{TransformContext, transform_attributes};
use crate::transition::{TransitionTracker, UpdateOp, offscreen_attributes};

/// A single-axis carousel layout over grid `G`, hosted in surface `S`.
#[derive(Debug)]
pub struct CarouselLayout<G, S> {
    grid: G,
    surface: Option<S>,
    config: CarouselConfig,
    cache: LayoutStateCache,
    params: DerivedParameters,
    transitions: TransitionTracker,
}

impl<G: ItemGrid, S: ScrollSurface> CarouselLayout<G, S> {
    /// Creates a layout with no attached surface.
    #[must_use]
    pub fn new(grid: G, config: CarouselConfig) -> Self {
        debug_assert!(config.is_valid(), "invalid carousel config: {config:?}");
        Self {
            grid,
            surface: None,
            config,
            cache: LayoutStateCache::new(),
            params: DerivedParameters::default(),
            transitions: TransitionTracker::new(),
        }
    }

    /// Creates a layout already attached to `surface`.
    #[must_use]
    pub fn with_surface(grid: G, surface: S, config: CarouselConfig) -> Self {
        let mut layout = Self::new(grid, config);
        layout.surface = Some(surface);
        layout
    }

    // -- Collaborators --

    /// Attaches a scroll surface, returning the previous one.
    ///
    /// The next `prepare` re-derives parameters for the new viewport.
    pub fn attach_surface(&mut self, surface: S) -> Option<S> {
        self.cache.invalidate();
        self.surface.replace(surface)
    }

    /// Detaches and returns the scroll surface.
    pub fn detach_surface(&mut self) -> Option<S> {
        self.cache.invalidate();
        self.surface.take()
    }

    /// The attached scroll surface.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the attached scroll surface (e.g. to scroll it).
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// The underlying grid.
    #[must_use]
    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Mutable access to the underlying grid.
    ///
    /// Changing the item size or axis through this reference takes effect
    /// on the next `prepare` only if the viewport state also changed; call
    /// [`invalidate_parameters`](Self::invalidate_parameters) to force it.
    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    // -- Configuration --

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Replaces the configuration and forces re-derivation on the next
    /// `prepare`.
    pub fn set_config(&mut self, config: CarouselConfig) {
        debug_assert!(config.is_valid(), "invalid carousel config: {config:?}");
        self.config = config;
        self.cache.invalidate();
    }

    /// Forces re-derivation on the next `prepare`.
    pub fn invalidate_parameters(&mut self) {
        self.cache.invalidate();
    }

    /// Parameters from the last derivation.
    #[must_use]
    pub fn parameters(&self) -> DerivedParameters {
        self.params
    }

    /// Pending transition state.
    #[must_use]
    pub fn transitions(&self) -> &TransitionTracker {
        &self.transitions
    }

    // -- Layout pass --

    /// Like [`prepare`](CollectionLayout::prepare), reporting to `tracer`.
    pub fn prepare_with(&mut self, tracer: &mut Tracer<'_>) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let viewport = layout_viewport(surface);
        let axis = self.grid.scroll_axis();

        let recomputed = self.cache.should_recompute(viewport, axis);
        if recomputed {
            if surface.deceleration_rate() != DecelerationRate::Fast {
                surface.set_deceleration_rate(DecelerationRate::Fast);
            }

            let item_size = self.grid.item_size();
            let params = derive_parameters(viewport, item_size, axis, &self.config);
            self.grid.set_section_inset(params.section_inset);
            self.grid.set_line_spacing(params.line_spacing);

            let item_extent = axis.main_extent(item_size);
            if item_extent <= 0.0 {
                log::warn!("carousel: item extent is {item_extent}; transforms are undefined");
            } else if !params.has_positive_pitch(item_extent) {
                log::warn!(
                    "carousel: derived line spacing {} leaves no positive pitch for item extent {}",
                    params.line_spacing,
                    item_extent
                );
            }
            log::debug!(
                "carousel: derived {:?} for viewport {:?} ({:?})",
                params,
                viewport,
                axis
            );

            self.params = params;
            self.cache.commit(viewport, axis);
        }

        tracer.prepare(&PrepareEvent {
            viewport,
            axis,
            recomputed,
            params: self.params,
        });
    }

    /// Builds the transform context from the live surface state.
    fn transform_context(&self) -> Option<TransformContext> {
        let surface = self.surface.as_ref()?;
        let axis = self.grid.scroll_axis();
        Some(TransformContext {
            axis,
            viewport_size: surface.viewport_size(),
            content_offset: surface.content_offset(),
            item_extent: axis.main_extent(self.grid.item_size()),
            line_spacing: self.grid.line_spacing(),
            config: self.config,
        })
    }

    /// Like [`attributes_in_rect`](CollectionLayout::attributes_in_rect),
    /// reporting per-item transforms to `tracer` under `trace-rich`.
    pub fn attributes_in_rect_with(
        &self,
        rect: Rect,
        tracer: &mut Tracer<'_>,
    ) -> Vec<TransformedAttributes> {
        let raw = self.grid.raw_attributes_in_rect(rect);
        match self.transform_context() {
            Some(ctx) => raw
                .iter()
                .map(|r| transform_one(r, &ctx, tracer))
                .collect(),
            None => raw.into_iter().map(TransformedAttributes::from).collect(),
        }
    }

    /// Like [`attributes_at`](CollectionLayout::attributes_at), reporting to
    /// `tracer` under `trace-rich`.
    pub fn attributes_at_with(
        &self,
        index: usize,
        tracer: &mut Tracer<'_>,
    ) -> Option<TransformedAttributes> {
        let raw = self.grid.raw_attributes_at(index)?;
        Some(match self.transform_context() {
            Some(ctx) => transform_one(&raw, &ctx, tracer),
            None => TransformedAttributes::from(raw),
        })
    }

    /// Like [`target_offset`](CollectionLayout::target_offset), reporting to
    /// `tracer`.
    pub fn target_offset_with(
        &self,
        proposed: Point,
        velocity: Vec2,
        tracer: &mut Tracer<'_>,
    ) -> Point {
        let Some(surface) = self.surface.as_ref() else {
            return proposed;
        };

        if surface.is_paging_enabled() {
            let offset = surface.default_target_offset(proposed, velocity);
            tracer.snap(&SnapEvent {
                proposed,
                velocity,
                paging: true,
                candidates: 0,
                resolution: SnapResolution {
                    offset,
                    predicted: f64::NAN,
                    selected: None,
                },
            });
            return offset;
        }

        let viewport = surface.viewport_size();
        let bounds = Rect::from_origin_size(surface.content_offset(), viewport);
        let candidates = self.attributes_in_rect_with(bounds, tracer);
        let axis = self.grid.scroll_axis();
        let half_extent = axis.main_extent(viewport) / 2.0;
        let resolution = resolve_snap_offset(&candidates, proposed, velocity, axis, half_extent);

        tracer.snap(&SnapEvent {
            proposed,
            velocity,
            paging: false,
            candidates: count_u32(candidates.len()),
            resolution,
        });
        resolution.offset
    }

    // -- Batched updates --

    /// Like [`prepare_for_updates`](CollectionLayout::prepare_for_updates),
    /// reporting to `tracer`.
    pub fn prepare_for_updates_with(&mut self, ops: &[UpdateOp], tracer: &mut Tracer<'_>) {
        let summary = self.transitions.announce(ops);
        if summary.discarded > 0 {
            log::debug!(
                "carousel: discarded {} transitions from an unfinalized batch",
                summary.discarded
            );
        }
        tracer.update_batch(&UpdateBatchEvent {
            kind: BatchEventKind::Announced,
            inserts: summary.inserts,
            deletes: summary.deletes,
            untracked: summary.untracked,
            dropped: summary.discarded,
        });
    }

    /// Like [`finalize_updates`](CollectionLayout::finalize_updates),
    /// reporting to `tracer`.
    pub fn finalize_updates_with(&mut self, tracer: &mut Tracer<'_>) {
        let dropped = self.transitions.finalize();
        tracer.update_batch(&UpdateBatchEvent {
            kind: BatchEventKind::Finalized,
            inserts: 0,
            deletes: 0,
            untracked: 0,
            dropped,
        });
    }

    /// Like
    /// [`initial_attributes_for_appearing`](CollectionLayout::initial_attributes_for_appearing),
    /// reporting to `tracer`.
    pub fn initial_attributes_for_appearing_with(
        &mut self,
        index: usize,
        tracer: &mut Tracer<'_>,
    ) -> Option<TransformedAttributes> {
        self.serve_transition(index, TransitionKind::Appearing, tracer)
    }

    /// Like
    /// [`final_attributes_for_disappearing`](CollectionLayout::final_attributes_for_disappearing),
    /// reporting to `tracer`.
    pub fn final_attributes_for_disappearing_with(
        &mut self,
        index: usize,
        tracer: &mut Tracer<'_>,
    ) -> Option<TransformedAttributes> {
        self.serve_transition(index, TransitionKind::Disappearing, tracer)
    }

    /// Serves an appearance hook. The override is consumed only when the
    /// index materializes; every call is traced.
    fn serve_transition(
        &mut self,
        index: usize,
        kind: TransitionKind,
        tracer: &mut Tracer<'_>,
    ) -> Option<TransformedAttributes> {
        let pending = match kind {
            TransitionKind::Appearing => self.transitions.is_inserting(index),
            TransitionKind::Disappearing => self.transitions.is_deleting(index),
        };
        let attrs = self.attributes_at_with(index, tracer);
        let overridden = pending && attrs.is_some();
        if overridden {
            match kind {
                TransitionKind::Appearing => {
                    self.transitions.take_inserting(index);
                }
                TransitionKind::Disappearing => {
                    self.transitions.take_deleting(index);
                }
            }
        }
        tracer.transition(&TransitionEvent {
            index,
            kind,
            overridden,
        });
        attrs.map(|a| if overridden { offscreen_attributes(a) } else { a })
    }
}

impl<G: ItemGrid, S: ScrollSurface> CollectionLayout for CarouselLayout<G, S> {
    fn prepare(&mut self) {
        self.prepare_with(&mut Tracer::none());
    }

    fn should_invalidate(&self, new_bounds: Rect) -> bool {
        _ = new_bounds;
        true
    }

    fn attributes_in_rect(&self, rect: Rect) -> Vec<TransformedAttributes> {
        self.attributes_in_rect_with(rect, &mut Tracer::none())
    }

    fn attributes_at(&self, index: usize) -> Option<TransformedAttributes> {
        self.attributes_at_with(index, &mut Tracer::none())
    }

    fn target_offset(&self, proposed: Point, velocity: Vec2) -> Point {
        self.target_offset_with(proposed, velocity, &mut Tracer::none())
    }

    fn prepare_for_updates(&mut self, ops: &[UpdateOp]) {
        self.prepare_for_updates_with(ops, &mut Tracer::none());
    }

    fn finalize_updates(&mut self) {
        self.finalize_updates_with(&mut Tracer::none());
    }

    fn initial_attributes_for_appearing(&mut self, index: usize) -> Option<TransformedAttributes> {
        self.initial_attributes_for_appearing_with(index, &mut Tracer::none())
    }

    fn final_attributes_for_disappearing(&mut self, index: usize) -> Option<TransformedAttributes> {
        self.final_attributes_for_disappearing_with(index, &mut Tracer::none())
    }
}

/// The surface's viewport with its safe-area insets removed.
fn layout_viewport<S: ScrollSurface>(surface: &S) -> Size {
    (Rect::from_origin_size(Point::ZERO, surface.viewport_size()) - surface.safe_area_insets())
        .size()
}

fn transform_one(
    raw: &RawAttributes,
    ctx: &TransformContext,
    tracer: &mut Tracer<'_>,
) -> TransformedAttributes {
    let attrs = transform_attributes(raw, ctx);
    #[cfg(feature = "trace-rich")]
    {
        let i = crate::transform::interpolate(
            ctx.distance_of(raw.center),
            ctx.max_distance(),
            &ctx.config,
        );
        tracer.item_transform(&ItemTransformEvent {
            index: raw.index,
            distance: i.distance,
            ratio: i.ratio,
            alpha: attrs.alpha,
            scale: attrs.scale,
            z_index: attrs.z_index,
        });
    }
    #[cfg(not(feature = "trace-rich"))]
    {
        _ = tracer;
    }
    attrs
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "candidate count capped at u32::MAX for tracing"
)]
fn count_u32(n: usize) -> u32 {
    n.min(u32::MAX as usize) as u32
}
