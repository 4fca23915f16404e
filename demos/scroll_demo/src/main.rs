// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated scroll session that exercises the carousel layout and its
//! diagnostics pipeline.
//!
//! Drags a horizontal carousel across a phone-sized viewport, releases it
//! with a fling, applies a batched insert and delete, rotates the viewport,
//! and records every layout decision to both a
//! [`PrettyPrintSink`](carousel_debug::pretty::PrettyPrintSink) and a
//! [`RecorderSink`](carousel_debug::recorder::RecorderSink). The recording is
//! exported as Chrome trace JSON.
//!
//! Usage: `scroll_demo [OUTPUT]` (default `carousel_trace.json`). Set
//! `RUST_LOG=debug` to see the layout's own log output.

use std::fs::File;
use std::io::{self, BufWriter};

use carousel_core::axis::ScrollAxis;
use carousel_core::config::{CarouselConfig, SpacingMode};
use carousel_core::host::ItemGrid;
use carousel_core::layout::CarouselLayout;
use carousel_core::trace::{
    ItemTransformEvent, PrepareEvent, SnapEvent, TraceSink, Tracer, TransitionEvent,
    UpdateBatchEvent,
};
use carousel_core::transition::UpdateOp;
use carousel_debug::pretty::PrettyPrintSink;
use carousel_debug::recorder::RecorderSink;
use carousel_harness::{HarnessLayout, LineGrid, SimulatedSurface, centered_offset, fling};
use kurbo::{Size, Vec2};

const ITEM_COUNT: usize = 10;
const DRAG_FRAMES: u32 = 24;
/// Points dragged per frame.
const DRAG_STEP: f64 = 9.5;

/// Forwards every event to two sinks.
struct Tee<'a> {
    first: &'a mut dyn TraceSink,
    second: &'a mut dyn TraceSink,
}

impl TraceSink for Tee<'_> {
    fn on_prepare(&mut self, e: &PrepareEvent) {
        self.first.on_prepare(e);
        self.second.on_prepare(e);
    }

    fn on_snap(&mut self, e: &SnapEvent) {
        self.first.on_snap(e);
        self.second.on_snap(e);
    }

    fn on_update_batch(&mut self, e: &UpdateBatchEvent) {
        self.first.on_update_batch(e);
        self.second.on_update_batch(e);
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        self.first.on_transition(e);
        self.second.on_transition(e);
    }

    fn on_item_transform(&mut self, e: &ItemTransformEvent) {
        self.first.on_item_transform(e);
        self.second.on_item_transform(e);
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "carousel_trace.json".to_string());

    // -- sinks -------------------------------------------------------------
    let mut pretty = PrettyPrintSink::new(Box::new(io::stdout()));
    let mut recorder = RecorderSink::new();

    // -- layout ------------------------------------------------------------
    let viewport = Size::new(375.0, 667.0);
    let grid = LineGrid::new(ITEM_COUNT, Size::new(240.0, 360.0), ScrollAxis::Horizontal)
        .with_cross_extent(viewport.height);
    let config = CarouselConfig::new()
        .with_side_item_scale(0.75)
        .with_side_item_alpha(0.5)
        .with_side_item_shift(12.0)
        .with_spacing_mode(SpacingMode::Overlap {
            visible_offset: 24.0,
        });
    let mut layout: HarnessLayout =
        CarouselLayout::with_surface(grid, SimulatedSurface::new(viewport), config);

    {
        let mut tee = Tee {
            first: &mut pretty,
            second: &mut recorder,
        };
        let mut tracer = Tracer::new(&mut tee);
        run_session(&mut layout, &mut tracer);
    }

    // -- export Chrome trace -----------------------------------------------
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    carousel_debug::chrome::export(recorder.as_bytes(), &mut writer)?;

    println!("Wrote {path} ({} bytes recorded)", recorder.as_bytes().len());
    Ok(())
}

fn run_session(layout: &mut HarnessLayout, tracer: &mut Tracer<'_>) {
    layout.prepare_with(tracer);

    // Drag, querying the visible items each frame like a host would.
    for frame in 0..DRAG_FRAMES {
        if let Some(surface) = layout.surface_mut() {
            surface.scroll_by(Vec2::new(DRAG_STEP, 0.0));
        }
        layout.prepare_with(tracer);
        let visible = layout
            .surface()
            .map(SimulatedSurface::visible_rect)
            .unwrap_or_default();
        let attrs = layout.attributes_in_rect_with(visible, tracer);
        if let Some(front) = attrs.iter().max_by_key(|a| a.z_index) {
            println!(
                "frame {frame:2}: {} visible, front item {} (alpha {:.2}, scale {:.2})",
                attrs.len(),
                front.index,
                front.alpha,
                front.scale
            );
        }
    }

    // Release with a rightward fling.
    if let Some(target) = fling(layout, Vec2::new(0.45, 0.0), tracer) {
        let centered = (0..layout.grid().item_count())
            .find(|&i| centered_offset(layout, i).is_some_and(|o| o.floor() == target.x));
        println!("settled at {:.1}, centered item {centered:?}", target.x);
    }

    // Insert after the third item and remove the first.
    layout.grid_mut().insert_item();
    layout.prepare_for_updates_with(&[UpdateOp::Insert { after: 3 }], tracer);
    let _ = layout.initial_attributes_for_appearing_with(3, tracer);
    let _ = layout.initial_attributes_for_appearing_with(4, tracer);
    layout.finalize_updates_with(tracer);

    layout.prepare_for_updates_with(&[UpdateOp::Delete { before: 0 }], tracer);
    let _ = layout.final_attributes_for_disappearing_with(0, tracer);
    layout.grid_mut().remove_item();
    layout.finalize_updates_with(tracer);

    // Rotate to landscape; the next prepare re-derives.
    let landscape = Size::new(667.0, 375.0);
    if let Some(surface) = layout.surface_mut() {
        surface.set_viewport_size(landscape);
    }
    layout.grid_mut().set_cross_extent(landscape.height);
    layout.prepare_with(tracer);
    let _ = fling(layout, Vec2::new(-0.2, 0.0), tracer);

    log::info!(
        "session finished with line spacing {:.2}",
        layout.grid().line_spacing()
    );
}
