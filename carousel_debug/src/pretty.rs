// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use carousel_core::axis::ScrollAxis;
use carousel_core::trace::{
    BatchEventKind, ItemTransformEvent, PrepareEvent, SnapEvent, TraceSink, TransitionEvent,
    TransitionKind, UpdateBatchEvent,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    item_transforms: bool,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("item_transforms", &self.item_transforms)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Box::new(std::io::stderr()))
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self::with_writer(writer)
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    ///
    /// Per-item transform lines are off by default; they are emitted for
    /// every visible item on every query.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            item_transforms: false,
        }
    }

    /// Enables or disables per-item transform lines.
    #[must_use]
    pub fn with_item_transforms(mut self, enabled: bool) -> Self {
        self.item_transforms = enabled;
        self
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn axis_name(axis: ScrollAxis) -> &'static str {
    match axis {
        ScrollAxis::Horizontal => "h",
        ScrollAxis::Vertical => "v",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_prepare(&mut self, e: &PrepareEvent) {
        let state = if e.recomputed { "derived" } else { "cached" };
        let inset = e.params.section_inset;
        let _ = writeln!(
            self.writer,
            "[prepare] {state} axis={} viewport={}x{} inset=({}, {}, {}, {}) spacing={:.2}",
            axis_name(e.axis),
            e.viewport.width,
            e.viewport.height,
            inset.x0,
            inset.y0,
            inset.x1,
            inset.y1,
            e.params.line_spacing,
        );
    }

    fn on_snap(&mut self, e: &SnapEvent) {
        if e.paging {
            let _ = writeln!(
                self.writer,
                "[snap] paging proposed=({:.1}, {:.1}) -> ({:.1}, {:.1})",
                e.proposed.x, e.proposed.y, e.resolution.offset.x, e.resolution.offset.y,
            );
            return;
        }
        let selected = match e.resolution.selected {
            Some(i) => i.to_string(),
            None => "-".to_string(),
        };
        let _ = writeln!(
            self.writer,
            "[snap] proposed=({:.1}, {:.1}) v=({:.3}, {:.3}) predicted={:.1} \
             candidates={} item={selected} -> ({:.1}, {:.1})",
            e.proposed.x,
            e.proposed.y,
            e.velocity.x,
            e.velocity.y,
            e.resolution.predicted,
            e.candidates,
            e.resolution.offset.x,
            e.resolution.offset.y,
        );
    }

    fn on_update_batch(&mut self, e: &UpdateBatchEvent) {
        let _ = match e.kind {
            BatchEventKind::Announced => writeln!(
                self.writer,
                "[batch:announce] inserts={} deletes={} untracked={} discarded={}",
                e.inserts, e.deletes, e.untracked, e.dropped,
            ),
            BatchEventKind::Finalized => {
                writeln!(self.writer, "[batch:finalize] unserved={}", e.dropped)
            }
        };
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        let hook = match e.kind {
            TransitionKind::Appearing => "appear",
            TransitionKind::Disappearing => "disappear",
        };
        let effect = if e.overridden { "offscreen" } else { "default" };
        let _ = writeln!(self.writer, "[{hook}] item={} {effect}", e.index);
    }

    fn on_item_transform(&mut self, e: &ItemTransformEvent) {
        if !self.item_transforms {
            return;
        }
        let _ = writeln!(
            self.writer,
            "[item] {} d={:.1} ratio={:.3} alpha={:.3} scale={:.3} z={}",
            e.index, e.distance, e.ratio, e.alpha, e.scale, e.z_index,
        );
    }
}
