// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for layout passes.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! the layout calls at each significant decision: parameter derivation,
//! snap resolution, batch boundaries, and served transitions. All method
//! bodies default to no-ops, so implementing only the events you care about
//! is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).
//! - `trace-rich` (implies `trace`) — gates per-item [`ItemTransformEvent`]s
//!   and the corresponding `TraceSink` method.

use kurbo::{Point, Size, Vec2};

use crate::axis::ScrollAxis;
use crate::params::DerivedParameters;
use crate::snap::SnapResolution;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which end of an update batch an event marks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BatchEventKind {
    /// The host announced a batch.
    Announced,
    /// The host finalized the batch.
    Finalized,
}

/// Which appearance hook served a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Initial attributes of an inserted item.
    Appearing,
    /// Final attributes of a deleted item.
    Disappearing,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted on every `prepare` that found an attached surface.
#[derive(Clone, Copy, Debug)]
pub struct PrepareEvent {
    /// Layout viewport size (safe area applied).
    pub viewport: Size,
    /// Active scroll axis.
    pub axis: ScrollAxis,
    /// Whether parameters were re-derived.
    pub recomputed: bool,
    /// Parameters in effect after the call.
    pub params: DerivedParameters,
}

/// Emitted when a snap target is resolved.
#[derive(Clone, Copy, Debug)]
pub struct SnapEvent {
    /// Offset proposed by the surface.
    pub proposed: Point,
    /// Release velocity in points per millisecond.
    pub velocity: Vec2,
    /// Whether paging deferred the decision to the surface.
    pub paging: bool,
    /// Number of visible candidates considered.
    pub candidates: u32,
    /// The resolution.
    pub resolution: SnapResolution,
}

/// Emitted at both ends of an update batch.
#[derive(Clone, Copy, Debug)]
pub struct UpdateBatchEvent {
    /// Which end of the batch.
    pub kind: BatchEventKind,
    /// Inserts recorded (announce only).
    pub inserts: u32,
    /// Deletes recorded (announce only).
    pub deletes: u32,
    /// Moves and reloads ignored (announce only).
    pub untracked: u32,
    /// Entries dropped without being served.
    pub dropped: u32,
}

/// Emitted by the appearance hooks.
#[derive(Clone, Copy, Debug)]
pub struct TransitionEvent {
    /// Item index.
    pub index: usize,
    /// Which hook.
    pub kind: TransitionKind,
    /// Whether the entry/exit override was applied. `false` both for
    /// indices outside the batch and for pending indices the grid has not
    /// materialized yet.
    pub overridden: bool,
}

/// Per-item transform record.
#[cfg(feature = "trace-rich")]
#[derive(Clone, Copy, Debug)]
pub struct ItemTransformEvent {
    /// Item index.
    pub index: usize,
    /// Clamped distance from the center line.
    pub distance: f64,
    /// Interpolation ratio.
    pub ratio: f64,
    /// Resulting opacity.
    pub alpha: f64,
    /// Resulting scale.
    pub scale: f64,
    /// Resulting stacking key.
    pub z_index: i32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the layout.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after `prepare`.
    fn on_prepare(&mut self, e: &PrepareEvent) {
        _ = e;
    }

    /// Called after a snap target is resolved.
    fn on_snap(&mut self, e: &SnapEvent) {
        _ = e;
    }

    /// Called when a batch is announced or finalized.
    fn on_update_batch(&mut self, e: &UpdateBatchEvent) {
        _ = e;
    }

    /// Called when an appearance hook is served.
    fn on_transition(&mut self, e: &TransitionEvent) {
        _ = e;
    }

    /// Called for every transformed item (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    fn on_item_transform(&mut self, e: &ItemTransformEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`PrepareEvent`].
    #[inline]
    pub fn prepare(&mut self, e: &PrepareEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_prepare(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SnapEvent`].
    #[inline]
    pub fn snap(&mut self, e: &SnapEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_snap(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`UpdateBatchEvent`].
    #[inline]
    pub fn update_batch(&mut self, e: &UpdateBatchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_update_batch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TransitionEvent`].
    #[inline]
    pub fn transition(&mut self, e: &TransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ItemTransformEvent`] (requires `trace-rich` feature).
    #[cfg(feature = "trace-rich")]
    #[inline]
    pub fn item_transform(&mut self, e: &ItemTransformEvent) {
        if let Some(s) = &mut self.sink {
            s.on_item_transform(e);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prepare() -> PrepareEvent {
        PrepareEvent {
            viewport: Size::new(375.0, 667.0),
            axis: ScrollAxis::Horizontal,
            recomputed: true,
            params: DerivedParameters::default(),
        }
    }

    fn sample_snap() -> SnapEvent {
        SnapEvent {
            proposed: Point::new(40.0, 0.0),
            velocity: Vec2::ZERO,
            paging: false,
            candidates: 3,
            resolution: SnapResolution {
                offset: Point::new(50.0, 0.0),
                predicted: 90.0,
                selected: Some(1),
            },
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_prepare(&sample_prepare());
        sink.on_snap(&sample_snap());
        sink.on_update_batch(&UpdateBatchEvent {
            kind: BatchEventKind::Finalized,
            inserts: 0,
            deletes: 0,
            untracked: 0,
            dropped: 2,
        });
        sink.on_transition(&TransitionEvent {
            index: 3,
            kind: TransitionKind::Appearing,
            overridden: true,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.prepare(&sample_prepare());
        tracer.snap(&sample_snap());
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            selected: Vec<Option<usize>>,
            prepares: u32,
        }
        impl TraceSink for RecordingSink {
            fn on_prepare(&mut self, _e: &PrepareEvent) {
                self.prepares += 1;
            }
            fn on_snap(&mut self, e: &SnapEvent) {
                self.selected.push(e.resolution.selected);
            }
        }

        let mut sink = RecordingSink {
            selected: Vec::new(),
            prepares: 0,
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.prepare(&sample_prepare());
        tracer.snap(&sample_snap());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.prepares, 1);
        assert_eq!(sink.selected, &[Some(1)]);
    }
}
