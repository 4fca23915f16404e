// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Floating-point fields are stored as raw IEEE-754 bits, so `NaN` (used by
//! paging snaps for the unused prediction) survives the round trip.

use carousel_core::axis::ScrollAxis;
use carousel_core::params::DerivedParameters;
use carousel_core::snap::SnapResolution;
use carousel_core::trace::{
    BatchEventKind, ItemTransformEvent, PrepareEvent, SnapEvent, TraceSink, TransitionEvent,
    TransitionKind, UpdateBatchEvent,
};
use kurbo::{Insets, Point, Size, Vec2};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_PREPARE: u8 = 1;
const TAG_SNAP: u8 = 2;
const TAG_UPDATE_BATCH: u8 = 3;
const TAG_TRANSITION: u8 = 4;
const TAG_ITEM_TRANSFORM: u8 = 5;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_index(&mut self, v: usize) {
        self.write_u64(v as u64);
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_point(&mut self, p: Point) {
        self.write_f64(p.x);
        self.write_f64(p.y);
    }

    fn write_option_index(&mut self, v: Option<usize>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_index(val);
            }
            None => {
                self.write_u8(0);
                self.write_u64(0);
            }
        }
    }

    fn write_axis(&mut self, axis: ScrollAxis) {
        self.write_u8(match axis {
            ScrollAxis::Horizontal => 0,
            ScrollAxis::Vertical => 1,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_prepare(&mut self, e: &PrepareEvent) {
        self.write_u8(TAG_PREPARE);
        self.write_f64(e.viewport.width);
        self.write_f64(e.viewport.height);
        self.write_axis(e.axis);
        self.write_bool(e.recomputed);
        let inset = e.params.section_inset;
        self.write_f64(inset.x0);
        self.write_f64(inset.y0);
        self.write_f64(inset.x1);
        self.write_f64(inset.y1);
        self.write_f64(e.params.line_spacing);
    }

    fn on_snap(&mut self, e: &SnapEvent) {
        self.write_u8(TAG_SNAP);
        self.write_point(e.proposed);
        self.write_f64(e.velocity.x);
        self.write_f64(e.velocity.y);
        self.write_bool(e.paging);
        self.write_u32(e.candidates);
        self.write_point(e.resolution.offset);
        self.write_f64(e.resolution.predicted);
        self.write_option_index(e.resolution.selected);
    }

    fn on_update_batch(&mut self, e: &UpdateBatchEvent) {
        self.write_u8(TAG_UPDATE_BATCH);
        self.write_u8(match e.kind {
            BatchEventKind::Announced => 0,
            BatchEventKind::Finalized => 1,
        });
        self.write_u32(e.inserts);
        self.write_u32(e.deletes);
        self.write_u32(e.untracked);
        self.write_u32(e.dropped);
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        self.write_u8(TAG_TRANSITION);
        self.write_index(e.index);
        self.write_u8(match e.kind {
            TransitionKind::Appearing => 0,
            TransitionKind::Disappearing => 1,
        });
        self.write_bool(e.overridden);
    }

    fn on_item_transform(&mut self, e: &ItemTransformEvent) {
        self.write_u8(TAG_ITEM_TRANSFORM);
        self.write_index(e.index);
        self.write_f64(e.distance);
        self.write_f64(e.ratio);
        self.write_f64(e.alpha);
        self.write_f64(e.scale);
        self.buf.extend_from_slice(&e.z_index.to_le_bytes());
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug)]
pub enum RecordedEvent {
    /// A [`PrepareEvent`].
    Prepare(PrepareEvent),
    /// A [`SnapEvent`].
    Snap(SnapEvent),
    /// An [`UpdateBatchEvent`].
    UpdateBatch(UpdateBatchEvent),
    /// A [`TransitionEvent`].
    Transition(TransitionEvent),
    /// An [`ItemTransformEvent`].
    ItemTransform(ItemTransformEvent),
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
///
/// Iteration stops at the first unknown tag or truncated record.
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.pos.checked_add(N)?;
        let bytes: [u8; N] = self.data.get(self.pos..end)?.try_into().ok()?;
        self.pos = end;
        Some(bytes)
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[b]| b)
    }

    fn read_bool(&mut self) -> Option<bool> {
        self.read_u8().map(|b| b != 0)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_i32(&mut self) -> Option<i32> {
        self.take().map(i32::from_le_bytes)
    }

    fn read_index(&mut self) -> Option<usize> {
        usize::try_from(u64::from_le_bytes(self.take()?)).ok()
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.take().map(f64::from_le_bytes)
    }

    fn read_point(&mut self) -> Option<Point> {
        Some(Point::new(self.read_f64()?, self.read_f64()?))
    }

    fn read_option_index(&mut self) -> Option<Option<usize>> {
        let present = self.read_u8()?;
        let val = self.read_index()?;
        Some(if present != 0 { Some(val) } else { None })
    }

    fn read_axis(&mut self) -> Option<ScrollAxis> {
        Some(match self.read_u8()? {
            0 => ScrollAxis::Horizontal,
            _ => ScrollAxis::Vertical,
        })
    }

    fn decode_prepare(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Prepare(PrepareEvent {
            viewport: Size::new(self.read_f64()?, self.read_f64()?),
            axis: self.read_axis()?,
            recomputed: self.read_bool()?,
            params: DerivedParameters {
                section_inset: Insets::new(
                    self.read_f64()?,
                    self.read_f64()?,
                    self.read_f64()?,
                    self.read_f64()?,
                ),
                line_spacing: self.read_f64()?,
            },
        }))
    }

    fn decode_snap(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Snap(SnapEvent {
            proposed: self.read_point()?,
            velocity: Vec2::new(self.read_f64()?, self.read_f64()?),
            paging: self.read_bool()?,
            candidates: self.read_u32()?,
            resolution: SnapResolution {
                offset: self.read_point()?,
                predicted: self.read_f64()?,
                selected: self.read_option_index()?,
            },
        }))
    }

    fn decode_update_batch(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::UpdateBatch(UpdateBatchEvent {
            kind: match self.read_u8()? {
                0 => BatchEventKind::Announced,
                _ => BatchEventKind::Finalized,
            },
            inserts: self.read_u32()?,
            deletes: self.read_u32()?,
            untracked: self.read_u32()?,
            dropped: self.read_u32()?,
        }))
    }

    fn decode_transition(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Transition(TransitionEvent {
            index: self.read_index()?,
            kind: match self.read_u8()? {
                0 => TransitionKind::Appearing,
                _ => TransitionKind::Disappearing,
            },
            overridden: self.read_bool()?,
        }))
    }

    fn decode_item_transform(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::ItemTransform(ItemTransformEvent {
            index: self.read_index()?,
            distance: self.read_f64()?,
            ratio: self.read_f64()?,
            alpha: self.read_f64()?,
            scale: self.read_f64()?,
            z_index: self.read_i32()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_PREPARE => self.decode_prepare(),
            TAG_SNAP => self.decode_snap(),
            TAG_UPDATE_BATCH => self.decode_update_batch(),
            TAG_TRANSITION => self.decode_transition(),
            TAG_ITEM_TRANSFORM => self.decode_item_transform(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
