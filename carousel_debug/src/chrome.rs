// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Layout events carry no wall-clock time, so each event's position in the
//! recording is used as its timestamp (one microsecond per event). Update
//! batches become duration slices spanning every event between announce and
//! finalize.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use carousel_core::axis::ScrollAxis;
use carousel_core::trace::{BatchEventKind, TransitionKind};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for (seq, recorded) in decode(bytes).enumerate() {
        let ts = seq;
        match recorded {
            RecordedEvent::Prepare(e) => {
                let inset = e.params.section_inset;
                events.push(json!({
                    "ph": "i",
                    "name": if e.recomputed { "Derive" } else { "Prepare" },
                    "cat": "Layout",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "g",
                    "args": {
                        "axis": axis_name(e.axis),
                        "viewport": [e.viewport.width, e.viewport.height],
                        "section_inset": [inset.x0, inset.y0, inset.x1, inset.y1],
                        "line_spacing": e.params.line_spacing,
                    }
                }));
            }
            RecordedEvent::Snap(e) => {
                let r = e.resolution;
                events.push(json!({
                    "ph": "i",
                    "name": if e.paging { "PagingSnap" } else { "Snap" },
                    "cat": "Snap",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "proposed": [e.proposed.x, e.proposed.y],
                        "velocity": [e.velocity.x, e.velocity.y],
                        "candidates": e.candidates,
                        "predicted": r.predicted,
                        "selected": r.selected,
                        "offset": [r.offset.x, r.offset.y],
                    }
                }));
            }
            RecordedEvent::UpdateBatch(e) => {
                let (ph, args) = match e.kind {
                    BatchEventKind::Announced => (
                        "B",
                        json!({
                            "inserts": e.inserts,
                            "deletes": e.deletes,
                            "untracked": e.untracked,
                            "discarded": e.dropped,
                        }),
                    ),
                    BatchEventKind::Finalized => ("E", json!({ "unserved": e.dropped })),
                };
                events.push(json!({
                    "ph": ph,
                    "name": "UpdateBatch",
                    "cat": "Batch",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "args": args,
                }));
            }
            RecordedEvent::Transition(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": match e.kind {
                        TransitionKind::Appearing => "Appear",
                        TransitionKind::Disappearing => "Disappear",
                    },
                    "cat": "Transition",
                    "ts": ts,
                    "pid": 0,
                    "tid": 0,
                    "s": "t",
                    "args": {
                        "index": e.index,
                        "overridden": e.overridden,
                    }
                }));
            }
            RecordedEvent::ItemTransform(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "ItemTransform",
                    "cat": "Rich",
                    "ts": ts,
                    "pid": 0,
                    "tid": 1,
                    "s": "t",
                    "args": {
                        "index": e.index,
                        "distance": e.distance,
                        "ratio": e.ratio,
                        "alpha": e.alpha,
                        "scale": e.scale,
                        "z_index": e.z_index,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn axis_name(axis: ScrollAxis) -> &'static str {
    match axis {
        ScrollAxis::Horizontal => "horizontal",
        ScrollAxis::Vertical => "vertical",
    }
}
