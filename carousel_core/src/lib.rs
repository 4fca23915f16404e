// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry, snapping, and transition engine for single-axis carousels.
//!
//! `carousel_core` turns the raw output of a one-line grid into a carousel:
//! the item nearest the viewport center renders at full size and opacity,
//! neighbors shrink and fade with distance, and released scroll gestures
//! settle with an item exactly centered. It is `no_std` compatible (with
//! `alloc`) and owns no UI objects; hosts supply the grid and scroll surface
//! through traits.
//!
//! # Architecture
//!
//! ```text
//!   ScrollSurface (viewport, offset)      ItemGrid (raw frames)
//!       │                                     ▲        │
//!       ▼                                     │        ▼
//!   LayoutStateCache ──► derive_parameters ───┘   RawAttributes
//!                                                      │
//!                          TransformContext ──► transform_attributes
//!                                                      │
//!                                                      ▼
//!                                           TransformedAttributes
//!                                              │             │
//!                          resolve_snap_offset ┘             └ TransitionTracker
//! ```
//!
//! **[`layout`]** — [`CarouselLayout`](layout::CarouselLayout), the owner
//! that wires everything together and implements
//! [`CollectionLayout`](host::CollectionLayout).
//!
//! **[`host`]** — Collaborator traits ([`ItemGrid`](host::ItemGrid),
//! [`ScrollSurface`](host::ScrollSurface)) and the layout capability trait.
//!
//! **[`params`]** — Section inset and line spacing derivation.
//!
//! **[`state`]** — Viewport state cache deciding when to re-derive.
//!
//! **[`transform`]** — Distance-from-center interpolation of alpha, scale,
//! cross-axis shift, and stacking key.
//!
//! **[`snap`]** — Velocity-aware snap target resolution.
//!
//! **[`transition`]** — Batched update tracking and one-shot entry/exit
//! geometry.
//!
//! **[`config`]**, **[`axis`]**, **[`attributes`]** — Value types.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types,
//! with zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).
//! - `trace-rich` (disabled by default, implies `trace`): Gates per-item
//!   transform events.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod attributes;
pub mod axis;
pub mod config;
pub mod host;
pub mod layout;
pub mod params;
pub mod snap;
pub mod state;
pub mod trace;
pub mod transform;
pub mod transition;
