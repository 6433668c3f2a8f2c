// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=palisade_barrier --heading-base-level=0

//! Palisade Barrier: pointer-barrier arbitration.
//!
//! A pointer barrier is an axis-aligned segment that blocks pointer motion
//! crossing it in one or both perpendicular senses. Desktop shells use them
//! for hot corners, screen-edge resistance between monitors, and dock
//! reveal gestures. This crate is the arbitration core behind those
//! features: given one pointer-motion sample at a time, it decides which
//! barriers the motion crosses, clamps the position against the closest
//! blocker per axis, and tracks each barrier through its
//! hit → held → released/left lifecycle.
//!
//! ## Overview
//!
//! - [`Barrier`]: the immutable descriptor, validated to be axis-aligned at
//!   construction.
//! - [`BarrierManager`]: owns registered barriers, arbitrates each
//!   [`MotionSample`] in [`BarrierManager::process`], and answers
//!   [`BarrierManager::release`] requests.
//! - [`BarrierSignal`] / [`BarrierEvent`]: the hit and left notifications a
//!   sample produces, with the episode serial that makes releases
//!   idempotent.
//! - [`PointerBarriers`]: the capability seam hosts program against, with
//!   [`BarrierManager`] (in-process arbitration) and [`RemoteBarriers`]
//!   (display-server arbitration) as its two implementations.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Line, Point};
//! use palisade_barrier::{Barrier, BarrierManager, Directions, MotionSample};
//!
//! let mut manager = BarrierManager::new();
//!
//! // A horizontal barrier across the top of a hot corner, blocking both
//! // vertical senses.
//! let id = manager.insert(
//!     Barrier::new(Line::new((0.0, 100.0), (200.0, 100.0)), Directions::empty()).unwrap(),
//! );
//!
//! // The pointer tries to cross it going down; the motion is clamped.
//! let out = manager.process(&MotionSample {
//!     device: 0,
//!     time_ms: 1000,
//!     prev: Point::new(50.0, 90.0),
//!     proposed: Point::new(50.0, 110.0),
//! });
//! assert_eq!(out.position, Point::new(50.0, 100.0));
//! assert_eq!(out.signals.len(), 1);
//! assert_eq!(out.signals[0].barrier(), id);
//! ```
//!
//! ## Processing model
//!
//! The manager is driven synchronously, once per motion sample, from the
//! host's input pipeline. Nothing here blocks, spawns, or fails at runtime:
//! a sample that crosses no barrier passes through unchanged, and a stale
//! release request is a no-op. The only loud failure is constructing a
//! [`Barrier`] from diagonal geometry, which is a programming error on the
//! host's side and rejected with [`BarrierGeometryError`].
//!
//! Events are delivered as a `Vec` of [`BarrierSignal`]s returned from
//! [`BarrierManager::process`], each carrying its [`BarrierEvent`] behind an
//! [`Arc`](alloc::sync::Arc) so listeners can retain payloads past the call
//! that produced them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod backend;
mod event;
mod manager;
mod remote;
mod state;
mod types;

pub use arena::BarrierId;
pub use backend::PointerBarriers;
pub use event::{BarrierEvent, BarrierSignal};
pub use manager::{BarrierManager, MotionSample, ProcessedMotion};
pub use remote::RemoteBarriers;
pub use state::BarrierState;
pub use types::{Barrier, BarrierGeometryError, HIT_BOX_MARGIN};

#[doc(no_inline)]
pub use palisade_geom::{Directions, Orientation};
