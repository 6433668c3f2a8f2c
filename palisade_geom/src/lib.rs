// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Palisade Geom: segment and motion-direction helpers for pointer-barrier
//! arbitration.
//!
//! This crate provides the small geometric vocabulary the barrier core is
//! built from:
//!
//! - [`Directions`]: a bitset over the four axis-aligned motion directions,
//!   with [`Directions::of_motion`] to classify the travel quadrant of a
//!   pointer sample.
//! - [`Orientation`] and [`orientation`]: classification of a segment as
//!   strictly horizontal or strictly vertical.
//! - [`segment_intersection`]: the proper-crossing test for two finite
//!   segments.
//!
//! All geometry is expressed in [`kurbo`] types ([`Point`], [`Vec2`],
//! [`Line`]); nothing here owns state or can fail at runtime.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Line, Point};
//! use palisade_geom::{segment_intersection, Directions, Orientation};
//!
//! let motion = Line::new((50.0, 90.0), (50.0, 110.0));
//! let barrier = Line::new((0.0, 100.0), (200.0, 100.0));
//!
//! let hit = segment_intersection(motion, barrier).unwrap();
//! assert_eq!(hit, Point::new(50.0, 100.0));
//!
//! let dir = Directions::of_motion(motion.p0, motion.p1);
//! assert_eq!(dir, Directions::POSITIVE_Y);
//!
//! assert_eq!(
//!     palisade_geom::orientation(barrier),
//!     Some(Orientation::Horizontal),
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod direction;
mod intersect;

pub use direction::Directions;
pub use intersect::{Orientation, orientation, segment_intersection};

#[doc(no_inline)]
pub use kurbo::{Line, Point, Vec2};
