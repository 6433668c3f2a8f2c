// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The barrier descriptor and its construction-time validation.

use core::fmt;

use kurbo::{Line, Point};
use palisade_geom::{Directions, Orientation, orientation};

/// How far a held barrier's hit box extends past its line on a blocked side.
///
/// The margin absorbs small pointer noise so that a pointer resting against a
/// barrier does not flicker between held and left. Fixed by design, not
/// configurable.
pub const HIT_BOX_MARGIN: f64 = 2.0;

/// Why a [`Barrier`] descriptor was rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BarrierGeometryError {
    /// The segment is neither strictly horizontal nor strictly vertical.
    Diagonal,
    /// The segment's endpoints coincide.
    Degenerate,
}

impl fmt::Display for BarrierGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Diagonal => write!(f, "barrier segment must be axis-aligned"),
            Self::Degenerate => write!(f, "barrier segment must have distinct endpoints"),
        }
    }
}

impl core::error::Error for BarrierGeometryError {}

/// An axis-aligned segment that can block pointer motion crossing it.
///
/// A barrier is immutable once constructed: its segment and the set of
/// directions it lets pass are fixed. Which side blocks is expressed through
/// `passable`: a horizontal barrier may let `POSITIVE_Y` or `NEGATIVE_Y`
/// motion through (or neither), a vertical one `POSITIVE_X` or `NEGATIVE_X`.
/// Bits for the parallel axis are ignored; the pointer always moves freely
/// along a barrier's own line.
///
/// Diagonal and zero-length segments are rejected loudly at construction;
/// the arbitration core has no meaningful clamp semantics for them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Barrier {
    line: Line,
    passable: Directions,
    orientation: Orientation,
}

impl Barrier {
    /// Creates a barrier from an axis-aligned segment and the directions it
    /// lets pass.
    ///
    /// # Errors
    ///
    /// Returns [`BarrierGeometryError`] if the segment is diagonal or
    /// zero-length.
    pub fn new(line: Line, passable: Directions) -> Result<Self, BarrierGeometryError> {
        let orientation = orientation(line).ok_or_else(|| {
            if line.p0 == line.p1 {
                BarrierGeometryError::Degenerate
            } else {
                BarrierGeometryError::Diagonal
            }
        })?;
        Ok(Self {
            line,
            passable,
            orientation,
        })
    }

    /// The barrier's segment.
    #[must_use]
    pub fn line(&self) -> Line {
        self.line
    }

    /// The directions this barrier lets pass unobstructed.
    #[must_use]
    pub fn passable(&self) -> Directions {
        self.passable
    }

    /// Whether the segment is horizontal or vertical.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The directions this barrier blocks.
    ///
    /// Only the axis perpendicular to the segment can be blocked: a
    /// horizontal barrier blocks vertical motion and vice versa. Within that
    /// axis, anything not in `passable` is blocked.
    #[must_use]
    pub fn blocked(&self) -> Directions {
        let axis = match self.orientation {
            Orientation::Horizontal => Directions::AXIS_Y,
            Orientation::Vertical => Directions::AXIS_X,
        };
        axis - self.passable
    }

    /// The fixed coordinate of the segment's line: y for a horizontal
    /// barrier, x for a vertical one. This is the value motion is clamped to.
    #[must_use]
    pub fn coordinate(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.line.p0.y,
            Orientation::Vertical => self.line.p0.x,
        }
    }

    /// The segment's extent along its own axis, as `(min, max)`.
    pub(crate) fn span(&self) -> (f64, f64) {
        let (a, b) = match self.orientation {
            Orientation::Horizontal => (self.line.p0.x, self.line.p1.x),
            Orientation::Vertical => (self.line.p0.y, self.line.p1.y),
        };
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Whether `point` is inside the hit box of a hold episode that clamped
    /// the directions in `blocked_dir`.
    ///
    /// The hit box is the segment itself, inflated by [`HIT_BOX_MARGIN`] on
    /// the approach side of each clamped direction. Along the segment's own
    /// axis the finite extent is not inflated: sliding past an endpoint ends
    /// the hold.
    pub(crate) fn hit_box_contains(&self, blocked_dir: Directions, point: Point) -> bool {
        let (span_min, span_max) = self.span();
        let (along, across) = match self.orientation {
            Orientation::Horizontal => (point.x, point.y),
            Orientation::Vertical => (point.y, point.x),
        };
        if along < span_min || along > span_max {
            return false;
        }

        let mut lo = self.coordinate();
        let mut hi = lo;
        let (positive, negative) = match self.orientation {
            Orientation::Horizontal => (Directions::POSITIVE_Y, Directions::NEGATIVE_Y),
            Orientation::Vertical => (Directions::POSITIVE_X, Directions::NEGATIVE_X),
        };
        // A clamp against positive-direction motion leaves the pointer on the
        // low-coordinate side of the line, and vice versa.
        if blocked_dir.contains(positive) {
            lo -= HIT_BOX_MARGIN;
        }
        if blocked_dir.contains(negative) {
            hi += HIT_BOX_MARGIN;
        }
        (lo..=hi).contains(&across)
    }
}
