// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Finite-segment intersection and axis-orientation classification.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point, Vec2};

/// The axis a segment runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Constant y, varying x.
    Horizontal,
    /// Constant x, varying y.
    Vertical,
}

/// Classifies a segment as strictly horizontal or strictly vertical.
///
/// Returns `None` for diagonal segments and for zero-length (degenerate)
/// ones. Barrier descriptors use this at construction time to reject
/// geometry the arbitration core cannot reason about.
#[must_use]
pub fn orientation(line: Line) -> Option<Orientation> {
    if line.p0.y == line.p1.y && line.p0.x != line.p1.x {
        Some(Orientation::Horizontal)
    } else if line.p0.x == line.p1.x && line.p0.y != line.p1.y {
        Some(Orientation::Vertical)
    } else {
        None
    }
}

/// Returns the proper crossing point of two finite segments, if any.
///
/// Solves `p + t·r = q + u·s` for the segments `a = p → p + r` and
/// `b = q → q + s`; a crossing exists iff both parameters land in `[0, 1]`.
/// Endpoint touches count as crossings.
///
/// Parallel segments return `None`. This includes exactly collinear
/// *overlapping* segments: motion running exactly along a barrier's own line
/// is reported as not intersecting it. That matches the behavior barrier
/// arbitration has always had and callers rely on; see the crate
/// documentation before changing it.
#[must_use]
pub fn segment_intersection(a: Line, b: Line) -> Option<Point> {
    let p = a.p0;
    let q = b.p0;
    let r = a.p1 - a.p0;
    let s = b.p1 - b.p0;

    let rxs = r.cross(s);
    if rxs.abs() < f64::EPSILON {
        // Parallel or collinear.
        return None;
    }

    let qp: Vec2 = q - p;
    let t = qp.cross(s) / rxs;
    // cross(p - q, r) / cross(s, r) == cross(q - p, r) / cross(r, s).
    let u = qp.cross(r) / rxs;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(p + t * r)
    } else {
        None
    }
}
