// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned motion directions as a compact bitset.

use kurbo::Point;

bitflags::bitflags! {
    /// A set of axis-aligned motion directions.
    ///
    /// Used both for the travel quadrant of a pointer sample (at most one
    /// horizontal and one vertical bit) and for the set of directions a
    /// barrier lets pass through.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Directions: u8 {
        /// Motion toward increasing x (rightward).
        const POSITIVE_X = 0b0001;
        /// Motion toward increasing y (downward in window coordinates).
        const POSITIVE_Y = 0b0010;
        /// Motion toward decreasing x (leftward).
        const NEGATIVE_X = 0b0100;
        /// Motion toward decreasing y (upward in window coordinates).
        const NEGATIVE_Y = 0b1000;
    }
}

impl Directions {
    /// Both horizontal bits.
    pub const AXIS_X: Self = Self::POSITIVE_X.union(Self::NEGATIVE_X);

    /// Both vertical bits.
    pub const AXIS_Y: Self = Self::POSITIVE_Y.union(Self::NEGATIVE_Y);

    /// Classifies the travel quadrant of a motion from `from` to `to`.
    ///
    /// Zero displacement along an axis contributes no bit for that axis, so
    /// the result has at most two bits set and is empty for a stationary
    /// sample.
    #[must_use]
    pub fn of_motion(from: Point, to: Point) -> Self {
        let mut dir = Self::empty();
        if to.x > from.x {
            dir |= Self::POSITIVE_X;
        } else if to.x < from.x {
            dir |= Self::NEGATIVE_X;
        }
        if to.y > from.y {
            dir |= Self::POSITIVE_Y;
        } else if to.y < from.y {
            dir |= Self::NEGATIVE_Y;
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stationary_sample_has_no_direction() {
        let p = Point::new(10.0, 20.0);
        assert_eq!(Directions::of_motion(p, p), Directions::empty());
    }

    #[test]
    fn axis_motion_sets_single_bit() {
        let origin = Point::ZERO;
        assert_eq!(
            Directions::of_motion(origin, Point::new(5.0, 0.0)),
            Directions::POSITIVE_X,
        );
        assert_eq!(
            Directions::of_motion(origin, Point::new(-5.0, 0.0)),
            Directions::NEGATIVE_X,
        );
        assert_eq!(
            Directions::of_motion(origin, Point::new(0.0, 5.0)),
            Directions::POSITIVE_Y,
        );
        assert_eq!(
            Directions::of_motion(origin, Point::new(0.0, -5.0)),
            Directions::NEGATIVE_Y,
        );
    }

    #[test]
    fn diagonal_motion_sets_one_bit_per_axis() {
        let dir = Directions::of_motion(Point::ZERO, Point::new(3.0, -4.0));
        assert_eq!(dir, Directions::POSITIVE_X | Directions::NEGATIVE_Y);
        assert_eq!(dir.bits().count_ones(), 2);
    }

    #[test]
    fn axis_masks_partition_the_bits() {
        assert_eq!(
            Directions::AXIS_X | Directions::AXIS_Y,
            Directions::all(),
        );
        assert!((Directions::AXIS_X & Directions::AXIS_Y).is_empty());
    }
}
