// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The walked-position trail behind the puck.

use alloc::vec::Vec;

use kurbo::Point;

/// Positions further apart than this are treated as a relocation jump and
/// reset the trail, in meters.
const JUMP_RESET_DISTANCE: f64 = 2.0;

/// Accumulates the recent positions of the user for a breadcrumb line.
///
/// Positions arrive in meter space at the positioning engine's cadence. A
/// jump of 2 m or more between consecutive positions means the engine
/// relocated the user (floor change, re-localization), so the accumulated
/// line no longer describes a walked path and is discarded.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    points: Vec<Point>,
    last_position: Option<Point>,
}

impl Trail {
    /// Creates an empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a position, resetting first if it jumps too far.
    pub fn push(&mut self, position: Point) {
        if let Some(last) = self.last_position
            && (position - last).hypot() >= JUMP_RESET_DISTANCE
        {
            self.points.clear();
        }
        self.points.push(position);
        self.last_position = Some(position);
    }

    /// Returns the accumulated positions, oldest first.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Discards all accumulated positions.
    ///
    /// The last seen position is kept, so the next [`Trail::push`] still
    /// applies the jump check against it.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::Trail;

    #[test]
    fn accumulates_nearby_positions() {
        let mut trail = Trail::new();
        trail.push(Point::new(0.0, 0.0));
        trail.push(Point::new(0.5, 0.0));
        trail.push(Point::new(1.0, 0.5));
        assert_eq!(trail.points().len(), 3);
    }

    #[test]
    fn jump_resets_the_trail() {
        let mut trail = Trail::new();
        trail.push(Point::new(0.0, 0.0));
        trail.push(Point::new(0.5, 0.0));
        // 2 m exactly is already a jump.
        trail.push(Point::new(2.5, 0.0));
        assert_eq!(trail.points(), [Point::new(2.5, 0.0)]);
    }

    #[test]
    fn clear_keeps_jump_anchor() {
        let mut trail = Trail::new();
        trail.push(Point::new(0.0, 0.0));
        trail.clear();
        assert!(trail.points().is_empty());

        // Still within 2 m of the last seen position: no reset, one point.
        trail.push(Point::new(1.0, 0.0));
        assert_eq!(trail.points().len(), 1);
    }
}
