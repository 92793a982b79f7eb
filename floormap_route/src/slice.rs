// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polyline slicing against a reference position.

use alloc::vec::Vec;

use kurbo::Point;

/// Returns the point on segment `a`-`b` nearest to `p`.
///
/// The projection of `p` onto the segment's supporting line, clamped to the
/// segment. Degenerate segments (`a == b`) yield `a`.
#[must_use]
pub fn nearest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    a + ab * t
}

/// Returns the suffix of `polyline` starting at the point nearest `reference`.
///
/// The nearest point is found by perpendicular projection onto each segment,
/// not by nearest vertex; it is synthesized as the first vertex of the result,
/// followed by every vertex after the segment it lies on. Equidistant segments
/// resolve to the earliest index, which makes the operation deterministic and
/// idempotent for a fixed reference.
///
/// Polylines with fewer than two points, or a `None` reference, are returned
/// unchanged. The input is never mutated.
#[must_use]
pub fn slice_from(polyline: &[Point], reference: Option<Point>) -> Vec<Point> {
    let Some(reference) = reference else {
        return polyline.to_vec();
    };
    if polyline.len() < 2 {
        return polyline.to_vec();
    }

    let mut best_index = 0;
    let mut best_point = polyline[0];
    let mut best_dist2 = f64::INFINITY;
    for (index, segment) in polyline.windows(2).enumerate() {
        let candidate = nearest_point_on_segment(reference, segment[0], segment[1]);
        let dist2 = (candidate - reference).hypot2();
        if dist2 < best_dist2 {
            best_dist2 = dist2;
            best_index = index;
            best_point = candidate;
        }
    }

    let mut sliced = Vec::with_capacity(polyline.len() - best_index);
    sliced.push(best_point);
    sliced.extend_from_slice(&polyline[best_index + 1..]);
    sliced
}
