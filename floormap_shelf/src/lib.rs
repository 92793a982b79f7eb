// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floormap Shelf: shelf footprint polygons and render state.
//!
//! Shelf footprints arrive from site data as unordered vertex sets in meter
//! space. Rendering them as filled regions requires a consistent winding, so
//! this crate orders vertices clockwise around their centroid
//! ([`sort_clockwise`]) and carries the per-shelf render state the styling
//! layer switches on ([`ShelfFlags`]).
//!
//! ## Example
//!
//! ```rust
//! use floormap_shelf::sort_clockwise;
//! use kurbo::Point;
//!
//! let unordered = [
//!     Point::new(-1.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.0, -1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let ordered = sort_clockwise(&unordered);
//! assert_eq!(
//!     ordered,
//!     [
//!         Point::new(0.0, 1.0),
//!         Point::new(1.0, 0.0),
//!         Point::new(0.0, -1.0),
//!         Point::new(-1.0, 0.0),
//!     ]
//! );
//! ```
//!
//! This crate is `no_std`; enable the `libm` feature for builds without
//! `std`.

#![no_std]

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("floormap_shelf requires either the `std` or `libm` feature");

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bitflags::bitflags;
use kurbo::Point;

/// Angle of `point` around `center`, in degrees within `[0, 360)`.
///
/// Measured from the positive y axis, growing clockwise, so ascending angles
/// walk a polygon boundary clockwise in y-up meter space.
fn clockwise_angle(point: Point, center: Point) -> f64 {
    let radians = atan2(point.x - center.x, point.y - center.y);
    (radians.to_degrees() + 360.0) % 360.0
}

fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        y.atan2(x)
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::atan2(y, x)
    }
}

/// Returns the arithmetic mean of `points`.
///
/// An empty slice yields the origin.
#[must_use]
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ZERO;
    }
    let mut x = 0.0;
    let mut y = 0.0;
    for p in points {
        x += p.x;
        y += p.y;
    }
    let n = points.len() as f64;
    Point::new(x / n, y / n)
}

/// Orders `points` clockwise around their centroid.
///
/// Vertices are keyed by their angle from the centroid, measured clockwise
/// from north, and sorted ascending with a stable sort, so collinear and
/// duplicate points keep their relative input order and the result is
/// deterministic for any input ordering of the same set. Fewer than three
/// points do not describe a polygon and are returned unchanged.
#[must_use]
pub fn sort_clockwise(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let center = centroid(points);
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        f64::total_cmp(&clockwise_angle(*a, center), &clockwise_angle(*b, center))
    });
    sorted
}

bitflags! {
    /// Render state of a shelf, switched on by the styling layer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ShelfFlags: u8 {
        /// The shelf is drawn at all.
        const VISIBLE = 1 << 0;
        /// The shelf is highlighted as selected.
        const SELECTED = 1 << 1;
        /// The shelf carries a marker dot at its centroid.
        const MARKED = 1 << 2;
    }
}

/// A retail fixture footprint on one floor.
#[derive(Clone, Debug, PartialEq)]
pub struct Shelf {
    /// Display name, also the shelf's identifier within its floor.
    pub name: String,
    /// Footprint vertices in meter space, in no particular order.
    pub shape: Vec<Point>,
    /// Current render state.
    pub flags: ShelfFlags,
}

impl Shelf {
    /// Creates a shelf with default (hidden) render state.
    #[must_use]
    pub fn new(name: String, shape: Vec<Point>) -> Self {
        Self {
            name,
            shape,
            flags: ShelfFlags::default(),
        }
    }

    /// Returns the footprint ordered clockwise for polygon rendering.
    #[must_use]
    pub fn outline(&self) -> Vec<Point> {
        sort_clockwise(&self.shape)
    }

    /// Returns the point where a marker dot for this shelf is placed.
    #[must_use]
    pub fn mark_point(&self) -> Point {
        centroid(&self.shape)
    }
}
