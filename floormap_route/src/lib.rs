// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floormap Route: route polylines, path slicing, goals, and trails.
//!
//! A pathfinding engine hands this layer a planned route; a positioning
//! engine hands it a stream of live positions. This crate provides the
//! geometry and bookkeeping in between:
//! - [`slice_from`]: trim a route polyline to start at the point nearest the
//!   user, so the rendered line begins under the puck rather than at a stale
//!   vertex.
//! - [`Route`]: the head/body/tail split of a planned path, with conversion
//!   from engine pixel space to geographic coordinates.
//! - [`Goal`] / [`GoalSet`]: routing targets keyed by id and filtered per
//!   floor.
//! - [`Trail`]: the breadcrumb of recent positions behind the puck.
//!
//! ## Example
//!
//! ```rust
//! use floormap_route::slice_from;
//! use kurbo::Point;
//!
//! let route = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//! ];
//! // The user stands beside the first segment.
//! let sliced = slice_from(&route, Some(Point::new(4.0, 3.0)));
//! assert_eq!(sliced[0], Point::new(4.0, 0.0));
//! assert_eq!(&sliced[1..], &route[1..]);
//! ```
//!
//! Everything here is synchronous and free of shared state; callers marshal
//! results onto whatever rendering context they use. This crate is `no_std`.

#![no_std]

extern crate alloc;

mod goal;
mod route;
mod slice;
mod trail;

pub use goal::{Goal, GoalKind, GoalSet};
pub use route::{GeoRoute, Route};
pub use slice::{nearest_point_on_segment, slice_from};
pub use trail::Trail;
