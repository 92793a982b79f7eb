// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floormap Convert: floor metadata and coordinate-space conversion.
//!
//! Indoor positioning works in three coordinate spaces at once:
//! - **Meters**: the floor's local metric space, y pointing up, produced by
//!   the positioning engine.
//! - **Pixels**: the raster space of the floor plan and the pathfinding
//!   engine, y pointing down, related to meters by a per-floor scale.
//! - **Geographic**: latitude/longitude pairs consumed by the map renderer,
//!   related to meters by a linear offset from a per-floor origin anchor.
//!
//! This crate provides the immutable per-floor metadata ([`FloorMetadata`])
//! and a [`CoordinateConverter`] that maps points between the three spaces.
//! A converter can only be built from metadata with a valid scale, so every
//! conversion method is pure and infallible.
//!
//! ## Example
//!
//! ```rust
//! use floormap_convert::{CoordinateConverter, FloorMetadata};
//! use kurbo::Point;
//!
//! let meta = FloorMetadata::new(1, 30.0, 20.0, 50.0);
//! let converter = CoordinateConverter::new(meta).unwrap();
//!
//! // A position 3 m east, 2 m north of the floor origin.
//! let meters = Point::new(3.0, 2.0);
//! let pixels = converter.meter_point_to_pixel(meters);
//! // Pixel space is y-down: 2 m up from the bottom of a 20 m floor.
//! assert_eq!(pixels, Point::new(150.0, 900.0));
//!
//! let geo = converter.meter_point_to_geo(meters);
//! let back = converter.geo_to_meter_point(geo);
//! assert!((back - meters).hypot() < 1e-9);
//! ```
//!
//! Callers that render (map SDK adapters, pucks, overlays) live in higher
//! layers; this crate has no rendering or I/O dependencies and is `no_std`.

#![no_std]

mod converter;
mod floor;
mod geo;

pub use converter::{ConvertError, CoordinateConverter, METERS_PER_DEGREE};
pub use floor::{BoundingBox, FloorMetadata};
pub use geo::{GeoBounds, GeoPoint};
