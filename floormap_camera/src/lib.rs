// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floormap Camera: initial camera placement over a floor plan.
//!
//! When a floor loads, the camera has to frame the whole plan with enough
//! margin to feel intentional. Fitting the raw floor rectangle leaves
//! elongated floors letterboxed against the screen edges, so the placement
//! policy stretches the framed region vertically for width-dominant floors
//! and applies heavier padding to hand-tuned bounding boxes. The multipliers
//! were tuned against deployed store layouts and are kept as they are for
//! compatibility; see the constants on [`default_placement`].
//!
//! ## Example
//!
//! ```rust
//! use floormap_camera::default_placement;
//! use floormap_convert::{CoordinateConverter, FloorMetadata};
//!
//! let meta = FloorMetadata::new(1, 93.17, 112.4, 50.0);
//! let converter = CoordinateConverter::new(meta).unwrap();
//!
//! let placement = default_placement(&meta, &converter);
//! let bounds = placement.bounds;
//! assert!(bounds.southwest().lat <= bounds.northeast().lat);
//! assert!(bounds.southwest().lng <= bounds.northeast().lng);
//! ```
//!
//! The output is a plain southwest/northeast pair; feeding it to a map SDK's
//! camera API is the caller's business. This crate is `no_std`.

#![no_std]

use floormap_convert::{CoordinateConverter, FloorMetadata, GeoBounds, GeoPoint};
use kurbo::{Insets, Point};

/// Base padding around the framed region, in meters.
pub const BASE_PADDING_METERS: f64 = 2.0;

/// Bounding-box inset multiplier for floors mounted with a non-zero bearing.
pub const ROTATED_BOX_PADDING_FACTOR: f64 = 10.0;

/// Horizontal bounding-box inset multiplier for width-dominant floors.
pub const WIDE_BOX_PADDING_X: f64 = 12.0;

/// Vertical bounding-box inset multiplier for width-dominant floors.
pub const WIDE_BOX_PADDING_Y: f64 = 16.0;

/// How far below the floor origin the synthesized wide-floor rect starts,
/// as a multiple of the floor height.
pub const WIDE_RECT_DROP_FACTOR: f64 = 1.5;

/// Height of the synthesized wide-floor rect as a multiple of the floor
/// height.
pub const WIDE_RECT_HEIGHT_FACTOR: f64 = 4.0;

/// An initial camera placement: what to frame, and at which bearing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPlacement {
    /// Geographic region the camera should frame.
    pub bounds: GeoBounds,
    /// Camera bearing in degrees.
    pub bearing: f64,
}

/// Computes the default camera placement for a floor.
///
/// Three cases, checked in order:
/// 1. An explicit [`FloorMetadata::bounding_box`] wins. Its corners are
///    expanded by its own per-side insets, multiplied by
///    [`ROTATED_BOX_PADDING_FACTOR`] when the floor has a bearing, or by
///    [`WIDE_BOX_PADDING_X`]/[`WIDE_BOX_PADDING_Y`] when the floor is wider
///    than tall at bearing zero.
/// 2. A floor wider than tall is framed with a rect dropped
///    [`WIDE_RECT_DROP_FACTOR`] floor-heights below the origin and
///    [`WIDE_RECT_HEIGHT_FACTOR`] floor-heights tall, so the width governs
///    the fit instead of the screen's vertical extent.
/// 3. Anything else is framed as-is.
///
/// Cases 2 and 3 add [`BASE_PADDING_METERS`] uniformly. The returned bounds
/// are anchored at the floor's geographic origin and are never inverted; a
/// zero-size floor yields a degenerate box carrying only the padding.
#[must_use]
pub fn default_placement(meta: &FloorMetadata, converter: &CoordinateConverter) -> CameraPlacement {
    let width = converter.meters_to_degrees(meta.width);
    let height = converter.meters_to_degrees(meta.height);
    let padding = converter.meters_to_degrees(BASE_PADDING_METERS);
    let origin = meta.origin;

    let bounds = if let Some(bbox) = meta.bounding_box {
        let insets = if meta.bearing != 0.0 {
            scale_insets(bbox.padding, ROTATED_BOX_PADDING_FACTOR, ROTATED_BOX_PADDING_FACTOR)
        } else if meta.width > meta.height {
            scale_insets(bbox.padding, WIDE_BOX_PADDING_X, WIDE_BOX_PADDING_Y)
        } else {
            bbox.padding
        };
        let bottom_left = Point::new(
            bbox.bottom_left.x - insets.x0,
            bbox.bottom_left.y - insets.y0,
        );
        let top_right = Point::new(bbox.top_right.x + insets.x1, bbox.top_right.y + insets.y1);
        GeoBounds::new(
            converter.meter_point_to_geo(bottom_left),
            converter.meter_point_to_geo(top_right),
        )
    } else if meta.width > meta.height {
        let southwest = GeoPoint::new(origin.lat - height * WIDE_RECT_DROP_FACTOR, origin.lng);
        let northeast = GeoPoint::new(
            southwest.lat + height * WIDE_RECT_HEIGHT_FACTOR,
            origin.lng + width,
        );
        GeoBounds::new(southwest, northeast).with_padding(padding)
    } else {
        GeoBounds::new(
            origin,
            GeoPoint::new(origin.lat + height, origin.lng + width),
        )
        .with_padding(padding)
    };

    CameraPlacement {
        bounds,
        bearing: meta.bearing,
    }
}

fn scale_insets(insets: Insets, horizontal: f64, vertical: f64) -> Insets {
    Insets {
        x0: insets.x0 * horizontal,
        y0: insets.y0 * vertical,
        x1: insets.x1 * horizontal,
        y1: insets.y1 * vertical,
    }
}
