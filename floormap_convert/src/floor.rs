// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable per-floor metadata.

use kurbo::{Insets, Point};

use crate::geo::GeoPoint;

/// An explicit bounding box for a floor, in meters.
///
/// Some sites ship a hand-tuned box with per-side padding instead of relying
/// on the floor's width/height; camera placement prefers it when present.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    /// Bottom-left corner in meters.
    pub bottom_left: Point,
    /// Top-right corner in meters.
    pub top_right: Point,
    /// Per-side padding in meters applied around the corners.
    pub padding: Insets,
}

impl BoundingBox {
    /// Creates a bounding box with uniform padding on all sides.
    #[must_use]
    pub const fn with_uniform_padding(bottom_left: Point, top_right: Point, padding: f64) -> Self {
        Self {
            bottom_left,
            top_right,
            padding: Insets::uniform(padding),
        }
    }
}

/// Immutable metadata for one floor of a site.
///
/// A floor is described by its metric dimensions, a raster scale, and an
/// optional geographic anchor. The value is loaded once per floor change and
/// passed by reference into the pure conversion and camera utilities; nothing
/// in this workspace mutates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloorMetadata {
    /// Identifier of the floor level within its site.
    pub floor_id: i64,
    /// Floor width in meters.
    pub width: f64,
    /// Floor height in meters.
    pub height: f64,
    /// Raster scale relating meters to floor-plan pixels.
    pub pixels_per_meter: f64,
    /// Optional explicit bounding box override for camera placement.
    pub bounding_box: Option<BoundingBox>,
    /// Geographic anchor the floor's meter origin maps to.
    pub origin: GeoPoint,
    /// Camera bearing in degrees for floors mounted rotated on the map.
    pub bearing: f64,
}

impl FloorMetadata {
    /// Creates metadata for a floor with no bounding box, a zero bearing,
    /// and an origin anchored at latitude/longitude zero.
    #[must_use]
    pub const fn new(floor_id: i64, width: f64, height: f64, pixels_per_meter: f64) -> Self {
        Self {
            floor_id,
            width,
            height,
            pixels_per_meter,
            bounding_box: None,
            origin: GeoPoint::new(0.0, 0.0),
            bearing: 0.0,
        }
    }

    /// Returns a copy with the given explicit bounding box.
    #[must_use]
    pub const fn with_bounding_box(mut self, bounding_box: BoundingBox) -> Self {
        self.bounding_box = Some(bounding_box);
        self
    }

    /// Returns a copy anchored at the given geographic origin.
    #[must_use]
    pub const fn with_origin(mut self, origin: GeoPoint) -> Self {
        self.origin = origin;
        self
    }

    /// Returns a copy with the given camera bearing in degrees.
    #[must_use]
    pub const fn with_bearing(mut self, bearing: f64) -> Self {
        self.bearing = bearing;
        self
    }

    /// Returns the floor area in square meters.
    #[must_use]
    pub fn square_meters(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{BoundingBox, FloorMetadata};
    use crate::geo::GeoPoint;

    #[test]
    fn builder_style_copies() {
        let bbox = BoundingBox::with_uniform_padding(Point::ZERO, Point::new(10.0, 5.0), 1.0);
        let meta = FloorMetadata::new(7, 10.0, 5.0, 50.0)
            .with_bounding_box(bbox)
            .with_origin(GeoPoint::new(52.0, 4.3))
            .with_bearing(90.0);

        assert_eq!(meta.floor_id, 7);
        assert_eq!(meta.bounding_box, Some(bbox));
        assert_eq!(meta.origin, GeoPoint::new(52.0, 4.3));
        assert_eq!(meta.bearing, 90.0);
        assert_eq!(meta.square_meters(), 50.0);
    }
}
