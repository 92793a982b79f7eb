// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Head/body/tail route polylines.

use alloc::vec::Vec;

use floormap_convert::{CoordinateConverter, GeoPoint};
use kurbo::Point;

/// A planned route in engine pixel space, split for differentiated styling.
///
/// The pathfinding engine emits the walked portion behind the user (`tail`),
/// the stretch immediately ahead (`head`), and the remainder (`body`); each
/// part is rendered as its own line layer. Any part may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    /// The stretch immediately ahead of the user.
    pub head: Vec<Point>,
    /// The remainder of the planned path.
    pub body: Vec<Point>,
    /// The already-walked portion behind the user.
    pub tail: Vec<Point>,
}

/// A [`Route`] converted to geographic coordinates for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoRoute {
    /// Geographic head polyline.
    pub head: Vec<GeoPoint>,
    /// Geographic body polyline.
    pub body: Vec<GeoPoint>,
    /// Geographic tail polyline.
    pub tail: Vec<GeoPoint>,
}

impl Route {
    /// Converts all three parts from pixel space to geographic coordinates.
    #[must_use]
    pub fn to_geo(&self, converter: &CoordinateConverter) -> GeoRoute {
        let convert =
            |part: &[Point]| part.iter().map(|p| converter.pixel_point_to_geo(*p)).collect();
        GeoRoute {
            head: convert(&self.head),
            body: convert(&self.body),
            tail: convert(&self.tail),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use floormap_convert::{CoordinateConverter, FloorMetadata};
    use kurbo::Point;

    use super::Route;

    #[test]
    fn to_geo_converts_each_part() {
        let converter =
            CoordinateConverter::new(FloorMetadata::new(1, 30.0, 20.0, 50.0)).unwrap();
        let route = Route {
            head: [Point::new(0.0, 1000.0), Point::new(150.0, 900.0)].into(),
            body: [Point::new(150.0, 900.0), Point::new(500.0, 900.0)].into(),
            tail: Vec::new(),
        };

        let geo = route.to_geo(&converter);
        assert_eq!(geo.head.len(), 2);
        assert_eq!(geo.body.len(), 2);
        assert!(geo.tail.is_empty());
        // The shared vertex converts identically in both parts.
        assert_eq!(geo.head[1], geo.body[0]);
        assert_eq!(geo.head[1], converter.pixel_point_to_geo(Point::new(150.0, 900.0)));
    }
}
