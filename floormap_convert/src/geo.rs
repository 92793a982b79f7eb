// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geographic points and bounds.

/// A geographic coordinate in degrees.
///
/// Latitude grows northward, longitude eastward. Values are plain degrees;
/// no wrapping or pole handling is applied because indoor floors span a few
/// hundred meters at most.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new geographic point.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A geographic bounding rectangle described by its southwest and northeast
/// corners.
///
/// The constructors normalize corner order, so `southwest.lat <= northeast.lat`
/// and `southwest.lng <= northeast.lng` always hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoBounds {
    southwest: GeoPoint,
    northeast: GeoPoint,
}

impl GeoBounds {
    /// Creates bounds from two corner points, normalizing corner order.
    #[must_use]
    pub fn new(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            southwest: GeoPoint::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            northeast: GeoPoint::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Creates the smallest bounds containing every point in `points`.
    ///
    /// An empty slice yields a degenerate box at the default origin; a single
    /// point yields a degenerate box at that point. Upstream callers routinely
    /// pass transient empty collections during startup, so this is not an
    /// error.
    #[must_use]
    pub fn from_points(points: &[GeoPoint]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(GeoPoint::default(), GeoPoint::default());
        };
        let mut min_lat = first.lat;
        let mut max_lat = first.lat;
        let mut min_lng = first.lng;
        let mut max_lng = first.lng;
        for p in &points[1..] {
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
            min_lng = min_lng.min(p.lng);
            max_lng = max_lng.max(p.lng);
        }
        Self {
            southwest: GeoPoint::new(min_lat, min_lng),
            northeast: GeoPoint::new(max_lat, max_lng),
        }
    }

    /// Returns the southwest corner.
    #[must_use]
    pub fn southwest(&self) -> GeoPoint {
        self.southwest
    }

    /// Returns the northeast corner.
    #[must_use]
    pub fn northeast(&self) -> GeoPoint {
        self.northeast
    }

    /// Returns the center of the bounds.
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        let width = self.northeast.lng - self.southwest.lng;
        let height = self.northeast.lat - self.southwest.lat;
        GeoPoint::new(
            self.southwest.lat + height / 2.0,
            self.southwest.lng + width / 2.0,
        )
    }

    /// Returns `true` if `point` lies within the bounds (inclusive).
    #[must_use]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.southwest.lat..=self.northeast.lat).contains(&point.lat)
            && (self.southwest.lng..=self.northeast.lng).contains(&point.lng)
    }

    /// Returns these bounds expanded by `padding` degrees on every side.
    ///
    /// Negative padding shrinks the bounds; corner order is re-normalized so
    /// the result is never inverted.
    #[must_use]
    pub fn with_padding(&self, padding: f64) -> Self {
        Self::new(
            GeoPoint::new(self.southwest.lat - padding, self.southwest.lng - padding),
            GeoPoint::new(self.northeast.lat + padding, self.northeast.lng + padding),
        )
    }

    /// Returns the latitude span in degrees.
    #[must_use]
    pub fn lat_span(&self) -> f64 {
        self.northeast.lat - self.southwest.lat
    }

    /// Returns the longitude span in degrees.
    #[must_use]
    pub fn lng_span(&self) -> f64 {
        self.northeast.lng - self.southwest.lng
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoBounds, GeoPoint};

    #[test]
    fn new_normalizes_corner_order() {
        let b = GeoBounds::new(GeoPoint::new(2.0, 3.0), GeoPoint::new(-1.0, -4.0));
        assert_eq!(b.southwest(), GeoPoint::new(-1.0, -4.0));
        assert_eq!(b.northeast(), GeoPoint::new(2.0, 3.0));
    }

    #[test]
    fn from_points_handles_degenerate_inputs() {
        let empty = GeoBounds::from_points(&[]);
        assert_eq!(empty.southwest(), empty.northeast());

        let single = GeoBounds::from_points(&[GeoPoint::new(1.0, 2.0)]);
        assert_eq!(single.southwest(), GeoPoint::new(1.0, 2.0));
        assert_eq!(single.northeast(), GeoPoint::new(1.0, 2.0));
    }

    #[test]
    fn from_points_covers_all_points() {
        let pts = [
            GeoPoint::new(0.5, -1.0),
            GeoPoint::new(-0.25, 2.0),
            GeoPoint::new(0.75, 0.0),
        ];
        let b = GeoBounds::from_points(&pts);
        for p in pts {
            assert!(b.contains(p), "bounds should contain {p:?}");
        }
        assert_eq!(b.southwest(), GeoPoint::new(-0.25, -1.0));
        assert_eq!(b.northeast(), GeoPoint::new(0.75, 2.0));
    }

    #[test]
    fn center_and_spans() {
        let b = GeoBounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(2.0, 4.0));
        assert_eq!(b.center(), GeoPoint::new(1.0, 2.0));
        assert_eq!(b.lat_span(), 2.0);
        assert_eq!(b.lng_span(), 4.0);
    }

    #[test]
    fn padding_expands_every_side() {
        let b = GeoBounds::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)).with_padding(0.5);
        assert_eq!(b.southwest(), GeoPoint::new(-0.5, -0.5));
        assert_eq!(b.northeast(), GeoPoint::new(1.5, 1.5));
    }
}
