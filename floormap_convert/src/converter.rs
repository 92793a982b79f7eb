// Copyright 2026 the Floormap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between meter, pixel, and geographic coordinate spaces.

use core::fmt;

use kurbo::Point;

use crate::floor::FloorMetadata;
use crate::geo::GeoPoint;

/// Mean earth radius used by the geographic projection, in meters.
const EARTH_RADIUS: f64 = 6_378_137.0;

/// Meters spanned by one degree of the geographic projection.
///
/// One full circumference divided over 360 degrees. The projection is a
/// linear offset from the floor's origin anchor, so the factor is identical
/// on both axes and conversions invert exactly.
pub const METERS_PER_DEGREE: f64 = 2.0 * core::f64::consts::PI * EARTH_RADIUS / 360.0;

/// Error returned when a converter is requested for unusable floor metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConvertError {
    /// The floor's `pixels_per_meter` scale is zero, negative, or not finite.
    ///
    /// Conversions with such a scale would produce `NaN` or infinite
    /// coordinates, so construction fails instead.
    InvalidScale {
        /// The rejected scale value.
        scale: f64,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "floor scale must be finite and positive, got {scale}")
            }
        }
    }
}

impl core::error::Error for ConvertError {}

/// Converter between the three coordinate spaces of one floor.
///
/// The converter owns a validated copy of the floor's metadata. Meter space
/// is y-up with its origin at the floor's bottom-left corner; pixel space is
/// y-down, so point conversions flip the y axis against the floor height
/// whenever the floor has one. Geographic conversions offset linearly from
/// the floor's origin anchor by [`METERS_PER_DEGREE`].
///
/// All methods are pure: the same input always yields the same output, and
/// nothing is retained from callers.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateConverter {
    meta: FloorMetadata,
}

impl CoordinateConverter {
    /// Creates a converter for the given floor.
    ///
    /// # Errors
    ///
    /// [`ConvertError::InvalidScale`] if `meta.pixels_per_meter` is zero,
    /// negative, or not finite. A converter that exists is always safe to
    /// call.
    pub fn new(meta: FloorMetadata) -> Result<Self, ConvertError> {
        let scale = meta.pixels_per_meter;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConvertError::InvalidScale { scale });
        }
        Ok(Self { meta })
    }

    /// Returns the floor metadata this converter was built from.
    #[must_use]
    pub fn metadata(&self) -> &FloorMetadata {
        &self.meta
    }

    /// Returns the floor height in pixels.
    #[must_use]
    pub fn height_in_pixels(&self) -> f64 {
        self.meters_to_pixels(self.meta.height)
    }

    /// Converts a scalar distance in meters to pixels.
    #[must_use]
    pub fn meters_to_pixels(&self, value: f64) -> f64 {
        value * self.meta.pixels_per_meter
    }

    /// Converts a scalar distance in pixels to meters.
    #[must_use]
    pub fn pixels_to_meters(&self, value: f64) -> f64 {
        value / self.meta.pixels_per_meter
    }

    /// Converts a scalar distance in meters to projection degrees.
    #[must_use]
    pub fn meters_to_degrees(&self, value: f64) -> f64 {
        value / METERS_PER_DEGREE
    }

    /// Converts a scalar distance in projection degrees to meters.
    #[must_use]
    pub fn degrees_to_meters(&self, value: f64) -> f64 {
        value * METERS_PER_DEGREE
    }

    /// Converts a point from meter space to pixel space.
    ///
    /// The y axis is flipped against the floor height; floors without a
    /// height keep y as-is.
    #[must_use]
    pub fn meter_point_to_pixel(&self, point: Point) -> Point {
        let y = if self.meta.height > 0.0 {
            self.meta.height - point.y
        } else {
            point.y
        };
        Point::new(self.meters_to_pixels(point.x), self.meters_to_pixels(y))
    }

    /// Converts a point from pixel space to meter space.
    ///
    /// Exact inverse of [`CoordinateConverter::meter_point_to_pixel`].
    #[must_use]
    pub fn pixel_point_to_meter(&self, point: Point) -> Point {
        let height = self.height_in_pixels();
        let y = if height > 0.0 { height - point.y } else { point.y };
        Point::new(self.pixels_to_meters(point.x), self.pixels_to_meters(y))
    }

    /// Converts a point in meter space to a geographic coordinate.
    ///
    /// The floor's meter origin maps to its geographic origin anchor; x
    /// offsets longitude, y offsets latitude.
    #[must_use]
    pub fn meter_point_to_geo(&self, point: Point) -> GeoPoint {
        let origin = self.meta.origin;
        GeoPoint::new(
            origin.lat + self.meters_to_degrees(point.y),
            origin.lng + self.meters_to_degrees(point.x),
        )
    }

    /// Converts a geographic coordinate back to meter space.
    ///
    /// Exact inverse of [`CoordinateConverter::meter_point_to_geo`].
    #[must_use]
    pub fn geo_to_meter_point(&self, geo: GeoPoint) -> Point {
        let origin = self.meta.origin;
        Point::new(
            self.degrees_to_meters(geo.lng - origin.lng),
            self.degrees_to_meters(geo.lat - origin.lat),
        )
    }

    /// Converts a point in pixel space to a geographic coordinate.
    #[must_use]
    pub fn pixel_point_to_geo(&self, point: Point) -> GeoPoint {
        self.meter_point_to_geo(self.pixel_point_to_meter(point))
    }
}
