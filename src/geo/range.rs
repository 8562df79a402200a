//! Square search range around a center point.

use geo_types::{Coord, Rect};
use serde::{Deserialize, Serialize};

use super::REFERENCE_PI;

/// Meters per degree of latitude: a 24901 mile circumference at 1609 m/mile.
pub const METERS_PER_DEGREE: f64 = (24901 * 1609) as f64 / 360.0;

/// Latitude/longitude limits of a search range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Total latitude extent in degrees.
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Total longitude extent in degrees.
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Checks whether a coordinate lies inside the box, edges included.
    pub fn contains(&self, coord: Coord<f64>) -> bool {
        coord.x >= self.min_lon
            && coord.x <= self.max_lon
            && coord.y >= self.min_lat
            && coord.y <= self.max_lat
    }
}

impl From<BoundingBox> for Rect<f64> {
    fn from(bbox: BoundingBox) -> Self {
        Rect::new(
            Coord {
                x: bbox.min_lon,
                y: bbox.min_lat,
            },
            Coord {
                x: bbox.max_lon,
                y: bbox.max_lat,
            },
        )
    }
}

/// Bounding box of a circle of `radius_m` meters around (`lon`, `lat`).
///
/// Uses a flat-Earth approximation. Longitude degrees shrink with
/// `cos(lat)`, so the longitude span grows without bound toward the poles
/// and is infinite at exactly ±90°.
pub fn bounding_box(lon: f64, lat: f64, radius_m: f64) -> BoundingBox {
    let degrees_per_meter_lat = 1.0 / METERS_PER_DEGREE;
    let lat_span = degrees_per_meter_lat * radius_m;

    let meters_per_degree_lon = METERS_PER_DEGREE * (lat * (REFERENCE_PI / 180.0)).cos();
    let degrees_per_meter_lon = 1.0 / meters_per_degree_lon;
    let lon_span = degrees_per_meter_lon * radius_m;

    BoundingBox {
        min_lat: lat - lat_span,
        max_lat: lat + lat_span,
        min_lon: lon - lon_span,
        max_lon: lon + lon_span,
    }
}
