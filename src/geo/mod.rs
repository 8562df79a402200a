//! Geographic distance, range and coordinate-system helpers.
//!
//! Coordinates are `geo_types::Coord<f64>` with `x` as longitude and `y` as
//! latitude, both in decimal degrees. Nothing here validates ranges: NaN and
//! infinities flow through the formulas untouched.

mod distance;
mod projection;
mod range;

pub use distance::{distance, distance_between, DistanceUnit, EARTH_RADIUS_KM};
pub use projection::{bd09_to_gcj02, convert, gcj02_to_bd09, CoordSystem};
pub use range::{bounding_box, BoundingBox, METERS_PER_DEGREE};

/// π truncated to 13 decimals. Distances and ranges are pinned to outputs
/// computed with this value.
#[allow(clippy::approx_constant)]
pub(crate) const REFERENCE_PI: f64 = 3.1415926535898;
