//! Conversion between the GCJ-02 and BD-09 obfuscated coordinate systems.
//!
//! Both directions are the widely published approximations. They are not
//! algebraic inverses of each other and their offsets are applied in a
//! different order, so a round trip drifts by a few millionths of a degree.

use std::f64::consts::PI;

use geo_types::Coord;
use serde::{Deserialize, Serialize};

const X_PI: f64 = PI * 3000.0 / 180.0;

/// Obfuscated coordinate systems used by Chinese map providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordSystem {
    /// "Mars" coordinates used by most domestic map providers.
    Gcj02,
    /// Baidu coordinates, layered on top of GCJ-02.
    Bd09,
}

/// Converts a GCJ-02 coordinate to BD-09.
pub fn gcj02_to_bd09(lon: f64, lat: f64) -> Coord<f64> {
    let z = (lon * lon + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lon) + 0.000003 * (lon * X_PI).cos();

    Coord {
        x: z * theta.cos() + 0.0065,
        y: z * theta.sin() + 0.006,
    }
}

/// Converts a BD-09 coordinate to GCJ-02.
///
/// The formula reads its first argument as the northing: it subtracts the
/// latitude offset (0.006) from `lon` and measures the angle from `lat`.
/// To undo [`gcj02_to_bd09`], pass the BD-09 point as `(bd.y, bd.x)`;
/// [`convert`] does that for you.
pub fn bd09_to_gcj02(lon: f64, lat: f64) -> Coord<f64> {
    let lon = lon - 0.006;
    let lat = lat - 0.0065;
    let z = (lat * lat + lon * lon).sqrt() - 0.00002 * (lon * X_PI).sin();
    let theta = lon.atan2(lat) - 0.000003 * (lat * X_PI).cos();

    Coord {
        x: z * theta.cos(),
        y: z * theta.sin(),
    }
}

/// Converts `coord` (`x` = longitude, `y` = latitude) between systems.
pub fn convert(coord: Coord<f64>, from: CoordSystem, to: CoordSystem) -> Coord<f64> {
    match (from, to) {
        (CoordSystem::Gcj02, CoordSystem::Bd09) => gcj02_to_bd09(coord.x, coord.y),
        (CoordSystem::Bd09, CoordSystem::Gcj02) => bd09_to_gcj02(coord.y, coord.x),
        _ => coord,
    }
}
