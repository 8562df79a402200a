//! Great-circle distance between two coordinates.

use geo_types::Coord;
use serde::{Deserialize, Serialize};

use super::REFERENCE_PI;

/// Equatorial radius used for the haversine sphere.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Unit of a returned distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Meters,
}

/// Haversine distance between (`lon1`, `lat1`) and (`lon2`, `lat2`).
///
/// The distance is rounded to whole meters before it is converted to the
/// requested unit, so kilometer results always carry at most three decimals
/// and `Kilometers` is exactly `Meters / 1000`.
pub fn distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64, unit: DistanceUnit) -> f64 {
    let deg_to_rad = REFERENCE_PI / 180.0;

    let rad_lat1 = lat1 * deg_to_rad;
    let rad_lat2 = lat2 * deg_to_rad;
    let a = rad_lat1 - rad_lat2;
    let b = lon1 * deg_to_rad - lon2 * deg_to_rad;

    let haversine =
        (a / 2.0).sin().powi(2) + rad_lat1.cos() * rad_lat2.cos() * (b / 2.0).sin().powi(2);
    let central_angle = 2.0 * haversine.sqrt().asin();

    let meters = (central_angle * EARTH_RADIUS_KM * 1000.0).round();

    match unit {
        DistanceUnit::Kilometers => meters / 1000.0,
        DistanceUnit::Meters => meters,
    }
}

/// [`distance`] over two `Coord`s (`x` = longitude, `y` = latitude).
pub fn distance_between(from: Coord<f64>, to: Coord<f64>, unit: DistanceUnit) -> f64 {
    distance(from.x, from.y, to.x, to.y, unit)
}
