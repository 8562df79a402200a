//! Integration tests for the public geo API.
//!
//! These exercise distance, range and coordinate conversion together the way
//! a "nearby stores" query would use them.

use backend_helpers::geo::{self, BoundingBox, CoordSystem, DistanceUnit};
use geo_types::Coord;

const STORES: &[(&str, f64, f64)] = &[
    ("Wangfujing", 116.410886, 39.913164),
    ("Sanlitun", 116.454907, 39.937121),
    ("Zhongguancun", 116.316833, 39.982540),
    ("Tianjin", 117.200983, 39.084158),
];

#[test]
fn test_nearby_query_with_range_prefilter() {
    let (lon, lat) = (116.404, 39.915);
    let radius_m = 3_000.0;
    let bbox: BoundingBox = geo::bounding_box(lon, lat, radius_m);

    let nearby: Vec<&str> = STORES
        .iter()
        .filter(|(_, s_lon, s_lat)| bbox.contains(Coord { x: *s_lon, y: *s_lat }))
        .filter(|(_, s_lon, s_lat)| {
            geo::distance(lon, lat, *s_lon, *s_lat, DistanceUnit::Meters) <= radius_m
        })
        .map(|(name, _, _)| *name)
        .collect();

    assert_eq!(nearby, vec!["Wangfujing"]);
}

#[test]
fn test_range_covers_radius_along_axes() {
    let (lon, lat) = (121.4737, 31.2304);
    let radius_m = 2_000.0;
    let bbox = geo::bounding_box(lon, lat, radius_m);

    // The box edges sit roughly one radius away from the center.
    let north = geo::distance(lon, lat, lon, bbox.max_lat, DistanceUnit::Meters);
    let east = geo::distance(lon, lat, bbox.max_lon, lat, DistanceUnit::Meters);
    assert!((north - radius_m).abs() < 20.0, "north edge at {} m", north);
    assert!((east - radius_m).abs() < 20.0, "east edge at {} m", east);
}

#[test]
fn test_distance_units_agree() {
    for (_, s_lon, s_lat) in STORES {
        let km = geo::distance(116.404, 39.915, *s_lon, *s_lat, DistanceUnit::Kilometers);
        let m = geo::distance(116.404, 39.915, *s_lon, *s_lat, DistanceUnit::Meters);
        assert_eq!(km, m / 1000.0);
        assert_eq!(
            m,
            geo::distance(*s_lon, *s_lat, 116.404, 39.915, DistanceUnit::Meters)
        );
    }
}

#[test]
fn test_baidu_round_trip_residual() {
    for (_, s_lon, s_lat) in STORES {
        let gcj = Coord { x: *s_lon, y: *s_lat };
        let bd = geo::convert(gcj, CoordSystem::Gcj02, CoordSystem::Bd09);
        let back = geo::convert(bd, CoordSystem::Bd09, CoordSystem::Gcj02);

        // BD-09 is offset by hundreds of meters, the round trip by well under one.
        assert!(geo::distance_between(gcj, bd, DistanceUnit::Meters) > 100.0);
        assert!((back.x - gcj.x).abs() < 1e-4);
        assert!((back.y - gcj.y).abs() < 1e-4);
    }
}
