//! Point reprojection between WGS 84 and spherical Web Mercator.
//!
//! Only the pair the viewer switches between by default is supported; any
//! other combination returns `None` and the readout stays blank.

#[cfg(test)]
#[path = "reproject_test.rs"]
mod reproject_test;

use super::crs::{WEB_MERCATOR, WGS84};

const EARTH_RADIUS_M: f64 = 6_378_137.0;
const MAX_MERCATOR_LAT_DEG: f64 = 85.051_128_779_806_59;

/// Reproject `(x, y)` from `from` to `to`.
pub fn reproject(x: f64, y: f64, from: &str, to: &str) -> Option<(f64, f64)> {
    match (from, to) {
        _ if from == to => Some((x, y)),
        (WGS84, WEB_MERCATOR) => Some(lonlat_to_mercator(x, y)),
        (WEB_MERCATOR, WGS84) => Some(mercator_to_lonlat(x, y)),
        _ => None,
    }
}

fn lonlat_to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_MERCATOR_LAT_DEG, MAX_MERCATOR_LAT_DEG);
    let x = EARTH_RADIUS_M * lon.to_radians();
    let y = EARTH_RADIUS_M * (std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
    (x, y)
}

fn mercator_to_lonlat(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS_M).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS_M).exp().atan() - std::f64::consts::FRAC_PI_2).to_degrees();
    (lon, lat)
}
