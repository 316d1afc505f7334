//! Selection of the CRSs offered by the mouse-position selector.

#[cfg(test)]
#[path = "crs_filter_test.rs"]
mod crs_filter_test;

use super::crs::{CrsDef, CrsRegistry, WGS84};

/// Registry entries relevant to the current view: WGS 84, the map
/// projection, and any theme-specific extras, in registry order.
///
/// Codes missing from the registry are skipped.
pub fn available_crs<'a>(registry: &'a CrsRegistry, map_crs: &str, additional: &[String]) -> Vec<&'a CrsDef> {
    registry
        .iter()
        .filter(|def| def.code == WGS84 || def.code == map_crs || additional.iter().any(|c| *c == def.code))
        .collect()
}
