//! Map view state: projection, zoom index, and the scale list.

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;

/// Current map view as seen by chrome components.
///
/// `projection` and `zoom` are optional because the host may not have
/// configured a map yet; readers apply their own defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapState {
    pub projection: Option<String>,
    /// Index into `scales`.
    pub zoom: Option<usize>,
    /// Scale denominators, most zoomed-out first.
    pub scales: Vec<f64>,
    /// View center in map coordinates.
    pub center: Option<(f64, f64)>,
}

impl MapState {
    /// Set the zoom index, clamped to the last available scale.
    pub fn set_zoom(&mut self, index: usize) {
        let max = self.scales.len().saturating_sub(1);
        self.zoom = Some(index.min(max));
    }

    /// Scale denominator at the current zoom index, if any.
    pub fn current_scale(&self) -> Option<f64> {
        self.scales.get(self.zoom.unwrap_or(0)).copied()
    }
}
