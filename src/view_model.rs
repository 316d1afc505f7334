//! Derivation of the bottom bar's inputs from the viewer store.
//!
//! DESIGN
//! ======
//! `derive_view_model` is a plain projection of `AppState`. The store changes
//! on every pointer move while tracking is on, so `ViewModelSelector` keeps
//! the last input/output pair and skips re-deriving when the slices the bar
//! reads are unchanged.

#[cfg(test)]
#[path = "view_model_test.rs"]
mod view_model_test;

use crate::state::AppState;
use crate::state::map::MapState;
use crate::state::mouse_position::MousePositionState;
use crate::state::theme::ThemeState;
use crate::util::crs::{WEB_MERCATOR, WGS84};

/// Everything the bottom bar renders from, apart from its plugin config.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    /// CRS of the coordinate readout.
    pub display_crs: String,
    /// Projection of the map.
    pub map_crs: String,
    /// Index into `map_scales` of the current zoom level.
    pub map_scale: usize,
    pub map_scales: Vec<f64>,
    pub active_theme_id: Option<String>,
    pub fullscreen: bool,
    pub additional_mouse_crs: Vec<String>,
}

/// CRS the readout is shown in: the tracked CRS, else the map projection,
/// else WGS 84.
pub fn display_crs(mouse_position: &MousePositionState, map: &MapState) -> String {
    mouse_position
        .crs
        .clone()
        .or_else(|| map.projection.clone())
        .unwrap_or_else(|| WGS84.to_owned())
}

/// Project the viewer store onto the bar's view model.
pub fn derive_view_model(state: &AppState) -> ViewModel {
    ViewModel {
        display_crs: display_crs(&state.mouse_position, &state.map),
        map_crs: state.map.projection.clone().unwrap_or_else(|| WEB_MERCATOR.to_owned()),
        map_scale: state.map.zoom.unwrap_or(0),
        map_scales: state.map.scales.clone(),
        active_theme_id: state.theme.current_id(),
        fullscreen: state.display.fullscreen,
        additional_mouse_crs: state.theme.additional_mouse_crs(),
    }
}

/// The store slices a view model depends on.
#[derive(Clone, Debug, PartialEq)]
struct SelectorInput {
    map: MapState,
    theme: ThemeState,
    fullscreen: bool,
    mouse_crs: Option<String>,
}

impl SelectorInput {
    fn from_state(state: &AppState) -> Self {
        Self {
            map: state.map.clone(),
            theme: state.theme.clone(),
            fullscreen: state.display.fullscreen,
            mouse_crs: state.mouse_position.crs.clone(),
        }
    }
}

/// Single-entry memo over [`derive_view_model`].
#[derive(Clone, Debug, Default)]
pub struct ViewModelSelector {
    last: Option<(SelectorInput, ViewModel)>,
    derivations: u64,
}

impl ViewModelSelector {
    /// Return the cached view model if the relevant slices are unchanged,
    /// otherwise derive and cache a new one.
    pub fn select(&mut self, state: &AppState) -> ViewModel {
        let input = SelectorInput::from_state(state);
        if let Some((last_input, last_output)) = &self.last {
            if *last_input == input {
                return last_output.clone();
            }
        }
        let output = derive_view_model(state);
        self.derivations += 1;
        self.last = Some((input, output.clone()));
        output
    }

    /// Number of times the view model was actually derived.
    pub fn derivations(&self) -> u64 {
        self.derivations
    }
}
