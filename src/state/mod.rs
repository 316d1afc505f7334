//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`map`, `theme`, `display`, `mouse_position`)
//! so readers can depend on small focused models. `AppState` aggregates the
//! slices into the single store that view models are derived from and that
//! intents are applied to.


pub mod display;
pub mod map;
pub mod mouse_position;
pub mod theme;

use crate::intent::Intent;

use self::display::DisplayState;
use self::map::MapState;
use self::mouse_position::MousePositionState;
use self::theme::ThemeState;

/// Viewer store holding every slice the bottom bar reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub map: MapState,
    pub theme: ThemeState,
    pub display: DisplayState,
    pub mouse_position: MousePositionState,
}

impl AppState {
    /// Apply an intent emitted by a component.
    pub fn dispatch(&mut self, intent: &Intent) {
        match intent {
            Intent::SetMousePositionTracking(change) => {
                mouse_position::reduce(&mut self.mouse_position, change);
            }
            Intent::SetZoomLevel { index } => self.map.set_zoom(*index),
        }
    }
}
