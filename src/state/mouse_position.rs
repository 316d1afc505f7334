//! Mouse-position tracking state and its reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The map surface writes `position` as the pointer moves while tracking is
//! enabled. The bottom bar owns this slice: it is the only producer of
//! tracking intents, and `reduce` is the reducer it contributes to the
//! viewer store.

#[cfg(test)]
#[path = "mouse_position_test.rs"]
mod mouse_position_test;

use crate::intent::MousePositionChange;

/// Cursor position in map coordinates of `crs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub crs: String,
}

/// Mouse-position slice of the viewer store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MousePositionState {
    pub enabled: bool,
    /// CRS the readout is displayed in.
    pub crs: Option<String>,
    pub position: Option<Position>,
}

/// Merge a tracking change into the state. Absent fields keep their value.
pub fn reduce(state: &mut MousePositionState, change: &MousePositionChange) {
    if let Some(crs) = &change.crs {
        state.crs = Some(crs.clone());
    }
    if let Some(enabled) = change.enabled {
        state.enabled = enabled;
    }
    if let Some(position) = &change.position {
        state.position.clone_from(position);
    }
}

impl MousePositionState {
    /// Record a pointer move. Ignored while tracking is disabled.
    pub fn record(&mut self, position: Position) {
        if self.enabled {
            self.position = Some(position);
        }
    }
}
