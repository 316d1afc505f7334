//! Intents emitted by the bottom bar.
//!
//! DESIGN
//! ======
//! The bar never writes shared state. Handlers and lifecycle hooks return
//! these values and the host applies them through `AppState::dispatch`.

use crate::state::mouse_position::Position;

/// A request to change shared viewer state.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Change mouse-position tracking (CRS, enabled flag, tracked position).
    SetMousePositionTracking(MousePositionChange),
    /// Zoom the map to the scale at `index` in the scale list.
    SetZoomLevel { index: usize },
}

/// Partial update of the mouse-position state. `None` fields are left as-is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MousePositionChange {
    pub crs: Option<String>,
    pub enabled: Option<bool>,
    /// `Some(None)` clears the tracked position.
    pub position: Option<Option<Position>>,
}

impl Intent {
    /// Start tracking in `crs`.
    pub fn track(crs: impl Into<String>) -> Self {
        Self::SetMousePositionTracking(MousePositionChange {
            crs: Some(crs.into()),
            enabled: Some(true),
            position: None,
        })
    }

    /// Switch tracking to `crs` and drop the stale position.
    pub fn retrack(crs: impl Into<String>) -> Self {
        Self::SetMousePositionTracking(MousePositionChange {
            crs: Some(crs.into()),
            enabled: None,
            position: Some(None),
        })
    }

    /// Change only the display CRS of the readout.
    pub fn display_crs(crs: impl Into<String>) -> Self {
        Self::SetMousePositionTracking(MousePositionChange {
            crs: Some(crs.into()),
            ..MousePositionChange::default()
        })
    }

    pub fn zoom(index: usize) -> Self {
        Self::SetZoomLevel { index }
    }
}
