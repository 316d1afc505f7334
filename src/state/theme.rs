//! Active theme state.

/// Theme slice of the viewer store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemeState {
    pub current: Option<Theme>,
}

/// A loaded map theme.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Theme {
    pub id: String,
    /// Extra CRS codes offered in the mouse-position selector for this theme.
    pub additional_mouse_crs: Option<Vec<String>>,
}

impl ThemeState {
    pub fn current_id(&self) -> Option<String> {
        self.current.as_ref().map(|t| t.id.clone())
    }

    pub fn additional_mouse_crs(&self) -> Vec<String> {
        self.current
            .as_ref()
            .and_then(|t| t.additional_mouse_crs.clone())
            .unwrap_or_default()
    }
}
