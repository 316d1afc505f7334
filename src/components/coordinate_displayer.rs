//! Read-only readout of the tracked cursor position.

#[cfg(test)]
#[path = "coordinate_displayer_test.rs"]
mod coordinate_displayer_test;

use leptos::prelude::*;

use crate::state::AppState;
use crate::state::mouse_position::Position;
use crate::util::crs::CrsRegistry;
use crate::util::locale::NumberFormat;
use crate::util::reproject::reproject;

/// Cursor coordinates shown in `display_crs`.
///
/// Reads the tracked position straight from the store so pointer moves do
/// not re-render the rest of the bar.
#[component]
pub fn CoordinateDisplayer(#[prop(into)] display_crs: String) -> impl IntoView {
    let store = expect_context::<RwSignal<AppState>>();
    let registry = use_context::<CrsRegistry>().unwrap_or_default();
    let format = use_context::<NumberFormat>().unwrap_or_default();

    let text = move || {
        store.with(|state| format_position(state.mouse_position.position.as_ref(), &display_crs, &registry, &format))
    };

    view! {
        <input class="coordinatedisplayer" type="text" readonly=true prop:value=text/>
    }
}

/// Format `position` in `display_crs`, or an empty string when there is no
/// position or it cannot be reprojected.
pub fn format_position(
    position: Option<&Position>,
    display_crs: &str,
    registry: &CrsRegistry,
    format: &NumberFormat,
) -> String {
    let Some(position) = position else {
        return String::new();
    };
    let Some((x, y)) = reproject(position.x, position.y, &position.crs, display_crs) else {
        return String::new();
    };
    let digits = registry.units(display_crs).display_decimals();
    format!("{} {}", format.to_locale_fixed(x, digits), format.to_locale_fixed(y, digits))
}
