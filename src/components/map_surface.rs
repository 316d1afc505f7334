//! Map surface that feeds pointer moves into mouse-position tracking.
//!
//! SYSTEM CONTEXT
//! ==============
//! The viewer's real map renderer owns this element in production. The
//! surface here only maps pointer offsets to map coordinates from the view
//! center and current scale, which is all the coordinate readout needs.

#[cfg(test)]
#[path = "map_surface_test.rs"]
mod map_surface_test;

use leptos::prelude::*;

use crate::state::AppState;
use crate::state::map::MapState;
use crate::state::mouse_position::Position;
use crate::util::crs::{CrsRegistry, CrsUnits, WEB_MERCATOR};

/// Standard rendering pixel size (0.28 mm) in meters.
pub const PIXEL_SIZE_M: f64 = 0.000_28;
/// Meters per degree at the equator on the WGS 84 sphere.
const METERS_PER_DEGREE: f64 = 111_319.490_793_273_57;

/// Map element. Records the cursor position while tracking is enabled.
#[component]
pub fn MapSurface() -> impl IntoView {
    let store = expect_context::<RwSignal<AppState>>();
    let registry = use_context::<CrsRegistry>().unwrap_or_default();

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        let surface = event_target::<leptos::web_sys::Element>(&ev);
        let offset = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        let size = (f64::from(surface.client_width()), f64::from(surface.client_height()));
        let position = store.with_untracked(|state| {
            if !state.mouse_position.enabled {
                return None;
            }
            let units = registry.units(state.map.projection.as_deref().unwrap_or(WEB_MERCATOR));
            pointer_position(&state.map, units, offset, size)
        });
        if let Some(position) = position {
            store.update(|state| state.mouse_position.record(position));
        }
    };

    view! { <div id="map" class="map" on:pointermove=on_pointer_move></div> }
}

/// Map units per screen pixel at `scale`.
pub fn resolution(scale: f64, units: CrsUnits) -> f64 {
    let meters = scale * PIXEL_SIZE_M;
    match units {
        CrsUnits::Meters => meters,
        CrsUnits::Degrees => meters / METERS_PER_DEGREE,
    }
}

/// Map coordinates under a pointer at `offset` on a surface of `size`
/// pixels. `None` until the map has a projection, center, and scale.
pub fn pointer_position(map: &MapState, units: CrsUnits, offset: (f64, f64), size: (f64, f64)) -> Option<Position> {
    let crs = map.projection.clone()?;
    let (cx, cy) = map.center?;
    let res = resolution(map.current_scale()?, units);
    Some(Position { x: cx + (offset.0 - size.0 / 2.0) * res, y: cy - (offset.1 - size.1 / 2.0) * res, crs })
}
