//! Root application component with context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::bottom_bar::BottomBar;
use crate::components::map_surface::MapSurface;
use crate::config::BottomBarConfig;
use crate::intent::Intent;
use crate::state::AppState;
use crate::state::map::MapState;
use crate::util::crs::{CrsRegistry, WEB_MERCATOR};
use crate::util::i18n::Messages;
use crate::util::locale::NumberFormat;

/// Plugin entry for the bottom bar in the bundled viewer config.
const BOTTOM_BAR_PLUGIN: &str = r#"{"name": "BottomBar", "cfg": {"termsUrl": "/terms.html"}}"#;

/// Scale denominators offered by the bundled viewer, most zoomed-out first.
const VIEWER_SCALES: [f64; 11] =
    [1_000_000.0, 500_000.0, 250_000.0, 100_000.0, 50_000.0, 25_000.0, 10_000.0, 5_000.0, 2_500.0, 1_000.0, 500.0];

/// Initial view center (Bern) in Web Mercator meters.
const VIEWER_CENTER: (f64, f64) = (829_040.8, 5_933_590.5);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Initial viewer store: Web Mercator map over Bern at the widest scale.
pub fn initial_state() -> AppState {
    AppState {
        map: MapState {
            projection: Some(WEB_MERCATOR.to_owned()),
            zoom: Some(0),
            scales: VIEWER_SCALES.to_vec(),
            center: Some(VIEWER_CENTER),
        },
        ..AppState::default()
    }
}

/// Load the bottom bar config, falling back to no footer links.
pub fn load_bottom_bar_config(raw: &str) -> BottomBarConfig {
    match BottomBarConfig::from_plugin_json(raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            leptos::logging::warn!("bottom bar config ignored: {e}");
            BottomBarConfig::default()
        }
    }
}

/// Root application component.
///
/// Provides the viewer store and the bar's collaborators, and applies the
/// bar's intents to the store.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(initial_state());
    provide_context(store);
    provide_context(CrsRegistry::default());
    provide_context(Messages::default());
    provide_context(NumberFormat::default());

    let config = load_bottom_bar_config(BOTTOM_BAR_PLUGIN);
    let on_intent = Callback::new(move |intent: Intent| store.update(|s| s.dispatch(&intent)));

    view! {
        <Stylesheet id="leptos" href="/pkg/bottombar.css"/>
        <Title text="Map Viewer"/>

        <MapSurface/>
        <BottomBar config=config on_intent=on_intent/>
    }
}
