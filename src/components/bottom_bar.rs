//! Bottom status bar with cursor readout, CRS selector, scale selector, and
//! footer links.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar renders from a [`ViewModel`] derived from the viewer store and
//! never writes the store itself. Mount, projection changes, and selector
//! input produce [`Intent`] values handed to the `on_intent` callback.
//!
//! The lifecycle and layout logic lives in plain functions
//! ([`on_attach`], [`on_view_change`], [`layout`]) so it can be exercised
//! without a reactive runtime. The component only wires them to signals.

#[cfg(test)]
#[path = "bottom_bar_test.rs"]
mod bottom_bar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::coordinate_displayer::CoordinateDisplayer;
use crate::config::BottomBarConfig;
use crate::error::BottomBarError;
use crate::intent::Intent;
use crate::state::AppState;
use crate::util::crs::CrsRegistry;
use crate::util::crs_filter::available_crs;
use crate::util::i18n::{MOUSEPOS_LABEL, Messages, SCALE_LABEL, TERMS_LABEL, VIEWERTITLE_LABEL};
use crate::util::locale::NumberFormat;
use crate::view_model::{ViewModel, ViewModelSelector, derive_view_model};

pub const FOOTER_SEPARATOR: &str = " | ";

/// Bottom bar of the map viewer.
///
/// Renders nothing while the viewer is fullscreen.
#[component]
pub fn BottomBar(
    #[prop(optional)] config: BottomBarConfig,
    on_intent: Callback<Intent>,
) -> impl IntoView {
    let store = expect_context::<RwSignal<AppState>>();
    let registry = use_context::<CrsRegistry>().unwrap_or_default();
    let messages = use_context::<Messages>().unwrap_or_default();
    let format = use_context::<NumberFormat>().unwrap_or_default();

    let selector = StoredValue::new(ViewModelSelector::default());
    let view_model = Memo::new(move |_| {
        store.with(|state| {
            selector
                .try_update_value(|s| s.select(state))
                .unwrap_or_else(|| derive_view_model(state))
        })
    });

    // Mount and projection-change tracking.
    let last_view = StoredValue::new(None::<ViewModel>);
    Effect::new(move || {
        let current = view_model.get();
        let intents = match last_view.get_value() {
            None => on_attach(&current),
            Some(previous) => on_view_change(&previous, &current),
        };
        last_view.set_value(Some(current));
        for intent in intents {
            leptos::logging::log!("bottom bar: {intent:?}");
            on_intent.run(intent);
        }
    });

    let bar = Memo::new(move |_| layout(&view_model.get(), &config, &registry, &messages, &format));

    move || bar.get().map(|bar| render_bar(bar, on_intent))
}

fn render_bar(bar: BottomBarLayout, on_intent: Callback<Intent>) -> impl IntoView {
    let BottomBarLayout { mousepos_label, display_crs, crs_options, scale_label, scale_options, selected_scale, footer } =
        bar;

    let on_crs_change = move |ev: leptos::ev::Event| on_intent.run(on_crs_selected(event_target_value(&ev)));
    let on_scale_change = move |ev: leptos::ev::Event| match on_scale_selected(&event_target_value(&ev)) {
        Ok(intent) => on_intent.run(intent),
        Err(e) => leptos::logging::warn!("bottom bar: {e}"),
    };

    let crs_value = display_crs.clone();
    let scale_value = selected_scale.clone();

    view! {
        <div id="BottomBar" class="bottom-bar">
            <span class="mousepos_label">{format!("{mousepos_label}: ")}</span>
            <CoordinateDisplayer display_crs=display_crs.clone()/>
            <select class="bottombar-crs-selector" prop:value=crs_value on:change=on_crs_change>
                {crs_options
                    .into_iter()
                    .map(|opt| {
                        let selected = opt.value == display_crs;
                        view! { <option value=opt.value selected=selected>{opt.label}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <span class="scale_label">{format!("{scale_label}: ")}</span>
            <select class="bottombar-scale-selector" prop:value=scale_value on:change=on_scale_change>
                {scale_options
                    .into_iter()
                    .map(|opt| {
                        let selected = opt.value == selected_scale;
                        view! { <option value=opt.value selected=selected>{opt.label}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
            {footer.map(render_footer)}
        </div>
    }
}

fn render_footer(items: Vec<FooterItem>) -> impl IntoView {
    view! {
        <span class="bottomlinks">
            {items
                .into_iter()
                .map(|item| match item {
                    FooterItem::Link(link) => view! {
                        <a href=link.href target="_blank" rel="noopener noreferrer">
                            <span class=link.class>{link.label}</span>
                        </a>
                    }
                    .into_any(),
                    FooterItem::Separator => FOOTER_SEPARATOR.into_any(),
                })
                .collect::<Vec<_>>()}
        </span>
    }
}

// =============================================================
// Lifecycle
// =============================================================

/// Intents issued when the bar is first attached: start tracking in the
/// map projection.
pub fn on_attach(view: &ViewModel) -> Vec<Intent> {
    vec![Intent::track(view.map_crs.clone())]
}

/// Intents issued when the view model changes. A new map projection
/// invalidates the tracked position, since raw coordinates are not
/// comparable across projections.
pub fn on_view_change(old: &ViewModel, new: &ViewModel) -> Vec<Intent> {
    if old.map_crs == new.map_crs {
        Vec::new()
    } else {
        vec![Intent::retrack(new.map_crs.clone())]
    }
}

// =============================================================
// Input handlers
// =============================================================

/// CRS selector change.
pub fn on_crs_selected(code: String) -> Intent {
    Intent::display_crs(code)
}

/// Scale selector change. The option value is the index into the scale list.
pub fn on_scale_selected(value: &str) -> Result<Intent, BottomBarError> {
    value
        .trim()
        .parse::<usize>()
        .map(Intent::zoom)
        .map_err(|_| BottomBarError::InvalidScaleIndex(value.to_owned()))
}

// =============================================================
// Layout
// =============================================================

/// A `<select>` option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// An external footer link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub href: String,
    pub label: String,
    pub class: &'static str,
}

/// Footer content in render order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FooterItem {
    Link(FooterLink),
    Separator,
}

/// Everything the bar renders, resolved to plain strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BottomBarLayout {
    pub mousepos_label: String,
    pub display_crs: String,
    pub crs_options: Vec<SelectOption>,
    pub scale_label: String,
    pub scale_options: Vec<SelectOption>,
    /// Value of the selected scale option.
    pub selected_scale: String,
    /// `None` when neither link is configured.
    pub footer: Option<Vec<FooterItem>>,
}

/// Resolve the bar's content, or `None` when it is suppressed.
pub fn layout(
    view: &ViewModel,
    config: &BottomBarConfig,
    registry: &CrsRegistry,
    messages: &Messages,
    format: &NumberFormat,
) -> Option<BottomBarLayout> {
    if view.fullscreen {
        return None;
    }
    Some(BottomBarLayout {
        mousepos_label: messages.get(MOUSEPOS_LABEL),
        display_crs: view.display_crs.clone(),
        crs_options: crs_options(view, registry),
        scale_label: messages.get(SCALE_LABEL),
        scale_options: scale_options(&view.map_scales, format),
        selected_scale: view.map_scale.to_string(),
        footer: footer_items(config, messages),
    })
}

/// Options for the CRS selector, labelled from the registry.
pub fn crs_options(view: &ViewModel, registry: &CrsRegistry) -> Vec<SelectOption> {
    available_crs(registry, &view.map_crs, &view.additional_mouse_crs)
        .into_iter()
        .map(|def| SelectOption { value: def.code.clone(), label: def.label.clone() })
        .collect()
}

/// Options for the scale selector: value is the list index, label `1 : N`.
pub fn scale_options(scales: &[f64], format: &NumberFormat) -> Vec<SelectOption> {
    scales
        .iter()
        .enumerate()
        .map(|(index, scale)| SelectOption {
            value: index.to_string(),
            label: format!("1 : {}", format.to_locale_fixed(*scale, 0)),
        })
        .collect()
}

/// Footer links joined by separators, or `None` when no link is configured.
pub fn footer_items(config: &BottomBarConfig, messages: &Messages) -> Option<Vec<FooterItem>> {
    let links: Vec<FooterLink> = [
        (config.viewertitle_url.as_ref(), VIEWERTITLE_LABEL, "viewertitle_label"),
        (config.terms_url.as_ref(), TERMS_LABEL, "terms_label"),
    ]
    .into_iter()
    .filter_map(|(url, key, class)| {
        url.map(|href| FooterLink { href: href.clone(), label: messages.get(key), class })
    })
    .collect();

    if links.is_empty() {
        return None;
    }
    let mut items = Vec::with_capacity(links.len() * 2 - 1);
    for (i, link) in links.into_iter().enumerate() {
        if i > 0 {
            items.push(FooterItem::Separator);
        }
        items.push(FooterItem::Link(link));
    }
    Some(items)
}
