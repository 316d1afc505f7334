use super::*;
use crate::intent::MousePositionChange;
use crate::util::crs::{CrsDef, CrsUnits};

fn view() -> ViewModel {
    ViewModel {
        display_crs: "EPSG:3857".to_owned(),
        map_crs: "EPSG:3857".to_owned(),
        map_scale: 1,
        map_scales: vec![500.0, 1000.0, 25000.0],
        active_theme_id: Some("default".to_owned()),
        fullscreen: false,
        additional_mouse_crs: vec!["EPSG:25832".to_owned()],
    }
}

fn registry() -> CrsRegistry {
    CrsRegistry::new(vec![
        CrsDef::new("EPSG:4326", "WGS 84", CrsUnits::Degrees),
        CrsDef::new("EPSG:3857", "WGS 84 / Pseudo-Mercator", CrsUnits::Meters),
        CrsDef::new("EPSG:25832", "ETRS89 / UTM zone 32N", CrsUnits::Meters),
        CrsDef::new("EPSG:2056", "CH1903+ / LV95", CrsUnits::Meters),
    ])
}

fn links(viewertitle: Option<&str>, terms: Option<&str>) -> BottomBarConfig {
    BottomBarConfig { viewertitle_url: viewertitle.map(str::to_owned), terms_url: terms.map(str::to_owned) }
}

fn render(view: &ViewModel, config: &BottomBarConfig) -> Option<BottomBarLayout> {
    layout(view, config, &registry(), &Messages::default(), &NumberFormat::default())
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn attach_enables_tracking_in_map_projection() {
    let intents = on_attach(&view());
    assert_eq!(
        intents,
        vec![Intent::SetMousePositionTracking(MousePositionChange {
            crs: Some("EPSG:3857".to_owned()),
            enabled: Some(true),
            position: None,
        })]
    );
}

#[test]
fn projection_change_resets_position() {
    let old = view();
    let new = ViewModel { map_crs: "EPSG:4326".to_owned(), ..view() };
    let intents = on_view_change(&old, &new);
    assert_eq!(
        intents,
        vec![Intent::SetMousePositionTracking(MousePositionChange {
            crs: Some("EPSG:4326".to_owned()),
            enabled: None,
            position: Some(None),
        })]
    );
}

#[test]
fn unchanged_projection_issues_nothing() {
    let old = view();
    let new = ViewModel { map_scale: 2, display_crs: "EPSG:4326".to_owned(), ..view() };
    assert!(on_view_change(&old, &new).is_empty());
    assert!(on_view_change(&old, &old).is_empty());
}

// =============================================================
// Input handlers
// =============================================================

#[test]
fn crs_selection_only_changes_crs() {
    let intent = on_crs_selected("EPSG:25832".to_owned());
    assert_eq!(
        intent,
        Intent::SetMousePositionTracking(MousePositionChange {
            crs: Some("EPSG:25832".to_owned()),
            enabled: None,
            position: None,
        })
    );
}

#[test]
fn scale_selection_parses_index() {
    assert!(matches!(on_scale_selected("2"), Ok(Intent::SetZoomLevel { index: 2 })));
    assert!(matches!(on_scale_selected(" 0 "), Ok(Intent::SetZoomLevel { index: 0 })));
}

#[test]
fn scale_selection_rejects_non_numeric_value() {
    assert!(matches!(on_scale_selected("abc"), Err(BottomBarError::InvalidScaleIndex(v)) if v == "abc"));
    assert!(matches!(on_scale_selected(""), Err(BottomBarError::InvalidScaleIndex(_))));
    assert!(matches!(on_scale_selected("-1"), Err(BottomBarError::InvalidScaleIndex(_))));
}

// =============================================================
// Layout
// =============================================================

#[test]
fn fullscreen_suppresses_everything() {
    let vm = ViewModel { fullscreen: true, ..view() };
    assert_eq!(render(&vm, &links(Some("https://a"), Some("https://b"))), None);
    let empty = ViewModel { fullscreen: true, map_scales: Vec::new(), additional_mouse_crs: Vec::new(), ..view() };
    assert_eq!(render(&empty, &BottomBarConfig::default()), None);
}

#[test]
fn layout_labels_and_display_crs() {
    let bar = render(&view(), &BottomBarConfig::default());
    let Some(bar) = bar else {
        panic!("bar should render");
    };
    assert_eq!(bar.mousepos_label, "Coordinates");
    assert_eq!(bar.scale_label, "Scale");
    assert_eq!(bar.display_crs, "EPSG:3857");
}

#[test]
fn crs_options_follow_filter() {
    let opts = crs_options(&view(), &registry());
    let values: Vec<&str> = opts.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["EPSG:4326", "EPSG:3857", "EPSG:25832"]);
    assert_eq!(opts[1].label, "WGS 84 / Pseudo-Mercator");
}

#[test]
fn scale_options_use_index_values_and_locale_labels() {
    let opts = scale_options(&[500.0, 1000.0, 25000.0], &NumberFormat::default());
    assert_eq!(
        opts,
        vec![
            SelectOption { value: "0".to_owned(), label: "1 : 500".to_owned() },
            SelectOption { value: "1".to_owned(), label: "1 : 1,000".to_owned() },
            SelectOption { value: "2".to_owned(), label: "1 : 25,000".to_owned() },
        ]
    );
}

#[test]
fn selected_scale_option_is_current_index() {
    let Some(bar) = render(&view(), &BottomBarConfig::default()) else {
        panic!("bar should render");
    };
    assert_eq!(bar.selected_scale, "1");
    let selected = bar.scale_options.iter().find(|o| o.value == bar.selected_scale);
    assert_eq!(selected.map(|o| o.label.as_str()), Some("1 : 1,000"));
}

#[test]
fn empty_scale_list_renders_empty_selector() {
    let vm = ViewModel { map_scales: Vec::new(), map_scale: 0, ..view() };
    let Some(bar) = render(&vm, &BottomBarConfig::default()) else {
        panic!("bar should render");
    };
    assert!(bar.scale_options.is_empty());
}

// =============================================================
// Footer links
// =============================================================

#[test]
fn no_links_means_no_footer() {
    assert_eq!(footer_items(&links(None, None), &Messages::default()), None);
}

#[test]
fn viewer_title_only_has_no_separator() {
    let items = footer_items(&links(Some("https://viewer"), None), &Messages::default());
    assert_eq!(
        items,
        Some(vec![FooterItem::Link(FooterLink {
            href: "https://viewer".to_owned(),
            label: "Home page".to_owned(),
            class: "viewertitle_label",
        })])
    );
}

#[test]
fn terms_only_has_no_separator() {
    let items = footer_items(&links(None, Some("https://terms")), &Messages::default()).unwrap_or_default();
    assert_eq!(items.len(), 1);
    assert!(matches!(&items[0], FooterItem::Link(l) if l.class == "terms_label" && l.label == "Terms of use"));
}

#[test]
fn both_links_are_joined_by_separator() {
    let items = footer_items(&links(Some("https://viewer"), Some("https://terms")), &Messages::default())
        .unwrap_or_default();
    assert_eq!(items.len(), 3);
    assert!(matches!(&items[0], FooterItem::Link(l) if l.href == "https://viewer"));
    assert_eq!(items[1], FooterItem::Separator);
    assert!(matches!(&items[2], FooterItem::Link(l) if l.href == "https://terms"));
    assert_eq!(FOOTER_SEPARATOR, " | ");
}

#[test]
fn footer_labels_are_translated() {
    let messages = Messages::from_json(r#"{"locale": "de", "messages": {"bottombar": {"terms_label": "Nutzungsbedingungen"}}}"#)
        .unwrap_or_default();
    let items = footer_items(&links(None, Some("https://terms")), &messages).unwrap_or_default();
    assert!(matches!(&items[0], FooterItem::Link(l) if l.label == "Nutzungsbedingungen"));
}

// =============================================================
// Mounted component
// =============================================================

mod mounted {
    use std::sync::{Arc, Mutex};

    use any_spawner::Executor;
    use leptos::prelude::*;
    use reactive_graph::owner::Owner;
    use tokio::task;

    use super::super::BottomBar;
    use crate::intent::Intent;
    use crate::state::AppState;

    type Emitted = Arc<Mutex<Vec<Intent>>>;

    fn mount(state: AppState) -> (RwSignal<AppState>, Emitted) {
        let store = RwSignal::new(state);
        provide_context(store);
        let emitted: Emitted = Arc::new(Mutex::new(Vec::new()));
        let on_intent = Callback::new({
            let emitted = Arc::clone(&emitted);
            move |intent: Intent| {
                if let Ok(mut log) = emitted.lock() {
                    log.push(intent.clone());
                }
                store.update(|s| s.dispatch(&intent));
            }
        });
        let _bar = view! { <BottomBar on_intent=on_intent/> };
        (store, emitted)
    }

    fn snapshot(emitted: &Emitted) -> Vec<Intent> {
        emitted.lock().map(|log| log.clone()).unwrap_or_default()
    }

    #[tokio::test]
    async fn mount_tracks_once_and_projection_change_resets() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        task::LocalSet::new()
            .run_until(async {
                let mut state = AppState::default();
                state.map.projection = Some("EPSG:3857".to_owned());
                state.map.scales = vec![5000.0, 1000.0];
                let (store, emitted) = mount(state);

                Executor::tick().await;
                assert_eq!(snapshot(&emitted), vec![Intent::track("EPSG:3857")]);
                assert!(store.with_untracked(|s| s.mouse_position.enabled));

                // The mount intent rewrites the store; the rerun stays quiet.
                Executor::tick().await;
                assert_eq!(snapshot(&emitted).len(), 1);

                store.update(|s| s.map.zoom = Some(1));
                Executor::tick().await;
                assert_eq!(snapshot(&emitted).len(), 1);

                store.update(|s| s.map.projection = Some("EPSG:4326".to_owned()));
                Executor::tick().await;
                Executor::tick().await;
                assert_eq!(snapshot(&emitted), vec![Intent::track("EPSG:3857"), Intent::retrack("EPSG:4326")]);
                assert_eq!(store.with_untracked(|s| s.mouse_position.crs.clone()).as_deref(), Some("EPSG:4326"));
            })
            .await;
    }
}
