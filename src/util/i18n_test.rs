use super::*;

const GERMAN: &str = r#"{
    "locale": "de-CH",
    "messages": {
        "bottombar": {
            "mousepos_label": "Koordinaten",
            "scale_label": "Massstab"
        }
    }
}"#;

#[test]
fn default_catalog_uses_english() {
    let messages = Messages::default();
    assert_eq!(messages.locale, "en-US");
    assert_eq!(messages.get(MOUSEPOS_LABEL), "Coordinates");
    assert_eq!(messages.get(SCALE_LABEL), "Scale");
    assert_eq!(messages.get(VIEWERTITLE_LABEL), "Home page");
    assert_eq!(messages.get(TERMS_LABEL), "Terms of use");
}

#[test]
fn loaded_document_overrides_defaults() {
    let messages = Messages::from_json(GERMAN).unwrap_or_default();
    assert_eq!(messages.locale, "de-CH");
    assert_eq!(messages.get(MOUSEPOS_LABEL), "Koordinaten");
    assert_eq!(messages.get(SCALE_LABEL), "Massstab");
}

#[test]
fn missing_translation_falls_back_to_default() {
    let messages = Messages::from_json(GERMAN).unwrap_or_default();
    assert_eq!(messages.get(TERMS_LABEL), "Terms of use");
}

#[test]
fn unknown_key_resolves_to_key() {
    let messages = Messages::default();
    assert_eq!(messages.get("bottombar.nope"), "bottombar.nope");
}

#[test]
fn non_string_leaf_is_ignored() {
    let messages = Messages::from_json(r#"{"messages": {"bottombar": {"scale_label": 3}}}"#).unwrap_or_default();
    assert_eq!(messages.locale, "en-US");
    assert_eq!(messages.get(SCALE_LABEL), "Scale");
}

#[test]
fn invalid_json_is_an_error() {
    let err = Messages::from_json("{not json");
    assert!(matches!(err, Err(BottomBarError::Translations(_))));
}
