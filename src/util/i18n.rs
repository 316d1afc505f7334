//! Translated UI messages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Viewer translations are JSON documents of the form
//! `{"locale": "de-CH", "messages": {"bottombar": {"scale_label": "..."}}}`.
//! Components look messages up by dotted key. Keys missing from a loaded
//! document fall back to the built-in English text, then to the key itself.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use serde::Deserialize;
use serde_json::Value;

use super::locale::DEFAULT_LOCALE;
use crate::error::BottomBarError;

pub const MOUSEPOS_LABEL: &str = "bottombar.mousepos_label";
pub const SCALE_LABEL: &str = "bottombar.scale_label";
pub const VIEWERTITLE_LABEL: &str = "bottombar.viewertitle_label";
pub const TERMS_LABEL: &str = "bottombar.terms_label";

const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (MOUSEPOS_LABEL, "Coordinates"),
    (SCALE_LABEL, "Scale"),
    (VIEWERTITLE_LABEL, "Home page"),
    (TERMS_LABEL, "Terms of use"),
];

/// Message catalog for one locale.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Messages {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    messages: Value,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_owned()
}

impl Default for Messages {
    fn default() -> Self {
        Self { locale: default_locale(), messages: Value::Null }
    }
}

impl Messages {
    /// Parse a translation document.
    pub fn from_json(raw: &str) -> Result<Self, BottomBarError> {
        serde_json::from_str(raw).map_err(BottomBarError::Translations)
    }

    /// Resolve `key`, falling back to English defaults and then to the key.
    pub fn get(&self, key: &str) -> String {
        self.lookup(key)
            .or_else(|| DEFAULT_MESSAGES.iter().find(|(k, _)| *k == key).map(|(_, v)| *v))
            .unwrap_or(key)
            .to_owned()
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        key.split('.')
            .try_fold(&self.messages, |node, segment| node.get(segment))
            .and_then(Value::as_str)
    }
}
