//! Bottom bar plugin configuration.
//!
//! The viewer's plugin list carries one entry per plugin:
//! `{"name": "BottomBar", "cfg": {"viewertitleUrl": "...", "termsUrl": "..."}}`.
//! Both links are optional.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::BottomBarError;

pub const PLUGIN_NAME: &str = "BottomBar";

/// Footer link targets for the bottom bar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottomBarConfig {
    pub viewertitle_url: Option<String>,
    pub terms_url: Option<String>,
}

#[derive(Deserialize)]
struct PluginEntry {
    name: String,
    #[serde(default)]
    cfg: Option<BottomBarConfig>,
}

impl BottomBarConfig {
    /// Parse a plugin entry, rejecting entries for other plugins.
    pub fn from_plugin_json(raw: &str) -> Result<Self, BottomBarError> {
        let entry: PluginEntry = serde_json::from_str(raw).map_err(BottomBarError::Config)?;
        if entry.name != PLUGIN_NAME {
            return Err(BottomBarError::PluginMismatch { expected: PLUGIN_NAME, found: entry.name });
        }
        Ok(entry.cfg.unwrap_or_default().normalized())
    }

    /// Treat blank URLs as absent.
    fn normalized(self) -> Self {
        let keep = |url: Option<String>| url.filter(|u| !u.trim().is_empty());
        Self { viewertitle_url: keep(self.viewertitle_url), terms_url: keep(self.terms_url) }
    }
}
