//! Crate error type.

/// Errors raised while loading bottom bar configuration or handling input.
#[derive(Debug, thiserror::Error)]
pub enum BottomBarError {
    /// The plugin config document is not valid JSON for a plugin entry.
    #[error("invalid plugin config: {0}")]
    Config(#[source] serde_json::Error),
    /// The plugin entry names a different plugin.
    #[error("plugin entry is for `{found}`, expected `{expected}`")]
    PluginMismatch { expected: &'static str, found: String },
    /// The translation document is not valid JSON.
    #[error("invalid translation document: {0}")]
    Translations(#[source] serde_json::Error),
    /// A scale selector value that does not parse as a list index.
    #[error("invalid scale index: {0:?}")]
    InvalidScaleIndex(String),
}
