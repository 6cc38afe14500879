//! Frontend configuration
//!
//! Defaults are embedded in the bundle. A host page can override any subset of
//! them with a `<script type="text/toml" id="nft-config">` block.

use anyhow::Context;
use serde::Deserialize;

/// Id of the optional override block in the host page
pub const CONFIG_ELEMENT_ID: &str = "nft-config";

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub traits_panel: TraitsPanelConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TraitsPanelConfig {
    /// Height of the scrollable trait list before it starts to scroll
    pub max_height_px: u32,
    pub scrim_height_px: u32,
    /// Remaining scroll distance that still counts as "at the bottom"
    pub bottom_tolerance_px: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for TraitsPanelConfig {
    fn default() -> Self {
        Self {
            max_height_px: 412,
            scrim_height_px: 88,
            bottom_tolerance_px: 1.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level, `Debug` when the configured name is unknown
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[traits_panel]
max_height_px = 412
scrim_height_px = 88
bottom_tolerance_px = 1.0

[logging]
level = "debug"
"#;

/// Load configuration, preferring the page-supplied override when present.
///
/// Keys missing from the override keep their default values.
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<Config> {
    match override_toml.map(str::trim).filter(|s| !s.is_empty()) {
        Some(contents) => {
            toml::from_str(contents).context("Invalid configuration in host page")
        }
        None => toml::from_str(DEFAULT_CONFIG).context("Invalid embedded default configuration"),
    }
}
