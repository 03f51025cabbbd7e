//! Centralized behavior tuning with TOML preset support.
//!
//! All tweakable settings (smoothing, debounce, reveal stagger) are
//! consolidated here. Options serialize to/from TOML so a host can ship
//! tuning presets alongside its assets.

mod motion;
mod reveal;

use std::path::Path;

pub use motion::MotionOptions;
pub use reveal::RevealOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GlideError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[motion]`) work
/// correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Indicator animator tuning.
    pub motion: MotionOptions,
    /// Reveal sequencer tuning.
    pub reveal: RevealOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GlideError> {
        let content = std::fs::read_to_string(path).map_err(GlideError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GlideError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GlideError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GlideError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GlideError::Io)?;
        }
        std::fs::write(path, content).map_err(GlideError::Io)
    }
}
