//! Runtime options with TOML preset support.
//!
//! Camera, geometry and key-binding settings are consolidated here. Options
//! serialize to/from TOML so a whole sandbox setup can be saved as a named
//! preset and reloaded later.

mod camera;
mod geometry;
mod keybindings;

use std::path::{Path, PathBuf};

pub use camera::CameraOptions;
pub use geometry::GeometryOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SandboxError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Tessellation and normal settings for generated meshes.
    pub geometry: GeometryOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SandboxError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| SandboxError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SandboxError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SandboxError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Load the preset `name` from `dir`.
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, SandboxError> {
        let path = preset_path(dir, name);
        if !path.is_file() {
            return Err(SandboxError::UnknownPreset(name.to_owned()));
        }
        let options = Self::load(&path)?;
        log::info!("Loaded preset '{name}'");
        Ok(options)
    }

    /// Save these options as preset `name` in `dir`, creating it if needed.
    pub fn save_preset(
        &self,
        dir: &Path,
        name: &str,
    ) -> Result<(), SandboxError> {
        self.save(&preset_path(dir, name))?;
        log::info!("Saved preset '{name}'");
        Ok(())
    }
}

fn preset_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.toml"))
}
