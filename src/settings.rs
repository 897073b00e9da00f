//! Game settings and preferences
//!
//! Read from an optional JSON file. Missing fields take their defaults, so a
//! settings file only needs the values it changes.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::input::Key;

/// Asset locations (resolved by the renderer, missing files fall back)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub background: PathBuf,
    pub player: PathBuf,
    /// Optional "you lost" banner image
    pub lost_banner: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: PathBuf::from("assets/background.jpg"),
            player: PathBuf::from("assets/bunny.png"),
            lost_banner: PathBuf::from("assets/youlost_banner.png"),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    /// Generator seed (None = derive from the clock)
    pub seed: Option<u64>,

    // === Controls ===
    /// Any of these held = jump
    pub jump_keys: Vec<Key>,
    /// Pressed on the loss screen to start over
    pub restart_key: Key,

    // === HUD ===
    /// Show the controls hint until the first loss
    pub show_instructions: bool,

    pub assets: AssetPaths,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Endless Jump Game".to_string(),
            seed: None,
            jump_keys: vec![Key::Space, Key::W, Key::Up],
            restart_key: Key::Space,
            show_instructions: true,
            assets: AssetPaths::default(),
        }
    }
}

/// Failure to read a settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {}", e),
            SettingsError::Parse(e) => write!(f, "invalid settings JSON: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults if the file is absent or bad
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_path(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// True if `key` is bound to jump
    pub fn is_jump_key(&self, key: Key) -> bool {
        self.jump_keys.contains(&key)
    }

    /// Human-readable list of the jump bindings ("Space / W / Up")
    pub fn jump_keys_label(&self) -> String {
        self.jump_keys
            .iter()
            .map(|k| k.label())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}
