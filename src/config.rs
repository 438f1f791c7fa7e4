use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::warn;

use crate::color;
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub drawing: DrawingConfig,
    #[serde(default)]
    pub overlays: OverlaysConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Hex color applied to shapes before the picker is first used.
    #[serde(default = "default_color")]
    pub default_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlaysConfig {
    /// Click-counter seed for the panel toggles. The default of 0
    /// means every panel starts hidden and the first click shows it;
    /// the legacy surface seeded one panel at 1, making its first
    /// click a visible no-op.
    #[serde(default = "default_initial_clicks")]
    pub initial_clicks: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of undo snapshots kept; 0 disables the cap.
    #[serde(default = "default_history_depth")]
    pub max_depth: usize,
}

// Default value functions
fn default_color() -> String {
    color::DEFAULT_COLOR.to_string()
}

fn default_initial_clicks() -> u32 {
    0
}

fn default_history_depth() -> usize {
    64
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
        }
    }
}

impl Default for OverlaysConfig {
    fn default() -> Self {
        Self { initial_clicks: 0 }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: default_history_depth(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            drawing: DrawingConfig::default(),
            overlays: OverlaysConfig::default(),
            history: HistoryConfig::default(),
        }
    }
}

/// Get the path to the config file
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dirs = directories::ProjectDirs::from("", "", "geodraw").ok_or(ConfigError::Directory)?;
    Ok(dirs.config_dir().join("config.toml"))
}

/// Load configuration from file, or return defaults if the file is
/// missing or unreadable. A broken config never blocks the editor.
pub fn load_config() -> EditorConfig {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("{e}. Using defaults.");
            return EditorConfig::default();
        }
    };
    if !path.exists() {
        return EditorConfig::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse config file: {e}. Using defaults.");
                EditorConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {e}. Using defaults.");
            EditorConfig::default()
        }
    }
}

/// Save configuration to file
pub fn save_config(config: &EditorConfig) -> Result<(), ConfigError> {
    let path = config_path()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml)?;

    Ok(())
}
