use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::error::AppError;

/// How Open sequences the close of the current document and the load of the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OpenOrder {
    /// Confirm first, but only reset the old document once the new file loaded.
    /// A failed load leaves the previous document open.
    #[default]
    LoadThenClose,
    /// Close the old document, then load. A failed load leaves nothing open.
    CloseThenLoad,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default = "default_untitled_name")]
    pub untitled_name: String,

    #[serde(default)]
    pub open_order: OpenOrder,

    /// Skip the persist call when saving a clean, named document.
    #[serde(default)]
    pub skip_clean_save: bool,
}

fn default_app_name() -> String {
    "Simple Notepad".to_string()
}

fn default_untitled_name() -> String {
    "Untitled".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            untitled_name: default_untitled_name(),
            open_order: OpenOrder::default(),
            skip_clean_save: false,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => {
                // File doesn't exist, use defaults
                let default = Self::default();
                if let Err(e) = default.save_to(config_path) {
                    log::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("simple-notepad");
        path.push("settings.json");
        path
    }

    /// Reject settings the controller cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.untitled_name.trim().is_empty() {
            return Err(AppError::Settings("untitled_name must not be empty".to_string()));
        }
        Ok(())
    }
}
