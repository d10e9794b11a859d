//! User settings.
//!
//! Small JSON file under the user config directory holding the theme, icon
//! mode, and an optional content override path. Every field has a serde
//! default so partial or older files still load.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted user settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Color theme name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Icon rendering mode.
    #[serde(default = "default_icons")]
    pub icons: String,

    /// Path to a JSON portfolio replacing the built-in content.
    #[serde(default)]
    pub content_path: Option<PathBuf>,
}

fn default_theme() -> String {
    "mocha".into()
}

fn default_icons() -> String {
    "unicode".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            icons: default_icons(),
            content_path: None,
        }
    }
}

impl Settings {
    /// Load settings from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Save settings to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Load settings, falling back to defaults if the file is missing or bad.
    ///
    /// A malformed file is logged and replaced by defaults rather than
    /// aborting startup.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!("failed to load settings from {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

/// Errors that can occur when working with settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing the settings file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing settings JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing settings to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, "mocha");
        assert_eq!(settings.icons, "unicode");
        assert_eq!(settings.content_path, None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("settings.json");

        let settings = Settings {
            theme: "latte".into(),
            icons: "nerd".into(),
            content_path: Some(PathBuf::from("/tmp/portfolio.json")),
        };
        settings.save(&path).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.theme, "latte");
        assert_eq!(loaded.icons, "nerd");
        assert_eq!(loaded.content_path, settings.content_path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, r#"{"theme": "latte"}"#).unwrap();

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.theme, "latte");
        assert_eq!(loaded.icons, "unicode");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Settings::load(&temp.path().join("nope.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load_or_default(&temp.path().join("nope.json"));
        assert_eq!(settings.theme, "mocha");
    }

    #[test]
    fn test_load_or_default_on_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let settings = Settings::load_or_default(&path);
        assert_eq!(settings.theme, "mocha");
    }
}
