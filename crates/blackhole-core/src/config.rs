//! Startup configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! `#[serde(default)]` uses `Default::default()` for missing fields, so a
//! config file only needs the keys it wants to change.
//!
//! The file is read once at startup and never written: preferences changed
//! in the running editor last until it exits.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::preferences::{DisplayPreferences, Rgb, ThemeName};

/// Main editor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Main window settings
    pub window: WindowConfig,

    /// Surface appearance settings
    pub ui: UiConfig,

    /// Help menu settings
    pub help: HelpConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("blackhole").join("config.toml"))
    }

    /// Preferences the editor starts with.
    pub fn initial_preferences(&self) -> DisplayPreferences {
        let theme = ThemeName::parse(&self.ui.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?} in config, using default", self.ui.theme);
            ThemeName::default()
        });
        DisplayPreferences {
            theme,
            background: self.ui.background,
            foreground: self.ui.foreground,
        }
    }

    /// Themes the host should make available. Unknown names are skipped.
    pub fn enabled_themes(&self) -> Vec<ThemeName> {
        let mut themes = Vec::new();
        for name in &self.ui.themes {
            match ThemeName::parse(name) {
                Some(theme) if !themes.contains(&theme) => themes.push(theme),
                Some(_) => {}
                None => tracing::warn!("Unknown theme {:?} in ui.themes", name),
            }
        }
        themes
    }
}

/// Main window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Black Hole IDTE".to_string(),
            width: 600.0,
            height: 400.0,
        }
    }
}

/// Surface appearance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Initial theme name
    pub theme: String,

    /// Initial surface background
    pub background: Rgb,

    /// Initial surface text color
    pub foreground: Rgb,

    /// Font size in points
    pub font_size: f32,

    /// Themes offered by the host
    pub themes: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        let preferences = DisplayPreferences::default();
        Self {
            theme: preferences.theme.to_string(),
            background: preferences.background,
            foreground: preferences.foreground,
            font_size: 14.0,
            themes: ThemeName::ALL.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Help menu configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Page opened by Help > Wiki
    pub wiki_url: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            wiki_url: "https://github.com/MaiFOSS/black-hole-idte/wiki".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.width, 600.0);
        assert_eq!(config.window.title, "Black Hole IDTE");
        assert_eq!(config.initial_preferences(), DisplayPreferences::default());
        assert_eq!(config.enabled_themes(), ThemeName::ALL.to_vec());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r##"
            [ui]
            theme = "dark"
            background = "#404040"
            "##,
        )
        .unwrap();

        let prefs = config.initial_preferences();
        assert_eq!(prefs.theme, ThemeName::Dark);
        assert_eq!(prefs.background, Rgb::DARK_GRAY);
        assert_eq!(prefs.foreground, Rgb::BLACK);
        assert_eq!(config.window.height, 400.0);
        assert!(config.help.wiki_url.ends_with("/wiki"));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config: Config = toml::from_str("[ui]\ntheme = \"Metal\"\n").unwrap();
        assert_eq!(config.initial_preferences().theme, ThemeName::System);
    }

    #[test]
    fn test_enabled_themes_skips_unknown_and_duplicates() {
        let config: Config =
            toml::from_str("[ui]\nthemes = [\"Dark\", \"Nimbus\", \"dark\", \"Light\"]\n").unwrap();
        assert_eq!(config.enabled_themes(), vec![ThemeName::Dark, ThemeName::Light]);
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nbackground = \"white\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.ui.background, config.ui.background);
        assert_eq!(parsed.help.wiki_url, config.help.wiki_url);
    }
}
