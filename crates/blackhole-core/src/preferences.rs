//! Display preferences and the dialog that edits them.
//!
//! ## Learning: Two Value Sets
//!
//! The preferences dialog previews changes live, but nothing reaches the
//! document surface until Apply. `PreferencesDialog` keeps the applied
//! values (`snapshot`) and the pending edit (`pending`) side by side, and the
//! only bridge between them is `commit` (Apply) or `revert` (Cancel).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit color.
///
/// Serialized as `#rrggbb` so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// One of the three channels of an [`Rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    pub fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const DARK_GRAY: Rgb = Rgb::new(64, 64, 64);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    pub fn with_channel(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.r = value,
            Channel::Green => self.g = value,
            Channel::Blue => self.b = value,
        }
        self
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error for color strings that are not `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}, expected #rrggbb")]
pub struct ParseRgbError(String);

impl FromStr for Rgb {
    type Err = ParseRgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ParseRgbError(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseRgbError(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseRgbError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// The host look-and-feel choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    /// Whatever the host renders by default.
    #[default]
    System,
    Light,
    Dark,
    Nord,
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [
        ThemeName::System,
        ThemeName::Light,
        ThemeName::Dark,
        ThemeName::Nord,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::System => "System",
            ThemeName::Light => "Light",
            ThemeName::Dark => "Dark",
            ThemeName::Nord => "Nord",
        }
    }

    /// Case-insensitive lookup.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors and theme applied to the document surface and status strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPreferences {
    pub theme: ThemeName,
    pub background: Rgb,
    pub foreground: Rgb,
}

impl DisplayPreferences {
    const LIGHT: (Rgb, Rgb) = (Rgb::WHITE, Rgb::BLACK);
    const DARK: (Rgb, Rgb) = (Rgb::DARK_GRAY, Rgb::WHITE);

    /// Returns these preferences with the light/dark color pair flipped.
    ///
    /// Anything that is not exactly the dark pair counts as light.
    pub fn toggled(self) -> Self {
        let (background, foreground) = if (self.background, self.foreground) == Self::DARK {
            Self::LIGHT
        } else {
            Self::DARK
        };
        Self {
            background,
            foreground,
            ..self
        }
    }
}

impl Default for DisplayPreferences {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            background: Self::LIGHT.0,
            foreground: Self::LIGHT.1,
        }
    }
}

/// State of an open preferences dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesDialog {
    snapshot: DisplayPreferences,
    pending: DisplayPreferences,
}

impl PreferencesDialog {
    /// Opens the dialog on the currently applied preferences.
    pub fn new(applied: DisplayPreferences) -> Self {
        Self {
            snapshot: applied,
            pending: applied,
        }
    }

    /// Values shown in the pickers and the preview.
    pub fn pending(&self) -> DisplayPreferences {
        self.pending
    }

    /// Values held when the dialog opened, or at the last Apply.
    pub fn snapshot(&self) -> DisplayPreferences {
        self.snapshot
    }

    pub fn is_dirty(&self) -> bool {
        self.pending != self.snapshot
    }

    pub fn select_theme(&mut self, theme: ThemeName) {
        self.pending.theme = theme;
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.pending.background = color;
    }

    pub fn set_foreground(&mut self, color: Rgb) {
        self.pending.foreground = color;
    }

    /// Puts the pickers back on the snapshot values.
    pub fn revert(&mut self) {
        self.pending = self.snapshot;
    }

    /// Records what was actually applied as the new baseline.
    pub(crate) fn commit(&mut self, applied: DisplayPreferences) {
        self.snapshot = applied;
        self.pending = applied;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_formatting() {
        assert_eq!(Rgb::new(255, 0, 16).to_string(), "#ff0010");
        assert_eq!("#404040".parse::<Rgb>().unwrap(), Rgb::DARK_GRAY);
        assert_eq!("FFFFFF".parse::<Rgb>().unwrap(), Rgb::WHITE);
    }

    #[test]
    fn test_rgb_rejects_garbage() {
        assert!("#fff".parse::<Rgb>().is_err());
        assert!("#gggggg".parse::<Rgb>().is_err());
        assert!("#ffé0ff".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_rgb_channels() {
        let color = Rgb::BLACK.with_channel(Channel::Green, 200);
        assert_eq!(color, Rgb::new(0, 200, 0));
        assert_eq!(color.channel(Channel::Green), 200);
        assert_eq!(color.channel(Channel::Red), 0);
    }

    #[test]
    fn test_theme_name_parsing() {
        assert_eq!(ThemeName::parse("dark"), Some(ThemeName::Dark));
        assert_eq!(ThemeName::parse(" NORD "), Some(ThemeName::Nord));
        assert_eq!(ThemeName::parse("Metal"), None);
    }

    #[test]
    fn test_toggle_flips_between_light_and_dark() {
        let light = DisplayPreferences::default();
        let dark = light.toggled();
        assert_eq!(dark.background, Rgb::DARK_GRAY);
        assert_eq!(dark.foreground, Rgb::WHITE);
        assert_eq!(dark.theme, light.theme);
        assert_eq!(dark.toggled(), light);
    }

    #[test]
    fn test_toggle_from_custom_colors_goes_dark() {
        let custom = DisplayPreferences {
            background: Rgb::new(10, 20, 30),
            ..DisplayPreferences::default()
        };
        assert_eq!(custom.toggled().background, Rgb::DARK_GRAY);
    }

    #[test]
    fn test_dialog_revert_restores_snapshot() {
        let applied = DisplayPreferences::default();
        let mut dialog = PreferencesDialog::new(applied);

        dialog.set_background(Rgb::new(1, 2, 3));
        dialog.select_theme(ThemeName::Nord);
        assert!(dialog.is_dirty());
        assert_eq!(dialog.snapshot(), applied);

        dialog.revert();
        assert!(!dialog.is_dirty());
        assert_eq!(dialog.pending(), applied);
    }
}
