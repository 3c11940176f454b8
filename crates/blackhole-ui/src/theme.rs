//! Theme system for the editor.
//!
//! Two layers of color are at play:
//! - the **look-and-feel**: an iced palette that styles the chrome (menu bar,
//!   dropdowns, dialogs), chosen by [`ThemeName`] through the
//!   [`ThemeRegistry`];
//! - the **surface colors**: background and text of the editing area and
//!   the status strip, taken straight from the applied preferences.
//!
//! The chrome helpers below read everything from the active palette, so a
//! theme switch restyles them without any global state.

use blackhole_core::{DisplayPreferences, Rgb, ThemeName};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Converts to iced Color.
pub fn to_iced(color: Rgb) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

/// The host themes the editor can switch to.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    available: Vec<ThemeName>,
}

impl ThemeRegistry {
    pub fn new(available: Vec<ThemeName>) -> Self {
        Self { available }
    }

    /// Returns the iced palette for `name`, if the host provides it.
    pub fn resolve(&self, name: ThemeName) -> Option<Theme> {
        if !self.available.contains(&name) {
            return None;
        }
        Some(match name {
            ThemeName::System => Theme::default(),
            ThemeName::Light => Theme::Light,
            ThemeName::Dark => Theme::Dark,
            ThemeName::Nord => Theme::Nord,
        })
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(ThemeName::ALL.to_vec())
    }
}

// ============================================================================
// Chrome styles
// ============================================================================

/// Menu bar and other full-width strips.
pub fn bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Dropdowns, context menus and dialog bodies.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}

/// Dimmed layer behind a modal dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
        ..Default::default()
    }
}

pub fn separator(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.strong.color)),
        ..Default::default()
    }
}

/// Flat button used for menu entries.
pub fn menu_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let (bg, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette.primary.weak.color, palette.primary.weak.text)
        }
        button::Status::Disabled => (Color::TRANSPARENT, palette.background.strong.color),
        button::Status::Active => (Color::TRANSPARENT, palette.background.base.text),
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Top-level menu title; `open` keeps it highlighted while its dropdown shows.
pub fn menu_title(open: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if open {
            menu_button(theme, button::Status::Hovered)
        } else {
            menu_button(theme, status)
        }
    }
}

/// Accent button for the confirming action of a dialog.
pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let pair = match status {
        button::Status::Hovered | button::Status::Pressed => palette.primary.strong,
        button::Status::Disabled => palette.background.strong,
        button::Status::Active => palette.primary.base,
    };
    button::Style {
        background: Some(Background::Color(pair.color)),
        text_color: pair.text,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Outlined button for secondary dialog actions.
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => palette.background.strong.color,
        _ => palette.background.weak.color,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: palette.background.base.text,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Status strip, painted with the surface colors.
pub fn status_strip(preferences: DisplayPreferences) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(Background::Color(to_iced(preferences.background))),
        text_color: Some(to_iced(preferences.foreground)),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// A box painted like the text surface, used for the preferences preview.
pub fn surface(preferences: DisplayPreferences) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(Background::Color(to_iced(preferences.background))),
        text_color: Some(to_iced(preferences.foreground)),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Color swatch shown next to a color's sliders.
pub fn swatch(color: Rgb) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: Some(Background::Color(to_iced(color))),
        border: Border {
            color: theme.extended_palette().background.strong.color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}
