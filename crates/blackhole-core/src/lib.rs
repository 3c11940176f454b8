//! # Black Hole Core
//!
//! The editor shell: everything the editor does, minus the widgets.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Shell                          │
//! │  ┌────────────┐ ┌────────────┐ ┌────────────────────┐ │
//! │  │  Document  │ │ FileHandle │ │ DisplayPreferences │ │
//! │  └────────────┘ └────────────┘ └────────────────────┘ │
//! │          ▲ dispatch(Intent) │ Host calls ▼            │
//! └──────────┼──────────────────┼─────────────────────────┘
//!       menu / keys        dialogs, theme, browser
//! ```
//!
//! ## Learning: Seams as Traits
//!
//! The shell never touches a window. Every interaction with the desktop
//! (file prompts, modal errors, theme switching, the browser) goes through
//! the [`Host`] trait, so the same logic runs under iced or under a
//! scripted test double.

pub mod config;
pub mod document;
pub mod host;
pub mod intent;
pub mod preferences;
pub mod shell;

use std::path::PathBuf;

pub use config::{Config, ConfigError};
pub use document::{Document, FileHandle, LineEnding};
pub use host::{Host, QuitChoice};
pub use intent::{Effect, Intent};
pub use preferences::{Channel, DisplayPreferences, PreferencesDialog, Rgb, ThemeName};
pub use shell::{OpenOutcome, QuitOutcome, SaveOutcome, Shell};

/// Result type for shell operations
pub type CoreResult<T> = Result<T, ShellError>;

/// Errors surfaced to the user by shell operations.
///
/// None of these is fatal; each one aborts the operation that raised it and
/// leaves the document, file handle and preferences as they were.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: blackhole_buffer::BufferError,
    },

    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: blackhole_buffer::BufferError,
    },

    #[error("Theme not available: {0}")]
    ThemeUnavailable(String),

    #[error("Failed to open {url}: {reason}")]
    BrowserLaunch { url: String, reason: String },
}
