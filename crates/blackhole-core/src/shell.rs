//! The editor shell: one document, one file handle, one set of preferences.
//!
//! Every operation runs to completion before returning. When one fails, the
//! user is notified through the [`Host`] and the shell state is exactly what
//! it was before the call.

use blackhole_buffer::TextBuffer;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::document::{Document, FileHandle};
use crate::host::{Host, QuitChoice};
use crate::preferences::{DisplayPreferences, PreferencesDialog, Rgb, ThemeName};
use crate::{CoreResult, ShellError};

/// Result of [`Shell::open`].
#[derive(Debug)]
pub enum OpenOutcome {
    Opened(PathBuf),
    Cancelled,
    Failed(ShellError),
}

/// Result of [`Shell::save`] and [`Shell::save_as`].
#[derive(Debug)]
pub enum SaveOutcome {
    Saved(PathBuf),
    Cancelled,
    Failed(ShellError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved(_))
    }
}

/// Result of [`Shell::quit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitOutcome {
    /// The process should terminate now.
    Exit,
    /// The editor stays open.
    Stay,
}

/// The editor shell.
#[derive(Debug)]
pub struct Shell {
    document: Document,
    file_handle: FileHandle,
    preferences: DisplayPreferences,
    dialog: Option<PreferencesDialog>,
    wiki_url: String,
}

impl Shell {
    /// Creates a shell with an empty, untitled document.
    pub fn new(preferences: DisplayPreferences, wiki_url: impl Into<String>) -> Self {
        Self {
            document: Document::new(),
            file_handle: FileHandle::default(),
            preferences,
            dialog: None,
            wiki_url: wiki_url.into(),
        }
    }

    /// Creates a shell from the startup config and brings the host's theme
    /// in line with it.
    pub fn from_config(config: &Config, host: &mut impl Host) -> Self {
        let mut shell = Self::new(DisplayPreferences::default(), config.help.wiki_url.clone());
        // A refused startup theme is already reported to the host.
        let _ = shell.apply_preferences(config.initial_preferences(), host);
        shell
    }

    // ==================== State Queries ====================

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn file_handle(&self) -> &FileHandle {
        &self.file_handle
    }

    /// The preferences currently applied to the surface.
    pub fn preferences(&self) -> DisplayPreferences {
        self.preferences
    }

    pub fn preferences_dialog(&self) -> Option<&PreferencesDialog> {
        self.dialog.as_ref()
    }

    /// Live edits go here; they stay pending until Apply.
    pub fn preferences_dialog_mut(&mut self) -> Option<&mut PreferencesDialog> {
        self.dialog.as_mut()
    }

    pub fn wiki_url(&self) -> &str {
        &self.wiki_url
    }

    /// Records what the user typed.
    pub fn set_text(&mut self, text: &str) {
        self.document.set_text(text);
    }

    /// Records what the user typed, one line at a time.
    pub fn set_lines<I, L>(&mut self, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: std::ops::Deref<Target = str>,
    {
        self.document.set_lines(lines);
    }

    // ==================== Open / Save ====================

    /// Prompts for a file and loads it.
    pub fn open(&mut self, host: &mut impl Host) -> OpenOutcome {
        let Some(path) = host.pick_open_path() else {
            tracing::debug!("Open cancelled");
            return OpenOutcome::Cancelled;
        };

        match self.open_path(&path) {
            Ok(()) => OpenOutcome::Opened(path),
            Err(e) => {
                host.notify_error("Error", &format!("Error opening file.\n{e}"));
                OpenOutcome::Failed(e)
            }
        }
    }

    /// Loads `path`, replacing the document and the file handle.
    ///
    /// Nothing changes if the file cannot be read as text.
    pub fn open_path(&mut self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        let buffer = TextBuffer::from_file(path).map_err(|source| {
            let e = ShellError::FileRead {
                path: path.to_path_buf(),
                source,
            };
            tracing::error!("{}", e);
            e
        })?;

        tracing::info!("Opened {} ({} bytes)", path.display(), buffer.len_bytes());
        self.document.replace(buffer);
        self.file_handle.set(path.to_path_buf());
        Ok(())
    }

    /// Saves to the file handle, prompting first if there is none.
    pub fn save(&mut self, host: &mut impl Host) -> SaveOutcome {
        match self.file_handle.path() {
            Some(path) => {
                let path = path.to_path_buf();
                self.write_to(path, host)
            }
            None => self.save_as(host),
        }
    }

    /// Always prompts for a path, then saves there.
    pub fn save_as(&mut self, host: &mut impl Host) -> SaveOutcome {
        let Some(path) = host.pick_save_path(self.file_handle.path()) else {
            tracing::debug!("Save cancelled");
            return SaveOutcome::Cancelled;
        };
        self.write_to(path, host)
    }

    fn write_to(&mut self, path: PathBuf, host: &mut impl Host) -> SaveOutcome {
        match self.document.buffer().write_to(&path) {
            Ok(()) => {
                tracing::info!("Saved {}", path.display());
                self.file_handle.set(path.clone());
                self.document.mark_saved();
                SaveOutcome::Saved(path)
            }
            Err(source) => {
                let e = ShellError::FileWrite { path, source };
                tracing::error!("{}", e);
                host.notify_error("Error", &format!("Error saving file.\n{e}"));
                SaveOutcome::Failed(e)
            }
        }
    }

    // ==================== Appearance ====================

    /// Applies a theme by name plus surface colors.
    ///
    /// Unknown theme names fall back to the default theme; the colors apply
    /// either way.
    pub fn apply_theme(
        &mut self,
        theme_name: &str,
        background: Rgb,
        foreground: Rgb,
        host: &mut impl Host,
    ) -> bool {
        let theme = ThemeName::parse(theme_name).unwrap_or_else(|| {
            tracing::warn!("Unknown theme {:?}, falling back to {}", theme_name, ThemeName::default());
            ThemeName::default()
        });
        self.apply_preferences(
            DisplayPreferences {
                theme,
                background,
                foreground,
            },
            host,
        )
    }

    /// Applies a full preference set.
    ///
    /// Colors always take effect. The theme name only changes when the host
    /// accepted the switch; returns whether it did.
    pub fn apply_preferences(
        &mut self,
        preferences: DisplayPreferences,
        host: &mut impl Host,
    ) -> bool {
        self.preferences.background = preferences.background;
        self.preferences.foreground = preferences.foreground;

        match host.switch_theme(preferences.theme) {
            Ok(()) => {
                tracing::info!("Theme switched to {}", preferences.theme);
                self.preferences.theme = preferences.theme;
                true
            }
            Err(e) => {
                tracing::error!("{}", e);
                host.notify_error("Theme", &e.to_string());
                false
            }
        }
    }

    /// Flips the surface between the light and dark color pairs.
    pub fn toggle_theme(&mut self) {
        self.preferences = self.preferences.toggled();
        tracing::debug!(
            background = %self.preferences.background,
            foreground = %self.preferences.foreground,
            "Toggled surface colors"
        );
    }

    /// Opens the preferences dialog on the applied values.
    ///
    /// Opening an already open dialog keeps its pending edits.
    pub fn open_preferences(&mut self) {
        if self.dialog.is_none() {
            self.dialog = Some(PreferencesDialog::new(self.preferences));
        }
    }

    /// Commits the dialog's pending values. The dialog stays open.
    ///
    /// Returns false when no dialog is open or the theme switch was refused.
    pub fn apply_preferences_dialog(&mut self, host: &mut impl Host) -> bool {
        let Some(pending) = self.dialog.as_ref().map(PreferencesDialog::pending) else {
            return false;
        };
        let switched = self.apply_preferences(pending, host);

        let applied = self.preferences;
        if let Some(dialog) = self.dialog.as_mut() {
            dialog.commit(applied);
        }
        switched
    }

    /// Closes the dialog, dropping anything not applied.
    pub fn cancel_preferences(&mut self) {
        if let Some(dialog) = self.dialog.take() {
            if dialog.is_dirty() {
                tracing::debug!("Discarded pending preference edits");
            }
        }
    }

    // ==================== Quit / Help ====================

    /// Runs the save-before-quit confirmation.
    ///
    /// Choosing to save only exits when the save actually succeeded.
    pub fn quit(&mut self, host: &mut impl Host) -> QuitOutcome {
        match host.confirm_quit() {
            QuitChoice::SaveAndExit => {
                if self.save(host).is_saved() {
                    QuitOutcome::Exit
                } else {
                    tracing::warn!("Quit aborted: document was not saved");
                    QuitOutcome::Stay
                }
            }
            QuitChoice::Discard => {
                if self.document.is_modified() {
                    tracing::info!("Exiting with unsaved changes discarded");
                }
                QuitOutcome::Exit
            }
            QuitChoice::Abort => QuitOutcome::Stay,
        }
    }

    /// Opens the documentation page in the browser.
    pub fn open_wiki(&mut self, host: &mut impl Host) -> CoreResult<()> {
        let url = self.wiki_url.clone();
        host.open_url(&url).inspect_err(|e| {
            tracing::error!("{}", e);
            host.notify_error("Error", "Failed to open Wiki page.");
        })
    }
}
