//! The desktop collaborators the shell depends on.

use std::path::{Path, PathBuf};

use crate::preferences::ThemeName;
use crate::CoreResult;

/// Answer to "Do you want to save before quitting?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitChoice {
    /// Save, and exit only if the save succeeded.
    SaveAndExit,
    /// Exit, dropping unsaved changes.
    Discard,
    /// Stay in the editor.
    Abort,
}

/// Host windowing system, as seen by the shell.
///
/// Every call blocks until the user answers. Implementations must not touch
/// shell state; they only report what the user chose or whether the host
/// request went through.
pub trait Host {
    /// Asks for a file to open. `None` means the user cancelled.
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Asks where to save. `None` means the user cancelled.
    fn pick_save_path(&mut self, suggested: Option<&Path>) -> Option<PathBuf>;

    /// Three-way save-before-quit confirmation.
    fn confirm_quit(&mut self) -> QuitChoice;

    /// Shows a modal error notification.
    fn notify_error(&mut self, title: &str, message: &str);

    /// Switches the rendering theme.
    ///
    /// Fails with `ShellError::ThemeUnavailable` and changes nothing when
    /// the host does not provide `theme`.
    fn switch_theme(&mut self, theme: ThemeName) -> CoreResult<()>;

    /// Opens `url` in the default browser without waiting for it.
    fn open_url(&mut self, url: &str) -> CoreResult<()>;
}
