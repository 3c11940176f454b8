//! The desktop side of the shell's [`Host`] seam.
//!
//! Dialogs are rfd's blocking variants: they run on the UI thread and the
//! window waits for the answer, the same way the rest of the editor works.

use blackhole_core::{CoreResult, Host, QuitChoice, ShellError, ThemeName};
use iced::Theme;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::theme::ThemeRegistry;

/// Native dialogs, the theme registry and the system browser.
#[derive(Debug)]
pub struct NativeHost {
    registry: ThemeRegistry,
    active_theme: Theme,
    last_dir: Option<PathBuf>,
}

impl NativeHost {
    pub fn new(registry: ThemeRegistry) -> Self {
        Self {
            registry,
            active_theme: Theme::default(),
            last_dir: None,
        }
    }

    /// The palette the chrome is rendered with.
    pub fn active_theme(&self) -> &Theme {
        &self.active_theme
    }

    fn remember_dir(&mut self, picked: Option<&Path>) {
        if let Some(dir) = picked.and_then(Path::parent) {
            self.last_dir = Some(dir.to_path_buf());
        }
    }
}

impl Host for NativeHost {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Open")
            .add_filter("All Files", &["*"])
            .add_filter("Text", &["txt", "md", "log"]);
        if let Some(dir) = &self.last_dir {
            dialog = dialog.set_directory(dir);
        }

        let picked = dialog.pick_file();
        self.remember_dir(picked.as_deref());
        picked
    }

    fn pick_save_path(&mut self, suggested: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Save");
        match suggested {
            Some(path) => {
                if let Some(dir) = path.parent() {
                    dialog = dialog.set_directory(dir);
                }
                if let Some(name) = path.file_name() {
                    dialog = dialog.set_file_name(name.to_string_lossy());
                }
            }
            None => {
                if let Some(dir) = &self.last_dir {
                    dialog = dialog.set_directory(dir);
                }
                dialog = dialog.set_file_name("Untitled.txt");
            }
        }

        let picked = dialog.save_file();
        self.remember_dir(picked.as_deref());
        picked
    }

    fn confirm_quit(&mut self) -> QuitChoice {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Confirm Exit")
            .set_description("Do you want to save before quitting?")
            .set_buttons(MessageButtons::YesNoCancel)
            .show();

        match answer {
            MessageDialogResult::Yes => QuitChoice::SaveAndExit,
            MessageDialogResult::No => QuitChoice::Discard,
            _ => QuitChoice::Abort,
        }
    }

    fn notify_error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn switch_theme(&mut self, theme: ThemeName) -> CoreResult<()> {
        let resolved = self
            .registry
            .resolve(theme)
            .ok_or_else(|| ShellError::ThemeUnavailable(theme.to_string()))?;
        self.active_theme = resolved;
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> CoreResult<()> {
        browser_command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| ShellError::BrowserLaunch {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

/// The platform's "open this URL" command.
fn browser_command(url: &str) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("rundll32");
        command.args(["url.dll,FileProtocolHandler", url]);
        command
    }
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(url);
        command
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}
