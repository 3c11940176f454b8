//! User intents and the table that routes them to shell operations.
//!
//! ## Learning: One Dispatch Table
//!
//! Menu items, keyboard shortcuts and the window close button all produce an
//! [`Intent`]. `Shell::dispatch` is the only place that maps an intent to an
//! operation, so "File > Exit" and closing the window cannot drift apart.

use crate::host::Host;
use crate::shell::{OpenOutcome, QuitOutcome, SaveOutcome, Shell};

/// Something the user asked the editor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Open,
    Save,
    SaveAs,
    Quit,
    ToggleTheme,
    OpenPreferences,
    ApplyPreferences,
    CancelPreferences,
    OpenWiki,
}

impl Intent {
    /// Returns the intent's menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Intent::Open => "Open...",
            Intent::Save => "Save",
            Intent::SaveAs => "Save As...",
            Intent::Quit => "Exit",
            Intent::ToggleTheme => "Toggle Theme",
            Intent::OpenPreferences => "Preferences...",
            Intent::ApplyPreferences => "Apply",
            Intent::CancelPreferences => "Cancel",
            Intent::OpenWiki => "Wiki",
        }
    }
}

/// What the front end has to do after a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond redrawing from shell state.
    None,
    /// Show a message in the status strip.
    Status(String),
    /// The document was replaced; reload the text surface from it.
    Reload,
    /// Terminate the process.
    Exit,
}

impl Shell {
    /// Routes an intent to its operation.
    pub fn dispatch(&mut self, intent: Intent, host: &mut impl Host) -> Effect {
        tracing::debug!(?intent, "Dispatching");
        match intent {
            Intent::Open => match self.open(host) {
                OpenOutcome::Opened(_) => Effect::Reload,
                OpenOutcome::Cancelled => Effect::None,
                OpenOutcome::Failed(e) => Effect::Status(format!("Error: {e}")),
            },
            Intent::Save => self.save(host).into(),
            Intent::SaveAs => self.save_as(host).into(),
            Intent::Quit => match self.quit(host) {
                QuitOutcome::Exit => Effect::Exit,
                QuitOutcome::Stay => Effect::None,
            },
            Intent::ToggleTheme => {
                self.toggle_theme();
                Effect::None
            }
            Intent::OpenPreferences => {
                self.open_preferences();
                Effect::None
            }
            Intent::ApplyPreferences => {
                let Some(requested) = self.preferences_dialog().map(|d| d.pending().theme) else {
                    return Effect::None;
                };
                if self.apply_preferences_dialog(host) {
                    Effect::Status("Preferences applied".to_string())
                } else {
                    Effect::Status(format!("Colors applied; theme {requested} unavailable"))
                }
            }
            Intent::CancelPreferences => {
                self.cancel_preferences();
                Effect::None
            }
            Intent::OpenWiki => match self.open_wiki(host) {
                Ok(()) => Effect::Status("Opened Wiki in browser".to_string()),
                Err(e) => Effect::Status(format!("Error: {e}")),
            },
        }
    }
}

impl From<SaveOutcome> for Effect {
    fn from(outcome: SaveOutcome) -> Self {
        match outcome {
            SaveOutcome::Saved(path) => Effect::Status(format!(
                "Saved: {}",
                path.file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string())
            )),
            SaveOutcome::Cancelled => Effect::None,
            SaveOutcome::Failed(e) => Effect::Status(format!("Error: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::host::testing::ScriptedHost;
    use crate::host::QuitChoice;
    use crate::preferences::{Rgb, ThemeName};
    use tempfile::tempdir;

    fn shell() -> Shell {
        Shell::from_config(&Config::default(), &mut ScriptedHost::default())
    }

    #[test]
    fn test_open_dispatch_requests_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "abc").unwrap();

        let mut shell = shell();
        let mut host = ScriptedHost::opening(&path);

        assert_eq!(shell.dispatch(Intent::Open, &mut host), Effect::Reload);
        assert_eq!(shell.document().text(), "abc");
    }

    #[test]
    fn test_save_dispatch_reports_file_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let mut shell = shell();
        let mut host = ScriptedHost::saving(Some(path));

        assert_eq!(
            shell.dispatch(Intent::Save, &mut host),
            Effect::Status("Saved: report.txt".to_string())
        );
    }

    #[test]
    fn test_cancelled_dispatches_are_silent() {
        let mut shell = shell();
        let mut host = ScriptedHost::default();

        assert_eq!(shell.dispatch(Intent::Open, &mut host), Effect::None);
        assert_eq!(shell.dispatch(Intent::SaveAs, &mut host), Effect::None);
        assert_eq!(shell.dispatch(Intent::Quit, &mut host), Effect::None);
    }

    #[test]
    fn test_quit_dispatch_exits_on_discard() {
        let mut shell = shell();
        let mut host = ScriptedHost::default();
        host.quit_choice = QuitChoice::Discard;

        assert_eq!(shell.dispatch(Intent::Quit, &mut host), Effect::Exit);
    }

    #[test]
    fn test_preferences_round_trip_through_dispatch() {
        let mut shell = shell();
        let mut host = ScriptedHost::default();
        let before = shell.preferences();

        shell.dispatch(Intent::OpenPreferences, &mut host);
        shell
            .preferences_dialog_mut()
            .unwrap()
            .set_background(Rgb::new(50, 60, 70));
        shell.dispatch(Intent::CancelPreferences, &mut host);
        assert_eq!(shell.preferences(), before);

        shell.dispatch(Intent::OpenPreferences, &mut host);
        shell
            .preferences_dialog_mut()
            .unwrap()
            .set_background(Rgb::new(50, 60, 70));
        assert_eq!(
            shell.dispatch(Intent::ApplyPreferences, &mut host),
            Effect::Status("Preferences applied".to_string())
        );
        assert_eq!(shell.preferences().background, Rgb::new(50, 60, 70));
    }

    #[test]
    fn test_apply_dispatch_reports_refused_theme() {
        let mut shell = shell();
        let mut host = ScriptedHost::default();
        host.unavailable_themes.push(ThemeName::Nord);

        shell.dispatch(Intent::OpenPreferences, &mut host);
        let dialog = shell.preferences_dialog_mut().unwrap();
        dialog.select_theme(ThemeName::Nord);
        dialog.set_foreground(Rgb::new(1, 2, 3));

        assert_eq!(
            shell.dispatch(Intent::ApplyPreferences, &mut host),
            Effect::Status("Colors applied; theme Nord unavailable".to_string())
        );
        assert_eq!(shell.preferences().foreground, Rgb::new(1, 2, 3));
        assert_eq!(shell.preferences().theme, ThemeName::System);
    }

    #[test]
    fn test_apply_dispatch_without_dialog_is_silent() {
        let mut shell = shell();
        let mut host = ScriptedHost::default();

        assert_eq!(
            shell.dispatch(Intent::ApplyPreferences, &mut host),
            Effect::None
        );
    }

    #[test]
    fn test_toggle_theme_dispatch() {
        let mut shell = shell();
        let mut host = ScriptedHost::default();

        shell.dispatch(Intent::ToggleTheme, &mut host);
        assert_eq!(shell.preferences().background, Rgb::DARK_GRAY);
    }
}
