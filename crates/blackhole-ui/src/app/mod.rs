use blackhole_core::Shell;
use iced::widget::text_editor;
use iced::{keyboard, window, Point, Subscription, Task, Theme};

pub mod messages;
pub mod types;
pub mod update;
pub mod view;

pub use messages::*;
pub use types::*;

use crate::host::NativeHost;
use crate::theme::ThemeRegistry;

pub struct App {
    pub shell: Shell,
    pub host: NativeHost,
    pub content: text_editor::Content,
    pub app_name: String,
    pub status_message: String,
    pub font_size: f32,
    pub active_menu: Option<TopMenu>,
    pub about_visible: bool,
    pub editor_context_visible: bool,
    pub editor_context_position: Point,
    pub last_cursor_position: Point,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags { file, config } = flags;

        let mut host = NativeHost::new(ThemeRegistry::new(config.enabled_themes()));
        let mut shell = Shell::from_config(&config, &mut host);

        let status_message = match file {
            Some(path) => match shell.open_path(&path) {
                Ok(()) => format!("Opened: {}", shell.file_handle().display_name()),
                Err(e) => format!("Error: {e}"),
            },
            None => "Ready | Ctrl+O: Open | Ctrl+S: Save | Ctrl+Q: Exit".to_string(),
        };

        let app = Self {
            content: text_editor::Content::with_text(&shell.document().text()),
            shell,
            host,
            app_name: config.window.title.clone(),
            status_message,
            font_size: config.ui.font_size,
            active_menu: None,
            about_visible: false,
            editor_context_visible: false,
            editor_context_position: Point::ORIGIN,
            last_cursor_position: Point::ORIGIN,
        };

        (app, iced::widget::focus_next())
    }

    pub fn title(&self) -> String {
        let modified = if self.shell.document().is_modified() {
            " *"
        } else {
            ""
        };

        format!(
            "{}{} - {}",
            self.shell.file_handle().display_name(),
            modified,
            self.app_name
        )
    }

    /// The look-and-feel last accepted by the host.
    pub fn theme(&self) -> Theme {
        self.host.active_theme().clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });

        Subscription::batch([
            keyboard_sub,
            window::close_requests().map(Message::CloseRequested),
        ])
    }
}

/// Opens the main window and runs until the shell asks to exit.
pub fn run(flags: Flags) -> iced::Result {
    let window = &flags.config.window;
    let size = iced::Size::new(window.width, window.height);

    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(size)
        // The close button goes through the quit confirmation instead.
        .exit_on_close_request(false)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackhole_core::{Channel, Config, Intent, Rgb, ThemeName};

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn test_title_marks_unsaved_changes() {
        let mut app = app();
        assert_eq!(app.title(), "Untitled - Black Hole IDTE");

        app.shell.set_text("draft");
        assert_eq!(app.title(), "Untitled * - Black Hole IDTE");
    }

    #[test]
    fn test_startup_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let (app, _) = App::new(Flags {
            file: Some(path.clone()),
            config: Config::default(),
        });

        assert_eq!(app.shell.document().text(), "hello");
        assert_eq!(app.shell.file_handle().path(), Some(path.as_path()));
        assert_eq!(app.status_message, "Opened: notes.txt");
        assert_eq!(app.title(), "notes.txt - Black Hole IDTE");
    }

    #[test]
    fn test_unreadable_startup_file_leaves_untitled_document() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = App::new(Flags {
            file: Some(dir.path().join("missing.txt")),
            config: Config::default(),
        });

        assert!(!app.shell.file_handle().is_set());
        assert!(app.status_message.starts_with("Error:"));
    }

    #[test]
    fn test_typing_reaches_the_document() {
        let mut app = app();
        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('x'),
        )));

        assert_eq!(app.shell.document().text(), "x");
        assert!(app.shell.document().is_modified());
    }

    #[test]
    fn test_preference_edits_stay_pending_until_apply() {
        let mut app = app();
        let _ = app.update(Message::Intent(Intent::OpenPreferences));
        let _ = app.update(Message::PreferenceBackgroundChanged(Channel::Red, 10));
        let _ = app.update(Message::PreferenceThemePicked(ThemeName::Nord));

        assert_eq!(app.shell.preferences().background, Rgb::WHITE);
        assert_eq!(app.theme(), Theme::default());

        let _ = app.update(Message::Intent(Intent::ApplyPreferences));

        assert_eq!(app.shell.preferences().background, Rgb::new(10, 255, 255));
        assert_eq!(app.theme(), Theme::Nord);
        assert_eq!(app.status_message, "Preferences applied");
    }

    #[test]
    fn test_top_menu_toggles() {
        let mut app = app();
        let _ = app.update(Message::ToggleTopMenu(TopMenu::View));
        assert_eq!(app.active_menu, Some(TopMenu::View));

        let _ = app.update(Message::ToggleTopMenu(TopMenu::View));
        assert_eq!(app.active_menu, None);
    }

    #[test]
    fn test_dispatching_an_intent_closes_the_menu() {
        let mut app = app();
        let _ = app.update(Message::ToggleTopMenu(TopMenu::View));
        let _ = app.update(Message::Intent(Intent::ToggleTheme));

        assert_eq!(app.active_menu, None);
        assert_eq!(app.shell.preferences().background, Rgb::DARK_GRAY);
    }
}
