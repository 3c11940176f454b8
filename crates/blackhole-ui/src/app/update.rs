use blackhole_core::{Effect, Intent};
use iced::widget::text_editor;
use iced::{keyboard, Task};
use std::sync::Arc;

use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Intent(intent) => {
                self.active_menu = None;
                self.editor_context_visible = false;
                return self.dispatch(intent);
            }

            Message::EditorAction(action) => {
                if self.editor_context_visible {
                    match &action {
                        text_editor::Action::Click(_) | text_editor::Action::Drag(_) => {
                            self.editor_context_visible = false;
                            self.active_menu = None;
                            return Task::none();
                        }
                        _ => {
                            self.editor_context_visible = false;
                        }
                    }
                }

                self.active_menu = None;

                let is_edit = action.is_edit();
                self.content.perform(action);
                if is_edit {
                    self.sync_document();
                }
            }

            Message::PreferenceThemePicked(theme) => {
                if let Some(dialog) = self.shell.preferences_dialog_mut() {
                    dialog.select_theme(theme);
                }
            }

            Message::PreferenceBackgroundChanged(channel, value) => {
                if let Some(dialog) = self.shell.preferences_dialog_mut() {
                    let color = dialog.pending().background.with_channel(channel, value);
                    dialog.set_background(color);
                }
            }

            Message::PreferenceForegroundChanged(channel, value) => {
                if let Some(dialog) = self.shell.preferences_dialog_mut() {
                    let color = dialog.pending().foreground.with_channel(channel, value);
                    dialog.set_foreground(color);
                }
            }

            Message::PreferencesReset => {
                if let Some(dialog) = self.shell.preferences_dialog_mut() {
                    dialog.revert();
                }
            }

            Message::ShowEditorContextMenu => {
                self.editor_context_visible = true;
                self.editor_context_position = self.last_cursor_position;
                self.active_menu = None;
            }

            Message::HideEditorContextMenu => {
                self.editor_context_visible = false;
            }

            Message::EditorCut => {
                self.editor_context_visible = false;
                self.active_menu = None;
                if let Some(selected) = self.content.selection() {
                    copy_to_clipboard(&selected);
                    self.content
                        .perform(text_editor::Action::Edit(text_editor::Edit::Delete));
                    self.sync_document();
                    self.status_message = "Cut".to_string();
                }
            }

            Message::EditorCopy => {
                self.editor_context_visible = false;
                self.active_menu = None;
                if let Some(selected) = self.content.selection() {
                    copy_to_clipboard(&selected);
                    self.status_message = "Copied".to_string();
                } else {
                    self.status_message = "Nothing selected".to_string();
                }
            }

            Message::EditorPaste => {
                self.editor_context_visible = false;
                self.active_menu = None;
                match arboard::Clipboard::new().and_then(|mut c| c.get_text()) {
                    Ok(clip_text) => {
                        self.content.perform(text_editor::Action::Edit(
                            text_editor::Edit::Paste(Arc::new(clip_text)),
                        ));
                        self.sync_document();
                        self.status_message = "Pasted".to_string();
                    }
                    Err(e) => tracing::warn!("Clipboard read failed: {}", e),
                }
            }

            Message::EditorSelectAll => {
                self.editor_context_visible = false;
                self.active_menu = None;
                self.content.perform(text_editor::Action::SelectAll);
            }

            Message::ToggleTopMenu(menu) => {
                self.editor_context_visible = false;
                self.active_menu = if self.active_menu == Some(menu) {
                    None
                } else {
                    Some(menu)
                };
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
            }

            Message::ShowAbout => {
                self.active_menu = None;
                self.about_visible = true;
            }

            Message::HideAbout => {
                self.about_visible = false;
            }

            Message::MouseMoved(position) => {
                self.last_cursor_position = position;
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::CloseRequested(_) => {
                return self.dispatch(Intent::Quit);
            }
        }

        Task::none()
    }

    /// Runs an intent through the shell and carries out its effect.
    fn dispatch(&mut self, intent: Intent) -> Task<Message> {
        match self.shell.dispatch(intent, &mut self.host) {
            Effect::None => {}
            Effect::Status(message) => self.status_message = message,
            Effect::Reload => {
                self.content = text_editor::Content::with_text(&self.shell.document().text());
                self.status_message =
                    format!("Opened: {}", self.shell.file_handle().display_name());
            }
            Effect::Exit => return iced::exit(),
        }
        Task::none()
    }

    /// Copies the text surface into the document line by line, since
    /// `Content::text` normalizes endings and appends a newline.
    fn sync_document(&mut self) {
        self.shell.set_lines(self.content.lines());
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        if matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape)) {
            if self.shell.preferences_dialog().is_some() {
                return self.dispatch(Intent::CancelPreferences);
            }
            self.active_menu = None;
            self.editor_context_visible = false;
            self.about_visible = false;
            return Task::none();
        }

        if !modifiers.command() {
            return Task::none();
        }

        let keyboard::Key::Character(c) = &key else {
            return Task::none();
        };

        let intent = match (c.to_lowercase().as_str(), modifiers.shift()) {
            ("s", true) => Intent::SaveAs,
            ("s", false) => Intent::Save,
            ("o", false) => Intent::Open,
            ("q", false) => Intent::Quit,
            ("t", false) => Intent::ToggleTheme,
            (",", false) => Intent::OpenPreferences,
            _ => return Task::none(),
        };

        self.update(Message::Intent(intent))
    }
}

fn copy_to_clipboard(text: &str) {
    if let Err(e) = arboard::Clipboard::new().and_then(|mut c| c.set_text(text)) {
        tracing::warn!("Clipboard write failed: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Flags, TopMenu};
    use blackhole_core::{Channel, Rgb};
    use iced::keyboard::{Key, Modifiers};

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn test_escape_cancels_preferences() {
        let mut app = app();
        let _ = app.update(Message::Intent(Intent::OpenPreferences));
        let _ = app.update(Message::PreferenceForegroundChanged(Channel::Blue, 200));

        let _ = app.handle_key_pressed(
            Key::Named(keyboard::key::Named::Escape),
            Modifiers::empty(),
        );

        assert!(app.shell.preferences_dialog().is_none());
        assert_eq!(app.shell.preferences().foreground, Rgb::BLACK);
    }

    #[test]
    fn test_shortcut_dispatches_intent() {
        let mut app = app();
        let _ = app.handle_key_pressed(Key::Character(",".into()), Modifiers::COMMAND);
        assert!(app.shell.preferences_dialog().is_some());
    }

    #[test]
    fn test_reset_restores_applied_values() {
        let mut app = app();
        let _ = app.update(Message::Intent(Intent::OpenPreferences));
        let _ = app.update(Message::PreferenceBackgroundChanged(Channel::Green, 0));

        let dialog = app.shell.preferences_dialog().unwrap();
        assert!(dialog.is_dirty());

        let _ = app.update(Message::PreferencesReset);

        let dialog = app.shell.preferences_dialog().unwrap();
        assert!(!dialog.is_dirty());
        assert_eq!(dialog.pending().background, Rgb::WHITE);
    }

    #[test]
    fn test_editing_keeps_crlf_and_missing_final_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        std::fs::write(&path, "one\r\ntwo").unwrap();

        let (mut app, _) = App::new(Flags {
            file: Some(path),
            config: blackhole_core::Config::default(),
        });
        let _ = app.update(Message::EditorAction(text_editor::Action::Move(
            text_editor::Motion::DocumentEnd,
        )));
        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert('!'),
        )));

        assert_eq!(app.shell.document().text(), "one\r\ntwo!");
    }

    #[test]
    fn test_context_menu_opens_at_pointer() {
        let mut app = app();
        let _ = app.update(Message::ToggleTopMenu(TopMenu::File));
        let _ = app.update(Message::MouseMoved(iced::Point::new(40.0, 60.0)));
        let _ = app.update(Message::ShowEditorContextMenu);

        assert!(app.editor_context_visible);
        assert_eq!(app.editor_context_position, iced::Point::new(40.0, 60.0));
        assert_eq!(app.active_menu, None);
    }
}
