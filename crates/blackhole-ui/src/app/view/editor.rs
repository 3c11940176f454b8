use iced::widget::{
    button, container, horizontal_space, mouse_area, row, text, text_editor, Column, Space,
};
use iced::{Alignment, Background, Border, Color, Element, Font, Length, Padding, Theme};

use super::anchored;
use super::menu::menu_separator;
use crate::app::{App, Message};
use crate::theme::{self, to_iced};

impl App {
    /// The text surface, painted with the applied preference colors.
    pub fn view_editor(&self) -> Element<'_, Message> {
        let preferences = self.shell.preferences();
        let background = to_iced(preferences.background);
        let foreground = to_iced(preferences.foreground);

        // Use text_editor's own scrolling; wrapping it in scrollable() resets
        // the scroll offset on every redraw.
        let editor = text_editor(&self.content)
            .height(Length::Fill)
            .padding(Padding {
                top: 12.0,
                right: 16.0,
                bottom: 12.0,
                left: 12.0,
            })
            .font(Font::MONOSPACE)
            .size(self.font_size)
            .style(move |theme: &Theme, _status| text_editor::Style {
                background: Background::Color(background),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: foreground,
                placeholder: Color {
                    a: 0.5,
                    ..foreground
                },
                value: foreground,
                selection: Color {
                    a: 0.5,
                    ..theme.extended_palette().primary.weak.color
                },
            })
            .on_action(Message::EditorAction);

        // Right-click is caught here so it never reaches the editor as a click.
        mouse_area(editor)
            .on_right_press(Message::ShowEditorContextMenu)
            .into()
    }

    pub fn view_status_strip(&self) -> Element<'_, Message> {
        let preferences = self.shell.preferences();
        let (line, col) = self.content.cursor_position();

        let location = self
            .shell
            .file_handle()
            .path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| self.shell.file_handle().display_name());

        let status_content = row![
            text(&self.status_message).size(12),
            horizontal_space(),
            text(location).size(12),
            Space::with_width(24),
            text(format!("Ln {}, Col {}", line + 1, col + 1)).size(12),
            Space::with_width(24),
            text(preferences.theme.as_str()).size(12),
            Space::with_width(12),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(28)
            .style(theme::status_strip(preferences))
            .into()
    }

    pub fn view_editor_context_menu(&self) -> Element<'_, Message> {
        let has_selection = self.content.selection().is_some();

        let items: Vec<Element<'_, Message>> = vec![
            context_item("Cut", "Ctrl+X", Message::EditorCut, has_selection),
            context_item("Copy", "Ctrl+C", Message::EditorCopy, has_selection),
            context_item("Paste", "Ctrl+V", Message::EditorPaste, true),
            menu_separator(),
            context_item("Select All", "Ctrl+A", Message::EditorSelectAll, true),
        ];

        let menu_box = container(Column::with_children(items).width(Length::Fixed(200.0)))
            .padding(4)
            .style(theme::panel);

        anchored(
            menu_box.into(),
            self.editor_context_position.x,
            self.editor_context_position.y,
        )
    }
}

fn context_item<'a>(
    label: &'a str,
    shortcut: &'a str,
    message: Message,
    enabled: bool,
) -> Element<'a, Message> {
    button(
        row![text(label).size(12), horizontal_space(), text(shortcut).size(11)]
            .width(Length::Fill)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(Padding::from([6, 12]))
    .style(theme::menu_button)
    .on_press_maybe(enabled.then_some(message))
    .into()
}
