pub mod dialogs;
pub mod editor;
pub mod menu;

use blackhole_core::Intent;
use iced::widget::{column, container, mouse_area, stack, Space};
use iced::{Element, Length};

use crate::app::{App, Message};
use crate::theme;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_menu_bar(),
            self.view_editor(),
            self.view_status_strip(),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        let tracked_view: Element<'_, Message> = mouse_area(main_view)
            .on_move(Message::MouseMoved)
            .into();

        if let Some(dialog) = self.shell.preferences_dialog() {
            modal(
                tracked_view,
                self.view_preferences_modal(dialog),
                Message::Intent(Intent::CancelPreferences),
            )
        } else if self.about_visible {
            modal(tracked_view, self.view_about_modal(), Message::HideAbout)
        } else if self.editor_context_visible {
            popup(
                tracked_view,
                self.view_editor_context_menu(),
                Message::HideEditorContextMenu,
            )
        } else if self.active_menu.is_some() {
            popup(tracked_view, self.view_menu_dropdown(), Message::CloseTopMenu)
        } else {
            tracked_view
        }
    }
}

/// Layers `overlay` over a dimmed `base`. Clicking the backdrop sends `on_blur`.
fn modal<'a>(
    base: Element<'a, Message>,
    overlay: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(theme::backdrop)
        )
        .on_press(on_blur),
        overlay,
    ]
    .into()
}

/// Layers a dropdown or context menu over `base`. A click that reaches
/// nothing else sends `on_blur`.
fn popup<'a>(
    base: Element<'a, Message>,
    overlay: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        mouse_area(
            container(Space::new(Length::Fill, Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
        )
        .on_press(on_blur),
        base,
        overlay,
    ]
    .into()
}

/// Places `content` at `(x, y)` inside a full-size layer.
fn anchored<'a>(content: Element<'a, Message>, x: f32, y: f32) -> Element<'a, Message> {
    column![
        Space::with_height(Length::Fixed(y)),
        iced::widget::row![Space::with_width(Length::Fixed(x)), content],
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
