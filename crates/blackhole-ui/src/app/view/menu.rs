use blackhole_core::Intent;
use iced::widget::{button, container, horizontal_space, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length, Padding};

use super::anchored;
use crate::app::{App, Message, TopMenu};
use crate::theme;

/// Height of the menu bar; dropdowns open right below it.
const MENU_BAR_HEIGHT: f32 = 32.0;

impl App {
    pub fn view_menu_bar(&self) -> Element<'_, Message> {
        let mut menu_items: Vec<Element<'_, Message>> = TopMenu::ALL
            .into_iter()
            .map(|menu| {
                button(text(menu.label()).size(12))
                    .padding(Padding::from([6, 10]))
                    .style(theme::menu_title(self.active_menu == Some(menu)))
                    .on_press(Message::ToggleTopMenu(menu))
                    .into()
            })
            .collect();

        menu_items.push(horizontal_space().into());

        let bar = Row::with_children(menu_items)
            .spacing(2)
            .padding(Padding::from([4, 8]))
            .align_y(Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(MENU_BAR_HEIGHT))
            .style(theme::bar)
            .into()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let Some(menu) = self.active_menu else {
            return Space::new(0, 0).into();
        };

        let items: Vec<Element<'_, Message>> = match menu {
            TopMenu::File => vec![
                intent_item(Intent::Open, "Ctrl+O"),
                intent_item(Intent::Save, "Ctrl+S"),
                intent_item(Intent::SaveAs, "Ctrl+Shift+S"),
                menu_separator(),
                intent_item(Intent::Quit, "Ctrl+Q"),
            ],
            TopMenu::View => vec![
                intent_item(Intent::ToggleTheme, "Ctrl+T"),
                intent_item(Intent::OpenPreferences, "Ctrl+,"),
            ],
            // Placeholder entry with no action behind it.
            TopMenu::Run => vec![menu_item("Run File", "", None)],
            TopMenu::Help => vec![
                intent_item(Intent::OpenWiki, ""),
                menu_separator(),
                menu_item("About", "", Some(Message::ShowAbout)),
            ],
        };

        let menu_box = container(
            Column::with_children(items)
                .width(Length::Fixed(240.0))
                .padding(4),
        )
        .style(theme::panel);

        anchored(menu_box.into(), menu.dropdown_offset(), MENU_BAR_HEIGHT)
    }
}

/// A dropdown entry; `None` renders it disabled.
pub fn menu_item<'a>(
    label: &'a str,
    shortcut: &'a str,
    message: Option<Message>,
) -> Element<'a, Message> {
    button(
        row![text(label).size(12), horizontal_space(), text(shortcut).size(11)]
            .width(Length::Fill)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(Padding::from([6, 16]))
    .style(theme::menu_button)
    .on_press_maybe(message)
    .into()
}

fn intent_item<'a>(intent: Intent, shortcut: &'a str) -> Element<'a, Message> {
    menu_item(intent.display_name(), shortcut, Some(Message::Intent(intent)))
}

pub fn menu_separator<'a>() -> Element<'a, Message> {
    container(Space::new(Length::Fill, 1))
        .padding(Padding::from([0, 8]))
        .style(theme::separator)
        .into()
}
