use blackhole_core::{Channel, Intent, PreferencesDialog, Rgb, ThemeName};
use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, slider, text, Column, Space,
};
use iced::{Alignment, Element, Font, Length, Padding};

use crate::app::{App, Message};
use crate::theme;

const PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog.";

impl App {
    /// Preferences dialog. Everything shown here is the pending selection;
    /// the surface behind it keeps the applied values until Apply.
    pub fn view_preferences_modal<'a>(
        &'a self,
        dialog: &'a PreferencesDialog,
    ) -> Element<'a, Message> {
        let pending = dialog.pending();

        let theme_row = row![
            text("Theme").size(13).width(Length::Fixed(90.0)),
            pick_list(
                ThemeName::ALL,
                Some(pending.theme),
                Message::PreferenceThemePicked
            )
            .text_size(13)
            .width(Length::Fill),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let preview = container(
            column![
                text("Preview").size(11),
                text(PREVIEW_TEXT).size(self.font_size).font(Font::MONOSPACE),
            ]
            .spacing(6),
        )
        .padding(12)
        .width(Length::Fill)
        .style(theme::surface(pending));

        let buttons = row![
            button(text("Reset").size(13))
                .padding(Padding::from([6, 16]))
                .style(theme::secondary_button)
                .on_press_maybe(dialog.is_dirty().then_some(Message::PreferencesReset)),
            horizontal_space(),
            button(text(Intent::CancelPreferences.display_name()).size(13))
                .padding(Padding::from([6, 16]))
                .style(theme::secondary_button)
                .on_press(Message::Intent(Intent::CancelPreferences)),
            button(text(Intent::ApplyPreferences.display_name()).size(13))
                .padding(Padding::from([6, 16]))
                .style(theme::primary_button)
                .on_press(Message::Intent(Intent::ApplyPreferences)),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let modal_content = column![
            text("Preferences").size(18),
            theme_row,
            color_editor(
                "Background",
                pending.background,
                Message::PreferenceBackgroundChanged
            ),
            color_editor(
                "Foreground",
                pending.foreground,
                Message::PreferenceForegroundChanged
            ),
            preview,
            buttons,
        ]
        .spacing(14)
        .padding(20)
        .width(Length::Fixed(420.0));

        centered(modal_content.into())
    }

    pub fn view_about_modal(&self) -> Element<'_, Message> {
        let modal_content = column![
            text(&self.app_name).size(20),
            Space::with_height(8),
            text("A minimal text editor").size(13),
            Space::with_height(12),
            text(format!("Version {}", env!("CARGO_PKG_VERSION"))).size(12),
            Space::with_height(8),
            text(self.shell.wiki_url()).size(11),
            Space::with_height(20),
            button(text("Close").size(13))
                .padding(Padding::from([8, 24]))
                .style(theme::primary_button)
                .on_press(Message::HideAbout),
        ]
        .padding(24)
        .width(Length::Fixed(320.0))
        .align_x(Alignment::Center);

        centered(modal_content.into())
    }
}

/// Three sliders, one per channel, plus the hex value and a swatch.
fn color_editor<'a>(
    label: &'a str,
    color: Rgb,
    on_change: fn(Channel, u8) -> Message,
) -> Element<'a, Message> {
    let header = row![
        text(label).size(13),
        horizontal_space(),
        text(color.to_string()).size(12).font(Font::MONOSPACE),
        container(Space::new(18, 18)).style(theme::swatch(color)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let mut rows = Column::new().spacing(4).push(header);
    for channel in Channel::ALL {
        let value = color.channel(channel);
        rows = rows.push(
            row![
                text(channel.label()).size(12).width(Length::Fixed(14.0)),
                slider(0..=255u8, value, move |v| on_change(channel, v)).width(Length::Fill),
                text(value.to_string()).size(12).width(Length::Fixed(28.0)),
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        );
    }
    rows.into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    container(container(content).style(theme::panel))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
