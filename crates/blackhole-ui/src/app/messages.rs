use blackhole_core::{Channel, Intent, ThemeName};
use iced::widget::text_editor;
use iced::{keyboard, window, Point};

use crate::app::types::TopMenu;

#[derive(Debug, Clone)]
pub enum Message {
    // Menu items, shortcuts and dialog buttons
    Intent(Intent),

    // Editor
    EditorAction(text_editor::Action),

    // Preferences dialog (pending until Apply)
    PreferenceThemePicked(ThemeName),
    PreferenceBackgroundChanged(Channel, u8),
    PreferenceForegroundChanged(Channel, u8),
    PreferencesReset,

    // Editor context menu
    ShowEditorContextMenu,
    HideEditorContextMenu,
    EditorCut,
    EditorCopy,
    EditorPaste,
    EditorSelectAll,

    // Top menu bar
    ToggleTopMenu(TopMenu),
    CloseTopMenu,

    // Help
    ShowAbout,
    HideAbout,

    // Mouse tracking
    MouseMoved(Point),

    KeyPressed(keyboard::Key, keyboard::Modifiers),

    // Window close button
    CloseRequested(window::Id),
}
