use blackhole_core::Config;
use std::path::PathBuf;

/// Top-level menus of the menu bar, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    File,
    View,
    Run,
    Help,
}

impl TopMenu {
    pub const ALL: [TopMenu; 4] = [TopMenu::File, TopMenu::View, TopMenu::Run, TopMenu::Help];

    pub fn label(self) -> &'static str {
        match self {
            TopMenu::File => "File",
            TopMenu::View => "View",
            TopMenu::Run => "Run",
            TopMenu::Help => "Help",
        }
    }

    /// Horizontal offset of the dropdown, lined up under the title.
    pub fn dropdown_offset(self) -> f32 {
        match self {
            TopMenu::File => 8.0,
            TopMenu::View => 50.0,
            TopMenu::Run => 96.0,
            TopMenu::Help => 138.0,
        }
    }
}

/// Startup parameters handed over by the binary.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File to open on launch.
    pub file: Option<PathBuf>,
    pub config: Config,
}
