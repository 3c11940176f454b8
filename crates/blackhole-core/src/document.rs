//! The single document and the file it belongs to.
//!
//! ## Learning: Composition over Inheritance
//!
//! `Document` composes a `TextBuffer` and adds the one piece of editor state
//! the buffer does not know about: whether the text changed since it last
//! touched the disk.

use blackhole_buffer::TextBuffer;
use std::path::{Path, PathBuf};

/// The in-memory text being edited.
#[derive(Debug, Default)]
pub struct Document {
    buffer: TextBuffer,
    modified: bool,
    line_ending: LineEnding,
}

/// The separator used when edited lines are joined back into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Picks `CrLf` when the text contains any `"\r\n"`.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::CrLf
        } else {
            LineEnding::Lf
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Document {
    /// Creates an empty, unmodified document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full text.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        self.buffer.text()
    }

    /// Records user edits. Marks the document modified when the text changed.
    pub fn set_text(&mut self, text: &str) {
        if self.buffer.text() != text {
            self.buffer.set_text(text);
            self.modified = true;
        }
    }

    /// Records user edits given line by line, joined with the ending the
    /// document was loaded with. Nothing is appended after the last line.
    pub fn set_lines<I, L>(&mut self, lines: I)
    where
        I: IntoIterator<Item = L>,
        L: std::ops::Deref<Target = str>,
    {
        let separator = self.line_ending.as_str();
        let mut text = String::with_capacity(self.buffer.len_bytes());
        for (index, line) in lines.into_iter().enumerate() {
            if index > 0 {
                text.push_str(separator);
            }
            text.push_str(&line);
        }
        self.set_text(&text);
    }

    /// Replaces the content wholesale with freshly loaded text.
    pub(crate) fn replace(&mut self, buffer: TextBuffer) {
        self.line_ending = LineEnding::detect(&buffer.text());
        self.buffer = buffer;
        self.modified = false;
    }

    pub(crate) fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub(crate) fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Returns true if there are edits not yet written anywhere.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

/// The path last chosen through Open or Save.
///
/// Set on every successful Open or Save, never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHandle(Option<PathBuf>);

impl FileHandle {
    pub fn path(&self) -> Option<&Path> {
        self.0.as_deref()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    pub(crate) fn set(&mut self, path: PathBuf) {
        self.0 = Some(path);
    }

    /// File name for titles and status messages, `"Untitled"` when unset.
    pub fn display_name(&self) -> String {
        self.0
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }
}
