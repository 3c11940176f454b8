//! Core text buffer implementation using a rope.
//!
//! ## Why Rope?
//!
//! Opening a file replaces the whole buffer and saving streams the whole
//! buffer out. A rope lets both happen chunk by chunk, without building one
//! giant `String` on the way in or on the way out.

use ropey::Rope;
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::BufferResult;

/// A text buffer backed by a rope data structure.
///
/// The buffer knows nothing about file handles or dirty state; the document
/// that owns it does.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Creates a new empty buffer.
    ///
    /// # Example
    /// ```
    /// use blackhole_buffer::TextBuffer;
    ///
    /// let buffer = TextBuffer::new();
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Loads a buffer from a file.
    ///
    /// The file must be valid UTF-8; anything else surfaces as an
    /// `InvalidData` I/O error and no buffer is produced.
    pub fn from_file(path: impl AsRef<Path>) -> BufferResult<Self> {
        let file = File::open(path.as_ref())?;
        let rope = Rope::from_reader(BufReader::new(file))?;
        Ok(Self { rope })
    }

    /// Writes the whole buffer to `path`.
    ///
    /// The text goes to a sibling temporary file first and is renamed over
    /// the target, so a failure never leaves a truncated file behind. An
    /// existing target keeps its permissions, symlinks are written through,
    /// and a file we may not write to is refused with `PermissionDenied`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> BufferResult<()> {
        let target = resolve_target(path.as_ref())?;
        let existing = match std::fs::metadata(&target) {
            Ok(metadata) => Some(metadata),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        if let Some(metadata) = &existing {
            ensure_writable(&target, metadata)?;
            if has_other_links(metadata) {
                // Renaming would detach the other names from the new text.
                return self.write_file(&target);
            }
        }

        let temp_path = temp_path_for(&target);
        let result = self.write_file(&temp_path).and_then(|()| {
            if let Some(metadata) = &existing {
                std::fs::set_permissions(&temp_path, metadata.permissions())?;
            }
            std::fs::rename(&temp_path, &target)?;
            Ok(())
        });

        if result.is_err() {
            let _ = std::fs::remove_file(&temp_path);
        }
        result
    }

    fn write_file(&self, path: &Path) -> BufferResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.rope.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Replaces the whole content.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    // ==================== Text Access ====================

    /// Returns the entire text content as a `Cow<str>`.
    ///
    /// Borrows when the rope is a single chunk, allocates otherwise.
    #[inline]
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        self.rope.slice(..).into()
    }

    // ==================== Measurements ====================

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Returns the number of Unicode scalar values in the buffer.
    #[inline]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns the number of bytes the buffer occupies on disk.
    #[inline]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Returns the number of lines in the buffer.
    ///
    /// An empty buffer has 1 line. A buffer ending with `\n` counts
    /// the empty line after it.
    #[inline]
    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }
}

/// Follows symlinks so the link itself survives the rename.
fn resolve_target(path: &Path) -> BufferResult<PathBuf> {
    match std::fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e.into()),
    }
}

/// A rename only needs a writable directory, so the file's own
/// permissions are checked here.
fn ensure_writable(path: &Path, metadata: &std::fs::Metadata) -> BufferResult<()> {
    if metadata.permissions().readonly() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{} is read-only", path.display()),
        )
        .into());
    }
    OpenOptions::new().write(true).open(path)?;
    Ok(())
}

#[cfg(unix)]
fn has_other_links(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    metadata.nlink() > 1
}

#[cfg(not(unix))]
fn has_other_links(_metadata: &std::fs::Metadata) -> bool {
    false
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.blackhole-tmp"))
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
