//! # Black Hole Buffer
//!
//! The text storage behind the editor's single document.
//!
//! ## Key Concepts
//!
//! ### Whole-buffer I/O
//! - `TextBuffer::from_file` reads an entire file as UTF-8 text
//! - `TextBuffer::write_to` writes the entire buffer back, atomically
//! - What is written is exactly what a later read returns
//!
//! ### Ownership
//! - `TextBuffer` owns its rope
//! - `text()` hands out a `Cow<str>` that borrows when it can

mod buffer;

pub use buffer::TextBuffer;

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
