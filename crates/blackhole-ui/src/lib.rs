//! # Black Hole UI
//!
//! The iced front end of the editor.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: `App`, which owns the [`blackhole_core::Shell`] and the widgets' state
//! - **Message**: Events that can occur
//! - **Update**: (state, message) -> new state, routing user intents to the shell
//! - **View**: state -> UI elements
//!
//! The shell talks back to the desktop through [`host::NativeHost`].

pub mod app;
pub mod host;
pub mod theme;

pub use app::{run, App, Flags};
