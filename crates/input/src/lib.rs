//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_cubic_types::InputAction`]: one key per
//! cube cell in the physical layout order, Enter to confirm, Backspace to
//! drop the staged selection.

pub mod map;

pub use tui_cubic_types as types;

pub use map::{cell_index_for_char, handle_key_event, should_quit, CELL_KEYS};
