//! Terminal rendering module.
//!
//! Stands in for the original's engine renderer: a styled-cell
//! [`FrameBuffer`], a [`TerminalRenderer`] that owns raw mode and the
//! alternate screen, and a pure [`CubeView`] that lays the three cube layers
//! out side by side from a `GameSnapshot`. The view does no I/O and is
//! unit-tested without a terminal.

pub mod cube_view;
pub mod fb;
pub mod renderer;

pub use tui_cubic_core as core;
pub use tui_cubic_types as types;

pub use cube_view::{CubeView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
