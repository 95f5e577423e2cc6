//! Session engine (game-loop facing).
//!
//! This crate sits between raw inputs (keyboard actions, device button
//! presses, clock ticks) and the core state machine, and turns every state
//! change into a [`SessionEvent`] plus the status frames owed to the external
//! display. It performs no I/O itself; the game loop forwards the frames to
//! the device bridge.

pub mod session;

pub use tui_cubic_core as core;
pub use tui_cubic_types as types;

pub use session::{Session, SessionEvent, StatusBurst};
