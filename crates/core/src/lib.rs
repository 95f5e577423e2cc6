//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board, the winning-line catalog, the win
//! detector, and the round state machine. It has **zero dependencies** on UI,
//! networking, or I/O, making it:
//!
//! - **Deterministic**: the same move sequence always produces the same round
//! - **Testable**: every rule is exercised without a terminal or a device
//! - **Portable**: can run headless, under a TUI, or behind the device bridge
//!
//! # Module Structure
//!
//! - [`board`]: the 3x3x3 occupancy grid with bounds-checked access
//! - [`lines`]: the immutable catalog of the 49 winning lines
//! - [`detector`]: first-match win evaluation over the catalog
//! - [`game_state`]: turn rotation, staged selection, win/draw, round cooldown
//! - [`snapshot`]: plain-data state export for the view and the probe
//!
//! # Game Rules
//!
//! - Three players place marks in strict rotation (One -> Two -> Three)
//! - A move is staged by cell index, then confirmed (keyboard Enter or the
//!   external button); confirming an occupied cell rejects the move and the
//!   mover picks again
//! - The first completed line from the 49-line catalog ends the round; a full
//!   board with no line is a draw
//! - A finished round stays on screen for 5 seconds, then the board resets
//!   and Player One opens the next round
//!
//! # Example
//!
//! ```
//! use tui_cubic_core::{ConfirmOutcome, GameState};
//! use tui_cubic_types::Player;
//!
//! let mut game = GameState::new();
//!
//! // Player One stages and confirms the cube's origin corner.
//! game.select(0).unwrap();
//! let outcome = game.confirm().unwrap();
//! assert_eq!(outcome, ConfirmOutcome::Placed { next: Player::Two });
//! ```

pub mod board;
pub mod detector;
pub mod game_state;
pub mod lines;
pub mod snapshot;

pub use tui_cubic_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, GridError};
pub use detector::WinDetector;
pub use game_state::{CommandError, ConfirmOutcome, GameState, Outcome};
pub use lines::{Line, WIN_LINES};
pub use snapshot::GameSnapshot;
