//! Session: input dispatch and status-frame production.
//!
//! The status stream mirrors the original device traffic: one frame with the
//! new mover's id after every turn change, a flash burst after a win (the
//! sentinel interleaved with the winner id, [`STATUS_FLASH_REPEATS`] pairs),
//! and the opener's id again when the cooldown resets the board. Frames are
//! data here; delivery (and delivery failure) is the bridge's problem.

use arrayvec::ArrayVec;

use tui_cubic_core::{
    CommandError, ConfirmOutcome, GameSnapshot, GameState, Line,
};
use tui_cubic_types::{
    Coord, InputAction, Player, STATUS_FLASH_REPEATS, STATUS_FLASH_SENTINEL,
};

/// Largest possible frame burst: the win flash.
pub const STATUS_BURST_MAX: usize = STATUS_FLASH_REPEATS * 2;

/// A bounded burst of status frames for the display.
pub type StatusBurst = ArrayVec<u8, STATUS_BURST_MAX>;

/// What one input or tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A cell was staged for the next confirm.
    Selected(u8),
    /// The staged selection was dropped.
    SelectionCleared,
    /// A mark was placed; play passed to `next`.
    Moved {
        player: Player,
        coord: Coord,
        next: Player,
    },
    /// A mark was placed and completed `line`.
    Won { winner: Player, line: Line },
    /// A mark was placed and filled the board with no line.
    Drawn { player: Player, coord: Coord },
    /// The cooldown elapsed; a fresh round started.
    Reset { opener: Player },
    /// The input was rejected; nothing changed on the board.
    Rejected(CommandError),
}

/// One running game session: core state plus event/frame bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Frame announcing the current mover, sent once at startup so a display
    /// that connected before the first move shows the opener.
    pub fn opening_frame(&self) -> u8 {
        self.state.current_player().id()
    }

    /// Apply a keyboard action.
    pub fn handle(&mut self, action: InputAction) -> SessionEvent {
        match action {
            InputAction::Select(index) => match self.state.select(index) {
                Ok(()) => SessionEvent::Selected(index),
                Err(err) => SessionEvent::Rejected(err),
            },
            InputAction::Confirm => self.confirm(),
            InputAction::ClearSelection => {
                self.state.clear_selection();
                SessionEvent::SelectionCleared
            }
        }
    }

    /// Apply a device button press (same commit path as keyboard Enter).
    pub fn press_button(&mut self) -> SessionEvent {
        self.confirm()
    }

    fn confirm(&mut self) -> SessionEvent {
        // The placement coord is gone from the state by the time confirm
        // returns (selection clears), so capture it up front.
        let staged = self
            .state
            .selected()
            .and_then(|index| Coord::from_index(index as usize));
        let mover = self.state.current_player();

        match self.state.confirm() {
            Ok(ConfirmOutcome::Placed { next }) => SessionEvent::Moved {
                player: mover,
                coord: staged.unwrap_or(Coord::new(0, 0, 0)),
                next,
            },
            Ok(ConfirmOutcome::Won { winner, line }) => SessionEvent::Won { winner, line },
            Ok(ConfirmOutcome::Drawn) => SessionEvent::Drawn {
                player: mover,
                coord: staged.unwrap_or(Coord::new(0, 0, 0)),
            },
            Err(err) => SessionEvent::Rejected(err),
        }
    }

    /// Advance the clock; yields the reset event when the cooldown elapses.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<SessionEvent> {
        if self.state.tick(elapsed_ms) {
            Some(SessionEvent::Reset {
                opener: self.state.current_player(),
            })
        } else {
            None
        }
    }

    /// Status frames owed to the display for `event`.
    ///
    /// Turn change: the new mover's id. Win: [`STATUS_FLASH_REPEATS`] pairs
    /// of (sentinel, winner id). Reset: the opener's id. Everything else is
    /// silent, including a draw, which has no device vocabulary.
    pub fn status_frames(event: &SessionEvent) -> StatusBurst {
        let mut frames = StatusBurst::new();
        match event {
            SessionEvent::Moved { next, .. } => frames.push(next.id()),
            SessionEvent::Won { winner, .. } => {
                for _ in 0..STATUS_FLASH_REPEATS {
                    frames.push(STATUS_FLASH_SENTINEL);
                    frames.push(winner.id());
                }
            }
            SessionEvent::Reset { opener } => frames.push(opener.id()),
            SessionEvent::Selected(_)
            | SessionEvent::SelectionCleared
            | SessionEvent::Drawn { .. }
            | SessionEvent::Rejected(_) => {}
        }
        frames
    }
}
