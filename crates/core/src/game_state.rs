//! Game state module - turn rotation, staged selection, and round lifecycle
//!
//! `GameState` is the turn manager. It owns one [`Board`] and one
//! [`WinDetector`] (explicit ownership, one instance per game session) and
//! drives the select-then-confirm move flow:
//!
//! 1. the mover stages a cell index (keyboard key, or a selection paired with
//!    the external button),
//! 2. confirm places the mark if the cell is free, otherwise rejects and the
//!    mover picks again,
//! 3. after a placement the detector runs once for the mover; a hit ends the
//!    round, a full board with no hit is a draw, anything else advances the
//!    three-way rotation.
//!
//! A finished round holds for [`ROUND_COOLDOWN_MS`] so the outcome stays
//! visible, then the board resets and Player One opens the next round.

use thiserror::Error;

use tui_cubic_types::{Coord, Player, ROUND_COOLDOWN_MS};

use crate::board::{Board, GridError};
use crate::detector::WinDetector;
use crate::lines::Line;
use crate::snapshot::GameSnapshot;

/// How a finished round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: Player, line: Line },
    Draw,
}

/// Result of a successful confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Mark placed; play passes to `next`.
    Placed { next: Player },
    /// Mark placed and it completed `line`; the round is over.
    Won { winner: Player, line: Line },
    /// Mark placed and filled the board with no line; the round is over.
    Drawn,
}

/// Caller-correctable command failures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error("cell index {0} is outside 0..=26")]
    IndexOutOfRange(u8),
    #[error("no cell is selected")]
    NothingSelected,
    #[error("cell {0} is already occupied")]
    Occupied(Coord),
    #[error("the round is over")]
    RoundOver,
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Complete state of one game session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    detector: WinDetector,
    current: Player,
    /// Cell index staged for the next confirm.
    selected: Option<u8>,
    outcome: Option<Outcome>,
    /// Remaining hold time after a finished round.
    cooldown_ms: u32,
    /// Monotonic round counter (increments on every reset).
    round: u32,
}

impl GameState {
    /// Create a fresh session: empty board, Player One to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            detector: WinDetector::new(),
            current: Player::One,
            selected: None,
            outcome: None,
            cooldown_ms: 0,
            round: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn selected(&self) -> Option<u8> {
        self.selected
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn round_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn cooldown_ms(&self) -> u32 {
        self.cooldown_ms
    }

    /// Stage the cell with flat index `index` for the next confirm.
    ///
    /// Staging is allowed on occupied cells; the conflict surfaces on
    /// confirm, mirroring how the selection hardware works (pick first,
    /// commit with the button).
    pub fn select(&mut self, index: u8) -> Result<(), CommandError> {
        if self.round_over() {
            return Err(CommandError::RoundOver);
        }
        if Coord::from_index(index as usize).is_none() {
            return Err(CommandError::IndexOutOfRange(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Drop the staged selection without placing.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Place the mover's mark on the staged cell.
    ///
    /// On any outcome (including rejection of an occupied cell) the staged
    /// selection is cleared; the next confirm needs a fresh selection.
    pub fn confirm(&mut self) -> Result<ConfirmOutcome, CommandError> {
        if self.round_over() {
            return Err(CommandError::RoundOver);
        }
        let index = self.selected.ok_or(CommandError::NothingSelected)?;
        let coord = Coord::from_index(index as usize)
            .ok_or(CommandError::IndexOutOfRange(index))?;

        if self.board.is_occupied(coord) {
            self.selected = None;
            return Err(CommandError::Occupied(coord));
        }

        let mover = self.current;
        self.board.set(coord, Some(mover))?;
        self.selected = None;

        if let Some(line) = self.detector.check_win(&self.board, mover) {
            self.outcome = Some(Outcome::Win {
                winner: mover,
                line,
            });
            self.cooldown_ms = ROUND_COOLDOWN_MS;
            return Ok(ConfirmOutcome::Won {
                winner: mover,
                line,
            });
        }

        if self.board.is_full() {
            self.outcome = Some(Outcome::Draw);
            self.cooldown_ms = ROUND_COOLDOWN_MS;
            return Ok(ConfirmOutcome::Drawn);
        }

        self.current = mover.next();
        Ok(ConfirmOutcome::Placed { next: self.current })
    }

    /// Advance time. Returns `true` when the cooldown elapsed and the board
    /// reset for a new round.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.round_over() {
            return false;
        }
        self.cooldown_ms = self.cooldown_ms.saturating_sub(elapsed_ms);
        if self.cooldown_ms > 0 {
            return false;
        }
        self.reset_round();
        true
    }

    /// Clear the board and start the next round with Player One.
    pub fn reset_round(&mut self) {
        self.board.reset();
        self.current = Player::One;
        self.selected = None;
        self.outcome = None;
        self.cooldown_ms = 0;
        self.round += 1;
    }

    /// Export plain data for the view and the probe.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut cells = [0u8; tui_cubic_types::CELL_COUNT];
        for (index, cell) in self.board.cells().iter().enumerate() {
            cells[index] = cell.map(|p| p.id()).unwrap_or(0);
        }

        let (winner, win_line, draw) = match self.outcome {
            Some(Outcome::Win { winner, line }) => {
                let mut indices = [0u8; 3];
                for (slot, coord) in indices.iter_mut().zip(line.iter()) {
                    // Catalog coords are always in bounds.
                    *slot = coord.index().unwrap_or(0) as u8;
                }
                (Some(winner), Some(indices), false)
            }
            Some(Outcome::Draw) => (None, None, true),
            None => (None, None, false),
        };

        GameSnapshot {
            cells,
            current: self.current,
            selected: self.selected,
            round: self.round,
            round_over: self.round_over(),
            winner,
            win_line,
            draw,
            cooldown_ms: self.cooldown_ms,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
