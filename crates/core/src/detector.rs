//! Win detector - first-match evaluation over the line catalog
//!
//! The detector answers one question: after a move, does the mover own all
//! three cells of any winning line? It scans the 49-line catalog in order and
//! returns the first complete line. The scan is intentionally a flat linear
//! pass (at most 49 x 3 cell reads) rather than incremental bookkeeping: the
//! board is tiny and evaluated once per move, and the auditability of the
//! catalog matters far more than shaving reads.
//!
//! `check_win` is a pure function of the board contents and the queried
//! player: no hidden state, safe to call repeatedly and from multiple threads
//! on a shared board reference.

use tui_cubic_types::{Player, LINE_COUNT};

use crate::board::Board;
use crate::lines::{Line, WIN_LINES};

/// Evaluates boards against the frozen 49-line catalog.
#[derive(Debug, Clone, Copy)]
pub struct WinDetector {
    catalog: &'static [Line; LINE_COUNT],
}

impl WinDetector {
    /// Create a detector over the process-wide catalog.
    pub fn new() -> Self {
        Self {
            catalog: &WIN_LINES,
        }
    }

    /// The catalog this detector scans, in scan order.
    pub fn catalog(&self) -> &[Line] {
        self.catalog
    }

    /// Return the first line fully owned by `player`, if any.
    ///
    /// A line can only transition to complete on the move that fills its
    /// third cell, so between a reset and a win there is at most one hit; the
    /// full scan still runs so stale multi-line boards report
    /// deterministically.
    pub fn check_win(&self, board: &Board, player: Player) -> Option<Line> {
        self.catalog
            .iter()
            .copied()
            .find(|line| line.iter().all(|&coord| board.owned_by(coord, player)))
    }
}

impl Default for WinDetector {
    fn default() -> Self {
        Self::new()
    }
}
