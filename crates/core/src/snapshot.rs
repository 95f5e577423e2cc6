//! Plain-data state export for observers.
//!
//! The view and the device probe never touch live [`GameState`](crate::GameState);
//! they render from this copyable struct, which keeps the renderer a pure
//! function of its input.

use tui_cubic_types::{Player, CELL_COUNT};

/// Copyable snapshot of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Per-cell owner ids in flat `z*9 + y*3 + x` order; `0` is empty.
    pub cells: [u8; CELL_COUNT],
    pub current: Player,
    /// Cell index staged for the next confirm.
    pub selected: Option<u8>,
    /// Monotonic round counter.
    pub round: u32,
    pub round_over: bool,
    pub winner: Option<Player>,
    /// Flat indices of the completed line, when the round ended in a win.
    pub win_line: Option<[u8; 3]>,
    pub draw: bool,
    /// Remaining hold time after a finished round.
    pub cooldown_ms: u32,
}

impl GameSnapshot {
    /// Owner id at a flat cell index (`0` when empty or out of range).
    pub fn cell_id(&self, index: usize) -> u8 {
        self.cells.get(index).copied().unwrap_or(0)
    }

    /// Whether `index` is part of the winning line.
    pub fn on_win_line(&self, index: usize) -> bool {
        self.win_line
            .map(|line| line.contains(&(index as u8)))
            .unwrap_or(false)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [0; CELL_COUNT],
            current: Player::One,
            selected: None,
            round: 0,
            round_over: false,
            winner: None,
            win_line: None,
            draw: false,
            cooldown_ms: 0,
        }
    }
}
