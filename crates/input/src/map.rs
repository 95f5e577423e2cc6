//! Key mapping from terminal events to input actions.
//!
//! The 27 cell keys follow the physical layout contract: three 3x3 key
//! blocks, one per cube layer, read left-to-right, top-to-bottom. The
//! position of a key in [`CELL_KEYS`] *is* the cell's flat index
//! (`z*9 + y*3 + x`), so this table must not be reordered.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::InputAction;

/// Cell keys in flat-index order.
///
/// ```text
/// layer z=0    layer z=1    layer z=2
///  q w e        r t y        u i o
///  a s d        f g h        j k l
///  z x c        v b n        m , .
/// ```
pub const CELL_KEYS: [char; 27] = [
    'q', 'w', 'e', 'a', 's', 'd', 'z', 'x', 'c', //
    'r', 't', 'y', 'f', 'g', 'h', 'v', 'b', 'n', //
    'u', 'i', 'o', 'j', 'k', 'l', 'm', ',', '.',
];

/// Flat cell index for a cell key (case-insensitive), if it is one.
pub fn cell_index_for_char(ch: char) -> Option<u8> {
    let lower = ch.to_ascii_lowercase();
    CELL_KEYS
        .iter()
        .position(|&key| key == lower)
        .map(|index| index as u8)
}

/// Map keyboard input to an input action.
///
/// Modified keys are left alone so chords like Ctrl-C stay quit signals.
pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(ch) => cell_index_for_char(ch).map(InputAction::Select),
        KeyCode::Enter => Some(InputAction::Confirm),
        KeyCode::Backspace => Some(InputAction::ClearSelection),
        _ => None,
    }
}

/// Check if the key should quit the game.
///
/// Every letter key is a cell key here, so quit lives on Esc and Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
