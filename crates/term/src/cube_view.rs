//! CubeView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The 3x3x3 cube is drawn as its three
//! z-layers side by side; depth is a pane, not a projection:
//!
//! ```text
//! z=0            z=1            z=2
//! [X] [ ] [ ]    [ ] [O] [ ]    [ ] [ ] [T]
//! [ ] [ ] [ ]    [ ] [ ] [ ]    [ ] [ ] [ ]
//! [ ] [ ] [ ]    [ ] [ ] [ ]    [ ] [ ] [ ]
//! ```
//!
//! The staged selection is highlighted, the winning line lights up after a
//! win, and a status strip below the panes carries the turn, round outcome,
//! and key help.

use tui_cubic_core::GameSnapshot;
use tui_cubic_types::{Coord, Player, GRID_SIZE};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Width of one rendered cell (`[X]`).
const CELL_W: u16 = 3;
/// Horizontal gap between cells.
const CELL_GAP: u16 = 1;
/// One pane: three cells and two gaps.
const PANE_W: u16 = GRID_SIZE as u16 * CELL_W + (GRID_SIZE as u16 - 1) * CELL_GAP;
/// Gap between layer panes.
const PANE_GAP: u16 = 4;
/// Full board strip: three panes and two gaps.
const BOARD_W: u16 = 3 * PANE_W + 2 * PANE_GAP;
/// Header + three cell rows + blank + three status lines.
const BLOCK_H: u16 = 8;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the cube board.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubeView;

impl CubeView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        bridge_online: bool,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let start_x = viewport.width.saturating_sub(BOARD_W) / 2;
        let start_y = viewport.height.saturating_sub(BLOCK_H) / 2;

        let header = CellStyle {
            fg: Rgb::new(140, 140, 150),
            ..CellStyle::default()
        };

        for pane in 0..3u16 {
            let pane_x = start_x + pane * (PANE_W + PANE_GAP);
            fb.put_str(pane_x, start_y, &format!("z={}", pane), header);

            for y in 0..GRID_SIZE as u16 {
                for x in 0..GRID_SIZE as u16 {
                    let coord = Coord::new(x as i8, y as i8, pane as i8);
                    // Loop coords are always in bounds.
                    let index = coord.index().unwrap_or(0);
                    let cell_x = pane_x + x * (CELL_W + CELL_GAP);
                    let cell_y = start_y + 1 + y;
                    self.draw_cell(fb, cell_x, cell_y, snap, index);
                }
            }
        }

        self.draw_status(fb, start_x, start_y + 5, snap, bridge_online);
    }

    /// Convenience wrapper allocating a fresh framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        viewport: Viewport,
        bridge_online: bool,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, bridge_online, &mut fb);
        fb
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        snap: &GameSnapshot,
        index: usize,
    ) {
        let owner = Player::from_id(snap.cell_id(index));
        let selected = snap.selected == Some(index as u8);
        let winning = snap.on_win_line(index);

        let mut style = CellStyle {
            fg: owner.map(player_color).unwrap_or(Rgb::new(90, 90, 100)),
            ..CellStyle::default()
        };
        if selected {
            style.bg = Rgb::new(60, 60, 95);
            style.bold = true;
        }
        if winning {
            style.bg = Rgb::new(30, 110, 45);
            style.bold = true;
        }

        let mark = owner.map(|p| p.mark()).unwrap_or(' ');
        fb.put_char(x, y, '[', style);
        fb.put_char(x + 1, y, mark, style);
        fb.put_char(x + 2, y, ']', style);
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        snap: &GameSnapshot,
        bridge_online: bool,
    ) {
        let accent = CellStyle {
            fg: player_color(snap.current),
            bold: true,
            ..CellStyle::default()
        };
        let plain = CellStyle::default();
        let dim = CellStyle {
            fg: Rgb::new(120, 120, 130),
            ..CellStyle::default()
        };

        let headline = if let Some(winner) = snap.winner {
            format!(
                "Player {} ({}) wins! Next round in {}s",
                winner.id(),
                winner.mark(),
                cooldown_secs(snap.cooldown_ms)
            )
        } else if snap.draw {
            format!(
                "Draw - cube is full. Next round in {}s",
                cooldown_secs(snap.cooldown_ms)
            )
        } else {
            format!(
                "Player {} ({}) to move",
                snap.current.id(),
                snap.current.mark()
            )
        };
        let headline_style = if snap.winner.is_some() {
            CellStyle {
                fg: player_color(snap.winner.unwrap_or(snap.current)),
                bold: true,
                ..CellStyle::default()
            }
        } else if snap.draw {
            plain
        } else {
            accent
        };
        fb.put_str(x, y, &headline, headline_style);

        let selection = match snap.selected.and_then(|i| Coord::from_index(i as usize)) {
            Some(coord) => format!("Selected {} - Enter or button to place", coord),
            None => String::from("No cell selected"),
        };
        fb.put_str(x, y + 1, &selection, plain);

        let bridge = if bridge_online { "on" } else { "off" };
        let help = format!(
            "Round {} | bridge {} | Enter confirm  Backspace clear  Esc quit",
            snap.round + 1,
            bridge
        );
        fb.put_str(x, y + 2, &help, dim);
    }
}

fn cooldown_secs(cooldown_ms: u32) -> u32 {
    cooldown_ms.div_ceil(1000)
}

fn player_color(player: Player) -> Rgb {
    match player {
        Player::One => Rgb::new(225, 95, 95),
        Player::Two => Rgb::new(225, 205, 95),
        Player::Three => Rgb::new(105, 165, 235),
    }
}
