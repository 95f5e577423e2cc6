//! Winning-line catalog - the 49 lines embedded in the 3x3x3 cube
//!
//! A winning line is a set of 3 distinct cells that, when all owned by one
//! player, ends the round. The cube contains exactly 49:
//!
//! - 27 axis-aligned runs (9 along each of the X, Y, and Z axes),
//! - 4 space diagonals (corner to corner through the center),
//! - 18 planar diagonals (2 per plane, 9 planes across the three families).
//!
//! The catalog is generated once at compile time by a small geometric
//! generator rather than written out as 49 literals, which removes the
//! copy-paste risk a literal table carries. Catalog order is part of the
//! contract: the detector reports the *first* completed line in this order,
//! so the order must stay stable. It enumerates X-runs (outer z, inner y),
//! Y-runs (outer z, inner x), Z-runs (outer y, inner x), space diagonals,
//! then planar diagonals by plane family (fixed-z, fixed-y, fixed-x planes;
//! main diagonal before anti-diagonal in each plane).

use tui_cubic_types::{Coord, LINE_COUNT};

/// One winning line: three distinct in-bounds cells.
pub type Line = [Coord; 3];

/// The complete, immutable catalog of winning lines.
pub const WIN_LINES: [Line; LINE_COUNT] = build_catalog();

const fn build_catalog() -> [Line; LINE_COUNT] {
    let origin = Coord::new(0, 0, 0);
    let mut lines: [Line; LINE_COUNT] = [[origin; 3]; LINE_COUNT];
    let mut n = 0;

    // Axis-aligned runs along X.
    let mut z = 0i8;
    while z < 3 {
        let mut y = 0i8;
        while y < 3 {
            lines[n] = [
                Coord::new(0, y, z),
                Coord::new(1, y, z),
                Coord::new(2, y, z),
            ];
            n += 1;
            y += 1;
        }
        z += 1;
    }

    // Axis-aligned runs along Y.
    let mut z = 0i8;
    while z < 3 {
        let mut x = 0i8;
        while x < 3 {
            lines[n] = [
                Coord::new(x, 0, z),
                Coord::new(x, 1, z),
                Coord::new(x, 2, z),
            ];
            n += 1;
            x += 1;
        }
        z += 1;
    }

    // Axis-aligned runs along Z.
    let mut y = 0i8;
    while y < 3 {
        let mut x = 0i8;
        while x < 3 {
            lines[n] = [
                Coord::new(x, y, 0),
                Coord::new(x, y, 1),
                Coord::new(x, y, 2),
            ];
            n += 1;
            x += 1;
        }
        y += 1;
    }

    // Space diagonals: every corner pairing through the center cell.
    let mut ez = 0i8;
    while ez < 4 {
        let z_end = (ez / 2) * 2;
        let y_end = (ez % 2) * 2;
        lines[n] = [
            Coord::new(0, y_end, z_end),
            Coord::new(1, 1, 1),
            Coord::new(2, 2 - y_end, 2 - z_end),
        ];
        n += 1;
        ez += 1;
    }

    // Planar diagonals in fixed-z planes.
    let mut z = 0i8;
    while z < 3 {
        lines[n] = [
            Coord::new(0, 0, z),
            Coord::new(1, 1, z),
            Coord::new(2, 2, z),
        ];
        lines[n + 1] = [
            Coord::new(2, 0, z),
            Coord::new(1, 1, z),
            Coord::new(0, 2, z),
        ];
        n += 2;
        z += 1;
    }

    // Planar diagonals in fixed-y planes.
    let mut y = 0i8;
    while y < 3 {
        lines[n] = [
            Coord::new(0, y, 0),
            Coord::new(1, y, 1),
            Coord::new(2, y, 2),
        ];
        lines[n + 1] = [
            Coord::new(2, y, 0),
            Coord::new(1, y, 1),
            Coord::new(0, y, 2),
        ];
        n += 2;
        y += 1;
    }

    // Planar diagonals in fixed-x planes.
    let mut x = 0i8;
    while x < 3 {
        lines[n] = [
            Coord::new(x, 0, 0),
            Coord::new(x, 1, 1),
            Coord::new(x, 2, 2),
        ];
        lines[n + 1] = [
            Coord::new(x, 0, 2),
            Coord::new(x, 1, 1),
            Coord::new(x, 2, 0),
        ];
        n += 2;
        x += 1;
    }

    lines
}
