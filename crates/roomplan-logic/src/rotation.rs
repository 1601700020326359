//! Quarter-turn rotation of footprints.
//!
//! Rotation is a read-only derivation: the canonical footprint is never
//! touched and a zero-turn rotation borrows the input instead of copying it.

use crate::cell::Cell;
use crate::direction::Direction;
use crate::footprint::Footprint;
use std::borrow::Cow;

/// Rotate `footprint` from `from` to `to` by clockwise quarter-turns.
///
/// Turn count is `(index(to) - index(from) + 4) mod 4`.
pub fn rotate(footprint: &Footprint, from: Direction, to: Direction) -> Cow<'_, Footprint> {
    rotate_turns(footprint, from.quarter_turns_to(to))
}

/// Rotate `footprint` by `turns` clockwise quarter-turns (taken modulo 4).
pub fn rotate_turns(footprint: &Footprint, turns: usize) -> Cow<'_, Footprint> {
    let turns = turns % 4;
    if turns == 0 {
        return Cow::Borrowed(footprint);
    }
    let mut current = quarter_turn(footprint);
    for _ in 1..turns {
        current = quarter_turn(&current);
    }
    Cow::Owned(current)
}

/// One clockwise quarter-turn: cell `(y, x)` moves to `(x, rows - 1 - y)`
/// and dimensions transpose.
fn quarter_turn(footprint: &Footprint) -> Footprint {
    let rows = footprint.rows();
    let cols = footprint.cols();
    // new bitmap is cols × rows
    let mut cells = vec![Cell::Empty; rows * cols];
    for (y, x, cell) in footprint.iter() {
        let new_row = x;
        let new_col = rows - 1 - y;
        cells[new_row * rows + new_col] = cell.rotated_cw();
    }
    Footprint::from_parts(cols, rows, cells)
}
