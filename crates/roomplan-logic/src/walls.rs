//! Perimeter walls and wall openings.
//!
//! Coordinates are grid cells. A room with interior `w × l` and wall
//! thickness `T` lives in a grid of `(w + 2T) × (l + 2T)`; opening positions
//! are measured along the interior span of their wall, so position 0 is the
//! first cell past the corner block.

use crate::cell::{Cell, OpeningKind};
use crate::direction::Direction;
use crate::error::{LayoutError, OpeningRejection, Result};
use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// A door or window: which wall, where along it, how wide, and how deep its
/// interior clearance strip is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opening {
    pub wall: Direction,
    pub position: usize,
    pub size: usize,
    /// Depth of the interior clearance strip.
    pub buffer: usize,
}

/// Cells painted by a successful [`place_opening`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningCells {
    pub opening: Vec<(usize, usize)>,
    pub clearance: Vec<(usize, usize)>,
}

/// Half-open cell rectangle `[x0, x1) × [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl Rect {
    fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (self.y0..self.y1).flat_map(move |y| (self.x0..self.x1).map(move |x| (x, y)))
    }
}

/// Mark every cell within `thickness` of any grid edge as [`Cell::Wall`].
/// Interior cells are left untouched. Returns the number of wall cells.
pub fn place_walls(grid: &mut Grid<Cell>, thickness: usize) -> usize {
    let (w, l) = (grid.width(), grid.length());
    let mut painted = 0;
    grid.for_each_mut(|x, y, cell| {
        let is_wall = x < thickness
            || x.saturating_add(thickness) >= w
            || y < thickness
            || y.saturating_add(thickness) >= l;
        if is_wall {
            *cell = Cell::Wall;
            painted += 1;
        }
    });
    painted
}

fn opening_rect(grid: &Grid<Cell>, thickness: usize, opening: &Opening) -> Rect {
    let (w, l) = (grid.width(), grid.length());
    let start = opening.position.saturating_add(thickness);
    let end = start.saturating_add(opening.size);
    match opening.wall {
        Direction::North => Rect {
            x0: start,
            y0: 0,
            x1: end,
            y1: thickness,
        },
        Direction::South => Rect {
            x0: start,
            y0: l.saturating_sub(thickness),
            x1: end,
            y1: l,
        },
        Direction::West => Rect {
            x0: 0,
            y0: start,
            x1: thickness,
            y1: end,
        },
        Direction::East => Rect {
            x0: w.saturating_sub(thickness),
            y0: start,
            x1: w,
            y1: end,
        },
    }
}

/// Interior clearance strip in front of `rect`, clipped to the interior.
fn clearance_rect(
    grid: &Grid<Cell>,
    thickness: usize,
    wall: Direction,
    rect: Rect,
    depth: usize,
) -> Rect {
    let (w, l) = (grid.width(), grid.length());
    let inner_x1 = w.saturating_sub(thickness);
    let inner_y1 = l.saturating_sub(thickness);
    match wall {
        Direction::North => Rect {
            y0: thickness,
            y1: thickness.saturating_add(depth).min(inner_y1),
            ..rect
        },
        Direction::South => Rect {
            y0: inner_y1.saturating_sub(depth).max(thickness),
            y1: inner_y1,
            ..rect
        },
        Direction::West => Rect {
            x0: thickness,
            x1: thickness.saturating_add(depth).min(inner_x1),
            ..rect
        },
        Direction::East => Rect {
            x0: inner_x1.saturating_sub(depth).max(thickness),
            x1: inner_x1,
            ..rect
        },
    }
}

fn check_opening(
    grid: &Grid<Cell>,
    thickness: usize,
    opening: &Opening,
    rect: Rect,
) -> std::result::Result<(), OpeningRejection> {
    let (w, l) = (grid.width(), grid.length());
    if rect.x1 > w || rect.y1 > l {
        return Err(OpeningRejection::OutOfBounds);
    }
    if rect.x0 >= rect.x1 || rect.y0 >= rect.y1 {
        return Err(OpeningRejection::ZeroExtent);
    }
    // Corner blocks are the T×T squares where two walls meet.
    let touches_corner = match opening.wall {
        Direction::North | Direction::South => {
            rect.x0 < thickness || rect.x1 > w.saturating_sub(thickness)
        }
        Direction::West | Direction::East => {
            rect.y0 < thickness || rect.y1 > l.saturating_sub(thickness)
        }
    };
    if touches_corner {
        return Err(OpeningRejection::Corner);
    }
    Ok(())
}

/// Cut `opening` into its wall and paint its clearance strip.
///
/// Fails with [`LayoutError::InvalidOpening`], leaving the grid unchanged,
/// if the rectangle leaves the grid, has zero extent, or touches a corner.
/// The clearance strip only paints cells that are still empty.
pub fn place_opening(
    grid: &mut Grid<Cell>,
    thickness: usize,
    opening: &Opening,
    kind: OpeningKind,
) -> Result<OpeningCells> {
    let rect = opening_rect(grid, thickness, opening);
    check_opening(grid, thickness, opening, rect).map_err(|reason| LayoutError::InvalidOpening {
        wall: opening.wall,
        position: opening.position,
        reason,
    })?;

    let mut painted = OpeningCells::default();
    for (x, y) in rect.cells() {
        grid.set(x, y, Cell::Opening(kind))?;
        painted.opening.push((x, y));
    }

    let strip = clearance_rect(grid, thickness, opening.wall, rect, opening.buffer);
    for (x, y) in strip.cells() {
        if grid.is_empty_cell(x, y)? {
            grid.set(x, y, Cell::Clearance)?;
            painted.clearance.push((x, y));
        }
    }
    Ok(painted)
}
