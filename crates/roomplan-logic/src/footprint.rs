//! Canonical furniture footprints.
//!
//! A footprint is the occupancy bitmap of one furniture item in its
//! canonical (north-facing) orientation: the core rectangle, four
//! independently-sized buffer bands around it, and one directional marker.
//!
//! ```text
//!   west  core   east
//!  ┌────┬──────┬────┐
//!  │    │ .... │    │  north buffer
//!  ├────┼──────┼────┤
//!  │ .. │ ↑SSS │ .. │  core rows
//!  │ .. │ SSSS │ .. │
//!  ├────┼──────┼────┤
//!  │    │ .... │    │  south buffer
//!  └────┴──────┴────┘
//! ```
//!
//! Buffer bands never extend into the corners, so corner blocks stay empty
//! and let walls or neighbouring content show through.

use crate::cell::{Cell, Colour};
use crate::direction::Direction;
use serde::{Deserialize, Serialize};

/// Clearance on each side of a furniture core, in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffer {
    pub north: usize,
    pub east: usize,
    pub south: usize,
    pub west: usize,
}

impl Buffer {
    pub fn uniform(n: usize) -> Self {
        Self {
            north: n,
            east: n,
            south: n,
            west: n,
        }
    }
}

/// Occupancy bitmap, `rows × cols`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Footprint {
    /// Build the canonical north-facing footprint.
    ///
    /// Each position is tested against the four buffer bands (half-open,
    /// mutually exclusive), then the core rectangle. The first core cell in
    /// row-major order carries the north marker, the rest carry `symbol`.
    pub fn build(width: usize, length: usize, buffer: Buffer, symbol: char) -> Self {
        let rows = length + buffer.north + buffer.south;
        let cols = width + buffer.east + buffer.west;
        let core_rows = buffer.north..buffer.north + length;
        let core_cols = buffer.west..buffer.west + width;

        let mut cells = Vec::with_capacity(rows * cols);
        let mut marker_placed = false;
        for y in 0..rows {
            for x in 0..cols {
                let in_rows = core_rows.contains(&y);
                let in_cols = core_cols.contains(&x);
                let north = y < core_rows.start && in_cols;
                let east = x >= core_cols.end && in_rows;
                let south = y >= core_rows.end && in_cols;
                let west = x < core_cols.start && in_rows;

                let cell = if north || east || south || west {
                    Cell::Buffer
                } else if in_rows && in_cols {
                    if marker_placed {
                        Cell::Furniture(symbol)
                    } else {
                        marker_placed = true;
                        Cell::Facing(Direction::North)
                    }
                } else {
                    Cell::Empty
                };
                cells.push(cell);
            }
        }

        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Iterate `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (i / cols, i % cols, *c))
    }

    pub fn non_empty_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// The direction the marker glyph currently points, if present.
    pub fn marker(&self) -> Option<Direction> {
        self.cells.iter().find_map(|c| match c {
            Cell::Facing(d) => Some(*d),
            _ => None,
        })
    }

    /// Bitmap positions `(row, col)` of the edge opposite `facing`.
    ///
    /// Facing north the back is the last row, facing south the first row,
    /// facing east the first column, facing west the last column.
    pub fn back_edge(&self, facing: Direction) -> Vec<(usize, usize)> {
        if self.rows == 0 || self.cols == 0 {
            return Vec::new();
        }
        match facing.opposite() {
            Direction::South => (0..self.cols).map(|c| (self.rows - 1, c)).collect(),
            Direction::North => (0..self.cols).map(|c| (0, c)).collect(),
            Direction::West => (0..self.rows).map(|r| (r, 0)).collect(),
            Direction::East => (0..self.rows).map(|r| (r, self.cols - 1)).collect(),
        }
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(rows * cols, cells.len());
        Self { rows, cols, cells }
    }
}

/// A validated furniture descriptor with its canonical footprint.
#[derive(Debug, Clone)]
pub struct FurnitureSpec {
    pub name: String,
    pub width: usize,
    pub length: usize,
    pub buffer: Buffer,
    pub facing: Direction,
    pub symbol: char,
    pub colour: Colour,
    pub must_touch_wall: bool,
    /// Carried from configuration; placement validation does not read it.
    pub which_side_touches_wall: Option<Direction>,
    footprint: Footprint,
}

impl FurnitureSpec {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        width: usize,
        length: usize,
        buffer: Buffer,
        facing: Direction,
        symbol: char,
        colour: Colour,
        must_touch_wall: bool,
    ) -> Self {
        Self {
            name: name.into(),
            width,
            length,
            buffer,
            facing,
            symbol,
            colour,
            must_touch_wall,
            which_side_touches_wall: None,
            footprint: Footprint::build(width, length, buffer, symbol),
        }
    }

    pub fn with_wall_side(mut self, side: Option<Direction>) -> Self {
        self.which_side_touches_wall = side;
        self
    }

    /// Canonical north-facing footprint. Never mutated after construction.
    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }
}
