//! Bounds-checked 2D cell container.
//!
//! `Grid<T>` stores `width × length` values row-major. Dimensions are fixed at
//! construction and every `get`/`set` is bounds-checked, returning
//! [`LayoutError::OutOfBounds`] instead of panicking. `Clone` is a deep copy,
//! which the placement engine relies on for trial placements.

use crate::cell::Cell;
use crate::error::{LayoutError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    length: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Grid of `fill` everywhere.
    pub fn new(width: usize, length: usize, fill: T) -> Self {
        Self {
            width,
            length,
            cells: vec![fill; width * length],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.length
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if self.contains(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(LayoutError::OutOfBounds {
                x,
                y,
                width: self.width,
                length: self.length,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&T> {
        let i = self.index(x, y)?;
        Ok(&self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = value;
        Ok(())
    }

    /// Iterate `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, v)| (i % width, i / width, v))
    }

    /// All rows top to bottom, each as a slice.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Visit every cell mutably with its coordinates, row-major.
    pub fn for_each_mut(&mut self, mut f: impl FnMut(usize, usize, &mut T)) {
        let width = self.width;
        for (i, v) in self.cells.iter_mut().enumerate() {
            f(i % width, i / width, v);
        }
    }

    /// Same-sized grid built from each cell and its coordinates.
    pub fn map<U>(&self, f: impl Fn(usize, usize, &T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            length: self.length,
            cells: self.iter().map(|(x, y, v)| f(x, y, v)).collect(),
        }
    }

    /// Number of cells matching `pred`.
    pub fn count(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.cells.iter().filter(|v| pred(*v)).count()
    }
}

impl Grid<Cell> {
    /// Grid filled with [`Cell::Empty`].
    pub fn empty(width: usize, length: usize) -> Self {
        Self::new(width, length, Cell::Empty)
    }

    /// True iff the cell at `(x, y)` is the empty marker.
    pub fn is_empty_cell(&self, x: usize, y: usize) -> Result<bool> {
        Ok(self.get(x, y)?.is_empty())
    }

    /// Empty cells among the 4 orthogonal neighbours of `(x, y)`.
    pub fn empty_neighbours4(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.neighbours(x, y, &NEIGHBOURS_4)
    }

    /// Empty cells among the 8 surrounding neighbours of `(x, y)`.
    pub fn empty_neighbours8(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        self.neighbours(x, y, &NEIGHBOURS_8)
    }

    fn neighbours(&self, x: usize, y: usize, offsets: &[(isize, isize)]) -> Vec<(usize, usize)> {
        offsets
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                match self.get(nx, ny) {
                    Ok(cell) if cell.is_empty() => Some((nx, ny)),
                    _ => None,
                }
            })
            .collect()
    }
}

const NEIGHBOURS_4: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const NEIGHBOURS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];
