//! Random-walk occupant simulation.
//!
//! A walker occupies one grid cell and, on each step, moves to a uniformly
//! chosen empty cell among its eight neighbours. The grid is always passed in
//! explicitly; the walker keeps no reference to it.

use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    pub name: String,
    pub symbol: char,
    pub x: usize,
    pub y: usize,
}

impl Walker {
    /// Put a walker on `(x, y)`. Returns `None` if the cell is occupied.
    pub fn spawn(
        grid: &mut Grid<Cell>,
        name: impl Into<String>,
        symbol: char,
        x: usize,
        y: usize,
    ) -> Result<Option<Self>> {
        if !grid.is_empty_cell(x, y)? {
            return Ok(None);
        }
        grid.set(x, y, Cell::Walker(symbol))?;
        Ok(Some(Self {
            name: name.into(),
            symbol,
            x,
            y,
        }))
    }

    /// Put a walker on a random empty cell, if there is one.
    pub fn spawn_anywhere(
        grid: &mut Grid<Cell>,
        name: impl Into<String>,
        symbol: char,
        rng: &mut impl Rng,
    ) -> Result<Option<Self>> {
        let free: Vec<(usize, usize)> = grid
            .iter()
            .filter(|(_, _, cell)| cell.is_empty())
            .map(|(x, y, _)| (x, y))
            .collect();
        if free.is_empty() {
            return Ok(None);
        }
        let (x, y) = free[rng.gen_range(0..free.len())];
        Self::spawn(grid, name, symbol, x, y)
    }

    /// Move one step. Returns `false` if every neighbour is occupied, in
    /// which case the walker stays where it is.
    pub fn step(&mut self, grid: &mut Grid<Cell>, rng: &mut impl Rng) -> Result<bool> {
        let options = grid.empty_neighbours8(self.x, self.y);
        if options.is_empty() {
            return Ok(false);
        }
        let (nx, ny) = options[rng.gen_range(0..options.len())];
        grid.set(self.x, self.y, Cell::Empty)?;
        grid.set(nx, ny, Cell::Walker(self.symbol))?;
        self.x = nx;
        self.y = ny;
        Ok(true)
    }

    /// Take up to `steps` steps, stopping early if boxed in. Returns the
    /// number of moves made.
    pub fn walk(
        &mut self,
        grid: &mut Grid<Cell>,
        steps: usize,
        rng: &mut impl Rng,
    ) -> Result<usize> {
        let mut moved = 0;
        for _ in 0..steps {
            if !self.step(grid, rng)? {
                log::debug!("{} is boxed in at ({}, {})", self.name, self.x, self.y);
                break;
            }
            moved += 1;
        }
        Ok(moved)
    }
}
