//! First-fit furniture placement.
//!
//! Algorithm, per item, in input order:
//! 1. Rotate the canonical footprint to the item's facing direction
//! 2. Scan top-left origins row-major over `[0, length-1) × [0, width-1)`
//! 3. Reject origins where any non-empty footprint cell would land on a
//!    non-empty grid cell, or where the footprint leaves the grid
//! 4. If the item must touch a wall, reject origins whose back edge is not
//!    entirely on empty cells one step inside the wall behind it
//! 5. Stamp the footprint onto a copy of the grid and reject the origin if
//!    the west↔east corridor is gone
//! 6. Commit the first surviving origin; otherwise mark the item unplaced
//!
//! Placement is greedy and order-dependent: each item sees the grid left by
//! the items before it.

use crate::cell::Cell;
use crate::connectivity::has_left_to_right_path;
use crate::direction::Direction;
use crate::error::Result;
use crate::footprint::{Footprint, FurnitureSpec};
use crate::grid::Grid;
use crate::room::Room;
use crate::rotation::rotate;
use serde::Serialize;
use std::collections::HashSet;

/// Where an item ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlacementStatus {
    /// Committed with the footprint's top-left corner at `(x, y)`.
    Placed { x: usize, y: usize, facing: Direction },
    /// No origin passed every check.
    Unplaced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementOutcome {
    pub name: String,
    #[serde(flatten)]
    pub status: PlacementStatus,
}

impl PlacementOutcome {
    pub fn is_placed(&self) -> bool {
        matches!(self.status, PlacementStatus::Placed { .. })
    }

    pub fn origin(&self) -> Option<(usize, usize)> {
        match self.status {
            PlacementStatus::Placed { x, y, .. } => Some((x, y)),
            PlacementStatus::Unplaced => None,
        }
    }
}

/// Why a candidate origin was turned down. Only used for debug logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    NotAgainstWall,
    BlocksCorridor,
}

/// Placed/unplaced summary of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutReport {
    pub placed: Vec<String>,
    pub unplaced: Vec<String>,
}

impl LayoutReport {
    pub fn from_outcomes(outcomes: &[PlacementOutcome]) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            if outcome.is_placed() {
                report.placed.push(outcome.name.clone());
            } else {
                report.unplaced.push(outcome.name.clone());
            }
        }
        report
    }

    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Greedy first-fit placement engine.
#[derive(Debug, Clone, Default)]
pub struct PlacementEngine {
    trials: usize,
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trial placements (corridor checks) run so far.
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Place every item in order. Unplaceable items are reported, not errors.
    pub fn place_all(
        &mut self,
        room: &mut Room,
        items: &[FurnitureSpec],
    ) -> Result<Vec<PlacementOutcome>> {
        let mut outcomes = Vec::with_capacity(items.len());
        for item in items {
            let outcome = self.place_one(room, item)?;
            if !outcome.is_placed() {
                log::warn!("Could not place {}", item.name);
            }
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    /// Place a single item on the room's current grid.
    pub fn place_one(
        &mut self,
        room: &mut Room,
        item: &FurnitureSpec,
    ) -> Result<PlacementOutcome> {
        let footprint = rotate(item.footprint(), Direction::North, item.facing);
        let thickness = room.wall_thickness();

        let wall_tiles = if item.must_touch_wall {
            Some(open_wall_tiles(&room.layout, thickness, item.facing.opposite())?)
        } else {
            None
        };
        let back_edge = footprint.back_edge(item.facing);

        let scan_length = room.length().saturating_sub(1);
        let scan_width = room.width().saturating_sub(1);
        for y in 0..scan_length {
            for x in 0..scan_width {
                if !fits(&room.layout, &footprint, x, y)? {
                    continue;
                }
                if let Some(tiles) = &wall_tiles {
                    let flush = back_edge
                        .iter()
                        .all(|&(r, c)| tiles.contains(&(x + c, y + r)));
                    if !flush {
                        log::debug!(
                            "{} at ({}, {}): {:?}",
                            item.name,
                            x,
                            y,
                            Rejection::NotAgainstWall
                        );
                        continue;
                    }
                }

                let mut trial = room.layout.clone();
                stamp(&mut trial, &footprint, x, y)?;
                self.trials += 1;
                if !has_left_to_right_path(&trial, thickness) {
                    log::debug!(
                        "{} at ({}, {}): {:?}",
                        item.name,
                        x,
                        y,
                        Rejection::BlocksCorridor
                    );
                    continue;
                }

                room.layout = trial;
                for (r, c, cell) in footprint.iter() {
                    if !cell.is_empty() {
                        room.colours.set(x + c, y + r, Some(item.colour))?;
                    }
                }
                log::info!("Placed {} at ({}, {}) facing {}", item.name, x, y, item.facing);
                return Ok(PlacementOutcome {
                    name: item.name.clone(),
                    status: PlacementStatus::Placed {
                        x,
                        y,
                        facing: item.facing,
                    },
                });
            }
        }

        log::debug!("{}: no origin left after {} trial(s)", item.name, self.trials);
        Ok(PlacementOutcome {
            name: item.name.clone(),
            status: PlacementStatus::Unplaced,
        })
    }
}

/// Non-destructive overlap test: every footprint cell must land inside the
/// grid, and every non-empty footprint cell must land on an empty grid cell.
fn fits(grid: &Grid<Cell>, footprint: &Footprint, x: usize, y: usize) -> Result<bool> {
    for (r, c, cell) in footprint.iter() {
        let (gx, gy) = (x + c, y + r);
        if !grid.contains(gx, gy) {
            return Ok(false);
        }
        if !cell.is_empty() && !grid.is_empty_cell(gx, gy)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Write the footprint's non-empty cells. Empty footprint cells never
/// overwrite what is already on the grid.
fn stamp(grid: &mut Grid<Cell>, footprint: &Footprint, x: usize, y: usize) -> Result<()> {
    for (r, c, cell) in footprint.iter() {
        if !cell.is_empty() {
            grid.set(x + c, y + r, cell)?;
        }
    }
    Ok(())
}

/// Empty cells one step inside `wall`.
pub fn open_wall_tiles(
    grid: &Grid<Cell>,
    thickness: usize,
    wall: Direction,
) -> Result<HashSet<(usize, usize)>> {
    let (w, l) = (grid.width(), grid.length());
    let line: Vec<(usize, usize)> = match wall {
        Direction::North => (0..w).map(|x| (x, thickness)).collect(),
        Direction::South => match l.checked_sub(thickness + 1) {
            Some(y) => (0..w).map(|x| (x, y)).collect(),
            None => Vec::new(),
        },
        Direction::West => (0..l).map(|y| (thickness, y)).collect(),
        Direction::East => match w.checked_sub(thickness + 1) {
            Some(x) => (0..l).map(|y| (x, y)).collect(),
            None => Vec::new(),
        },
    };

    let mut tiles = HashSet::new();
    for (x, y) in line {
        if grid.contains(x, y) && grid.is_empty_cell(x, y)? {
            tiles.insert((x, y));
        }
    }
    Ok(tiles)
}
