//! Room assembly: the layout grid, its colour annotation, and the openings
//! that were cut (or refused).

use crate::cell::{Cell, Colour, OpeningKind};
use crate::config::{grid_size, ConfigIssue, RoomConfig};
use crate::error::{LayoutError, Result};
use crate::grid::Grid;
use crate::walls::{self, Opening};

/// An opening that could not be cut, kept for reporting.
#[derive(Debug)]
pub struct SkippedOpening {
    pub kind: OpeningKind,
    pub opening: Opening,
    pub error: LayoutError,
}

/// A walled room ready for furniture placement.
#[derive(Debug, Clone)]
pub struct Room {
    pub layout: Grid<Cell>,
    /// Renderer-only annotation; the engine never reads it.
    pub colours: Grid<Option<Colour>>,
    wall_thickness: usize,
    interior_width: usize,
    interior_length: usize,
}

impl Room {
    /// Empty room of the given interior size with its perimeter walls painted.
    ///
    /// The full grid must fit in `usize`; [`validate_config`] rejects
    /// configurations that would not.
    ///
    /// [`validate_config`]: crate::config::validate_config
    pub fn new(interior_width: usize, interior_length: usize, wall_thickness: usize) -> Self {
        let width = interior_width + 2 * wall_thickness;
        let length = interior_length + 2 * wall_thickness;
        let mut layout = Grid::empty(width, length);
        walls::place_walls(&mut layout, wall_thickness);
        let colours = layout.map(|_, _, cell| (*cell == Cell::Wall).then_some(Colour::WALL));
        Self {
            layout,
            colours,
            wall_thickness,
            interior_width,
            interior_length,
        }
    }

    /// Build a room from configuration: walls, then windows, then doors.
    ///
    /// Openings that cannot be cut are logged and skipped; see
    /// [`Room::from_config_with_skipped`] to inspect them.
    pub fn from_config(config: &RoomConfig) -> Result<Self> {
        Self::from_config_with_skipped(config).map(|(room, _)| room)
    }

    pub fn from_config_with_skipped(config: &RoomConfig) -> Result<(Self, Vec<SkippedOpening>)> {
        if grid_size(config.width, config.length, config.wall_thickness).is_none() {
            return Err(LayoutError::ConfigValidation(vec![ConfigIssue::RoomTooLarge {
                width: config.width,
                length: config.length,
                wall_thickness: config.wall_thickness,
            }]));
        }
        let mut room = Self::new(config.width, config.length, config.wall_thickness);
        let mut skipped = Vec::new();

        let openings = config
            .windows
            .iter()
            .map(|o| (OpeningKind::Window, o))
            .chain(config.doors.iter().map(|o| (OpeningKind::Door, o)));
        for (kind, opening) in openings {
            match room.add_opening(opening, kind) {
                Ok(()) => {}
                Err(error @ LayoutError::InvalidOpening { .. }) => {
                    log::warn!("Skipping {:?}: {}", kind, error);
                    skipped.push(SkippedOpening {
                        kind,
                        opening: *opening,
                        error,
                    });
                }
                Err(other) => return Err(other),
            }
        }

        log::info!(
            "Room built: {}×{} grid, wall thickness {}, {} opening(s) skipped",
            room.width(),
            room.length(),
            room.wall_thickness,
            skipped.len()
        );
        Ok((room, skipped))
    }

    /// Cut a door or window. The grid is unchanged on error.
    pub fn add_opening(&mut self, opening: &Opening, kind: OpeningKind) -> Result<()> {
        let painted = walls::place_opening(&mut self.layout, self.wall_thickness, opening, kind)?;
        for &(x, y) in painted.opening.iter().chain(&painted.clearance) {
            self.colours.set(x, y, Some(Colour::OPENING))?;
        }
        Ok(())
    }

    /// Full grid width including walls.
    pub fn width(&self) -> usize {
        self.layout.width()
    }

    /// Full grid length including walls.
    pub fn length(&self) -> usize {
        self.layout.length()
    }

    pub fn wall_thickness(&self) -> usize {
        self.wall_thickness
    }

    pub fn interior_width(&self) -> usize {
        self.interior_width
    }

    pub fn interior_length(&self) -> usize {
        self.interior_length
    }
}
