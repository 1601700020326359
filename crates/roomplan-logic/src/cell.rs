//! Cell values stored in layout grids and footprint bitmaps.

use crate::direction::Direction;
use serde::{Deserialize, Serialize};

/// Glyph for a wall cell.
pub const WALL_GLYPH: char = '#';
/// Glyph for an opening clearance cell.
pub const CLEARANCE_GLYPH: char = '━';
/// Glyph for a furniture buffer cell.
pub const BUFFER_GLYPH: char = '.';

/// Door or window cut into a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    pub fn glyph(self) -> char {
        match self {
            OpeningKind::Door => 'D',
            OpeningKind::Window => 'W',
        }
    }
}

/// One grid (or footprint) cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
    Opening(OpeningKind),
    /// Interior clearance strip in front of an opening.
    Clearance,
    /// Furniture buffer zone.
    Buffer,
    /// Furniture core cell carrying the item's symbol.
    Furniture(char),
    /// Directional marker: the one core cell showing which way an item faces.
    Facing(Direction),
    /// Walker simulation occupant.
    Walker(char),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => WALL_GLYPH,
            Cell::Opening(kind) => kind.glyph(),
            Cell::Clearance => CLEARANCE_GLYPH,
            Cell::Buffer => BUFFER_GLYPH,
            Cell::Furniture(symbol) | Cell::Walker(symbol) => symbol,
            Cell::Facing(direction) => direction.glyph(),
        }
    }

    /// The value this cell takes after one clockwise quarter-turn.
    /// Only directional markers change.
    pub fn rotated_cw(self) -> Self {
        match self {
            Cell::Facing(direction) => Cell::Facing(direction.rotated_cw()),
            other => other,
        }
    }

    /// True for glyphs the engine itself paints, which furniture symbols
    /// must not reuse.
    pub fn is_reserved_glyph(glyph: char) -> bool {
        matches!(glyph, ' ' | WALL_GLYPH | CLEARANCE_GLYPH | BUFFER_GLYPH | 'D' | 'W')
            || Direction::from_glyph(glyph).is_some()
    }
}

/// Annotation colour carried alongside the layout grid for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colour {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Colour {
    /// Colour used for perimeter walls.
    pub const WALL: Colour = Colour::Magenta;
    /// Colour used for openings and their clearance strips.
    pub const OPENING: Colour = Colour::Cyan;
}
