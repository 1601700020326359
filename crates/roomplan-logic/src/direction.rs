//! Four-way facing directions.
//!
//! The cycle order north → east → south → west is used everywhere a
//! direction is turned: footprint rotation, marker glyph remapping and
//! "back wall" lookup.

use serde::{Deserialize, Serialize};

/// A compass direction, also used to name the four room walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in clockwise cycle order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Position in the clockwise cycle (north = 0).
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Direction at `index` in the cycle, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// One clockwise quarter-turn.
    pub fn rotated_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// 180° around the cycle.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Clockwise quarter-turns needed to go from `self` to `to`.
    pub fn quarter_turns_to(self, to: Direction) -> usize {
        (to.index() + 4 - self.index()) % 4
    }

    /// Arrow glyph used for the directional marker cell.
    pub fn glyph(self) -> char {
        match self {
            Direction::North => '↑',
            Direction::East => '→',
            Direction::South => '↓',
            Direction::West => '←',
        }
    }

    /// Inverse of [`Direction::glyph`].
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.glyph() == glyph)
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
