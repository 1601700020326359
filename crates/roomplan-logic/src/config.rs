//! Layout configuration: room description plus furniture list.
//!
//! The configuration is a JSON document:
//!
//! ```json
//! {
//!   "room": {
//!     "width": 10, "length": 10, "wall_thickness": 1,
//!     "windows": [{ "wall": "north", "position": 2, "size": 3, "buffer": 1 }],
//!     "doors":   [{ "wall": "south", "position": 3, "size": 2, "buffer": 1 }]
//!   },
//!   "furniture": [{
//!     "name": "bed", "width": 2, "length": 3,
//!     "buffer": { "north": 0, "east": 1, "south": 1, "west": 1 },
//!     "colour": "blue", "symbol": "B",
//!     "facing_direction": "north", "must_touch_wall": true,
//!     "which_side_touches_wall": "south"
//!   }]
//! }
//! ```
//!
//! Parsing is followed by collect-all validation; any problem is reported as
//! [`LayoutError::ConfigValidation`] before a single cell is painted.

use crate::cell::{Cell, Colour};
use crate::direction::Direction;
use crate::error::{LayoutError, Result};
use crate::footprint::{Buffer, FurnitureSpec};
use crate::walls::Opening;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Room section of the configuration. Dimensions are interior cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    pub width: usize,
    pub length: usize,
    pub wall_thickness: usize,
    #[serde(default)]
    pub windows: Vec<Opening>,
    #[serde(default)]
    pub doors: Vec<Opening>,
}

/// One furniture entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FurnitureConfig {
    pub name: String,
    pub width: usize,
    pub length: usize,
    pub buffer: Buffer,
    pub colour: Colour,
    pub symbol: char,
    pub facing_direction: Direction,
    pub must_touch_wall: bool,
    #[serde(default)]
    pub which_side_touches_wall: Option<Direction>,
}

impl FurnitureConfig {
    pub fn to_spec(&self) -> FurnitureSpec {
        FurnitureSpec::new(
            self.name.clone(),
            self.width,
            self.length,
            self.buffer,
            self.facing_direction,
            self.symbol,
            self.colour,
            self.must_touch_wall,
        )
        .with_wall_side(self.which_side_touches_wall)
    }
}

/// Complete layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub room: RoomConfig,
    #[serde(default)]
    pub furniture: Vec<FurnitureConfig>,
}

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigIssue {
    /// Document did not parse, including missing required fields.
    #[error("malformed configuration: {0}")]
    Malformed(String),
    #[error("room interior must be at least 1×1, got {width}×{length}")]
    RoomTooSmall { width: usize, length: usize },
    #[error("wall thickness must be at least 1")]
    ZeroWallThickness,
    #[error("furniture #{index} has an empty name")]
    EmptyFurnitureName { index: usize },
    #[error("furniture '{name}' must be at least 1×1, got {width}×{length}")]
    FurnitureTooSmall {
        name: String,
        width: usize,
        length: usize,
    },
    #[error("furniture '{name}' uses reserved symbol {symbol:?}")]
    ReservedSymbol { name: String, symbol: char },
    #[error(
        "room {width}×{length} with wall thickness {wall_thickness} exceeds {max} grid cells",
        max = MAX_CELLS
    )]
    RoomTooLarge {
        width: usize,
        length: usize,
        wall_thickness: usize,
    },
    #[error("furniture '{name}' footprint exceeds {max} cells", max = MAX_CELLS)]
    FurnitureTooLarge { name: String },
}

/// Largest grid or footprint, in cells, a configuration may describe.
pub const MAX_CELLS: usize = 1 << 24;

/// Full grid size `(w + 2T, l + 2T)`, or `None` if it overflows or holds
/// more than [`MAX_CELLS`] cells.
pub fn grid_size(width: usize, length: usize, wall_thickness: usize) -> Option<(usize, usize)> {
    let walls = wall_thickness.checked_mul(2)?;
    let w = width.checked_add(walls)?;
    let l = length.checked_add(walls)?;
    (w.checked_mul(l)? <= MAX_CELLS).then_some((w, l))
}

/// Footprint size `(rows, cols)` including buffers, or `None` if it
/// overflows or holds more than [`MAX_CELLS`] cells.
pub fn footprint_size(width: usize, length: usize, buffer: &Buffer) -> Option<(usize, usize)> {
    let rows = length.checked_add(buffer.north)?.checked_add(buffer.south)?;
    let cols = width.checked_add(buffer.east)?.checked_add(buffer.west)?;
    (rows.checked_mul(cols)? <= MAX_CELLS).then_some((rows, cols))
}

/// Validate a configuration, returning all issues found.
pub fn validate_config(config: &LayoutConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    let room = &config.room;
    if room.width == 0 || room.length == 0 {
        issues.push(ConfigIssue::RoomTooSmall {
            width: room.width,
            length: room.length,
        });
    }
    if room.wall_thickness == 0 {
        issues.push(ConfigIssue::ZeroWallThickness);
    }
    if grid_size(room.width, room.length, room.wall_thickness).is_none() {
        issues.push(ConfigIssue::RoomTooLarge {
            width: room.width,
            length: room.length,
            wall_thickness: room.wall_thickness,
        });
    }

    for (index, item) in config.furniture.iter().enumerate() {
        if item.name.trim().is_empty() {
            issues.push(ConfigIssue::EmptyFurnitureName { index });
        }
        if item.width == 0 || item.length == 0 {
            issues.push(ConfigIssue::FurnitureTooSmall {
                name: item.name.clone(),
                width: item.width,
                length: item.length,
            });
        }
        if footprint_size(item.width, item.length, &item.buffer).is_none() {
            issues.push(ConfigIssue::FurnitureTooLarge {
                name: item.name.clone(),
            });
        }
        if Cell::is_reserved_glyph(item.symbol) {
            issues.push(ConfigIssue::ReservedSymbol {
                name: item.name.clone(),
                symbol: item.symbol,
            });
        }
    }

    issues
}

impl LayoutConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LayoutConfig = serde_json::from_str(json).map_err(|e| {
            LayoutError::ConfigValidation(vec![ConfigIssue::Malformed(e.to_string())])
        })?;
        let issues = validate_config(&config);
        if issues.is_empty() {
            Ok(config)
        } else {
            Err(LayoutError::ConfigValidation(issues))
        }
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validated furniture descriptors in configuration order.
    pub fn furniture_specs(&self) -> Vec<FurnitureSpec> {
        self.furniture.iter().map(FurnitureConfig::to_spec).collect()
    }
}
