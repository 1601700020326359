//! Pure room layout logic for RoomPlan.
//!
//! This crate contains everything needed to turn a declarative room
//! description and a furniture list into a populated 2D cell grid. Functions
//! take plain data and return results, making them unit-testable and usable
//! from the CLI runner or any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`cell`] | Cell values, opening kinds, annotation colours |
//! | [`config`] | JSON configuration model and collect-all validation |
//! | [`connectivity`] | West↔east corridor check (multi-source BFS) |
//! | [`direction`] | Four-way facing cycle and directional glyphs |
//! | [`error`] | `LayoutError` and the crate `Result` alias |
//! | [`footprint`] | Canonical furniture bitmaps with buffer bands |
//! | [`grid`] | Bounds-checked 2D cell container |
//! | [`placement`] | First-fit placement with wall and corridor vetoes |
//! | [`render`] | Plain-text grid rendering |
//! | [`room`] | Room assembly: walls, openings, colour annotation |
//! | [`rotation`] | Quarter-turn rotation of footprints |
//! | [`walker`] | Random-walk occupant simulation over a grid |
//! | [`walls`] | Perimeter walls, doors/windows and clearance strips |
//!
//! ```
//! use roomplan_logic::config::LayoutConfig;
//! use roomplan_logic::placement::PlacementEngine;
//! use roomplan_logic::room::Room;
//!
//! let config = LayoutConfig::from_json(
//!     r#"{
//!         "room": { "width": 6, "length": 6, "wall_thickness": 1 },
//!         "furniture": [{
//!             "name": "stool", "width": 1, "length": 1,
//!             "buffer": { "north": 0, "east": 0, "south": 0, "west": 0 },
//!             "colour": "red", "symbol": "s",
//!             "facing_direction": "north", "must_touch_wall": false
//!         }]
//!     }"#,
//! )
//! .unwrap();
//! let mut room = Room::from_config(&config.room).unwrap();
//! let items = config.furniture_specs();
//! let outcomes = PlacementEngine::new().place_all(&mut room, &items).unwrap();
//! assert!(outcomes[0].is_placed());
//! ```

pub mod cell;
pub mod config;
pub mod connectivity;
pub mod direction;
pub mod error;
pub mod footprint;
pub mod grid;
pub mod placement;
pub mod render;
pub mod room;
pub mod rotation;
pub mod walker;
pub mod walls;

pub use error::{LayoutError, Result};
