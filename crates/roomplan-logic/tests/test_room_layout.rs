//! Integration tests for the full layout pipeline.
//!
//! Exercises: LayoutConfig → Room (walls, windows, doors) → PlacementEngine
//! → LayoutReport → render / walker
//!
//! All tests are pure logic: no terminal, no files beyond the bundled config.

use rand::rngs::StdRng;
use rand::SeedableRng;
use roomplan_logic::cell::{Cell, Colour, OpeningKind};
use roomplan_logic::config::LayoutConfig;
use roomplan_logic::connectivity::has_left_to_right_path;
use roomplan_logic::direction::Direction;
use roomplan_logic::footprint::{Buffer, FurnitureSpec};
use roomplan_logic::placement::{LayoutReport, PlacementEngine, PlacementOutcome, PlacementStatus};
use roomplan_logic::render::render_rows;
use roomplan_logic::room::Room;
use roomplan_logic::walker::Walker;
use roomplan_logic::LayoutError;

const SAMPLE_JSON: &str = include_str!("../../../data/room_config.json");

// ── Helpers ────────────────────────────────────────────────────────────

fn sample() -> LayoutConfig {
    LayoutConfig::from_json(SAMPLE_JSON).expect("bundled config is valid")
}

/// Run the full pipeline and return the populated room and outcomes.
fn run_pipeline(config: &LayoutConfig) -> (Room, Vec<PlacementOutcome>) {
    let mut room = Room::from_config(&config.room).expect("room builds");
    let items = config.furniture_specs();
    let outcomes = PlacementEngine::new()
        .place_all(&mut room, &items)
        .expect("placement runs");
    (room, outcomes)
}

fn origin_of(outcomes: &[PlacementOutcome], name: &str) -> Option<(usize, usize)> {
    outcomes.iter().find(|o| o.name == name).and_then(|o| o.origin())
}

// ── Pipeline coherence tests ───────────────────────────────────────────

#[test]
fn sample_config_places_everything() {
    let config = sample();
    let (_, outcomes) = run_pipeline(&config);
    assert_eq!(outcomes.len(), config.furniture.len());
    let report = LayoutReport::from_outcomes(&outcomes);
    assert!(report.all_placed(), "unplaced: {:?}", report.unplaced);
}

#[test]
fn sample_config_first_fit_positions() {
    let (_, outcomes) = run_pipeline(&sample());
    // bed backs onto the north wall, right of the window clearance
    assert_eq!(origin_of(&outcomes, "bed"), Some((8, 1)));
    // wardrobe backs onto the east wall, below the bed's buffer
    assert_eq!(origin_of(&outcomes, "wardrobe"), Some((12, 6)));
    // desk backs onto the south wall, right of the door clearance
    assert_eq!(origin_of(&outcomes, "desk"), Some((4, 9)));
    assert_eq!(origin_of(&outcomes, "chair"), Some((1, 1)));
    assert_eq!(origin_of(&outcomes, "rug"), Some((2, 1)));
}

#[test]
fn placed_items_keep_their_facing() {
    let (room, outcomes) = run_pipeline(&sample());
    let bed = outcomes.iter().find(|o| o.name == "bed").unwrap();
    assert!(matches!(
        bed.status,
        PlacementStatus::Placed {
            facing: Direction::South,
            ..
        }
    ));
    // marker of a south-facing 3×4 bed ends up bottom-right of its core
    assert_eq!(*room.layout.get(11, 5).unwrap(), Cell::Facing(Direction::South));
    assert_eq!(*room.layout.get(12, 7).unwrap(), Cell::Facing(Direction::West));
}

#[test]
fn walls_and_openings_survive_placement() {
    let (room, _) = run_pipeline(&sample());
    assert_eq!(room.width(), 14);
    assert_eq!(room.length(), 12);
    for x in 5..8 {
        assert_eq!(*room.layout.get(x, 0).unwrap(), Cell::Opening(OpeningKind::Window));
        assert_eq!(*room.layout.get(x, 1).unwrap(), Cell::Clearance);
    }
    for x in 2..4 {
        assert_eq!(*room.layout.get(x, 11).unwrap(), Cell::Opening(OpeningKind::Door));
        assert_eq!(*room.layout.get(x, 10).unwrap(), Cell::Clearance);
        assert_eq!(*room.layout.get(x, 9).unwrap(), Cell::Clearance);
    }
    let walls = room.layout.count(|c| *c == Cell::Wall);
    assert_eq!(walls, 14 * 12 - 12 * 10 - 3 - 2);
}

#[test]
fn corridor_survives_full_layout() {
    let (room, _) = run_pipeline(&sample());
    assert!(has_left_to_right_path(&room.layout, room.wall_thickness()));
}

#[test]
fn colours_follow_items() {
    let (room, _) = run_pipeline(&sample());
    assert_eq!(*room.colours.get(0, 0).unwrap(), Some(Colour::Magenta));
    assert_eq!(*room.colours.get(6, 0).unwrap(), Some(Colour::Cyan));
    assert_eq!(*room.colours.get(10, 3).unwrap(), Some(Colour::Blue));
    assert_eq!(*room.colours.get(1, 1).unwrap(), Some(Colour::Red));
    // empty footprint corners are not coloured
    assert_eq!(*room.colours.get(12, 1).unwrap(), None);
}

#[test]
fn render_has_one_padded_string_per_row() {
    let (room, _) = run_pipeline(&sample());
    let rows = render_rows(&room.layout);
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| r.chars().count() == 14 * 3));
    assert_eq!(rows[0].chars().nth(1), Some('#'));
}

// ── Edge cases ─────────────────────────────────────────────────────────

#[test]
fn corridor_blocking_divider_is_unplaced() {
    let mut room = Room::new(10, 10, 1);
    let divider = FurnitureSpec::new(
        "divider",
        1,
        10,
        Buffer::default(),
        Direction::North,
        'X',
        Colour::White,
        false,
    );
    let before = room.layout.clone();
    let outcomes = PlacementEngine::new()
        .place_all(&mut room, &[divider])
        .unwrap();
    assert_eq!(outcomes[0].status, PlacementStatus::Unplaced);
    assert_eq!(room.layout, before);
}

#[test]
fn unplaced_items_do_not_stop_later_ones() {
    let mut room = Room::new(4, 4, 1);
    let huge = FurnitureSpec::new(
        "huge",
        5,
        5,
        Buffer::default(),
        Direction::North,
        'H',
        Colour::Red,
        false,
    );
    let small = FurnitureSpec::new(
        "small",
        1,
        1,
        Buffer::default(),
        Direction::North,
        's',
        Colour::Red,
        false,
    );
    let outcomes = PlacementEngine::new()
        .place_all(&mut room, &[huge, small])
        .unwrap();
    let report = LayoutReport::from_outcomes(&outcomes);
    assert_eq!(report.unplaced, vec!["huge"]);
    assert_eq!(report.placed, vec!["small"]);
}

#[test]
fn corner_opening_is_skipped_but_room_builds() {
    let config = LayoutConfig::from_json(
        r#"{
            "room": {
                "width": 6, "length": 6, "wall_thickness": 1,
                "doors": [
                    { "wall": "north", "position": 5, "size": 2, "buffer": 1 },
                    { "wall": "west", "position": 2, "size": 1, "buffer": 1 }
                ]
            }
        }"#,
    )
    .unwrap();
    let (room, skipped) = Room::from_config_with_skipped(&config.room).unwrap();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].opening.wall, Direction::North);
    assert_eq!(*room.layout.get(0, 3).unwrap(), Cell::Opening(OpeningKind::Door));
    assert_eq!(*room.layout.get(1, 3).unwrap(), Cell::Clearance);
}

#[test]
fn invalid_config_reports_every_issue() {
    let json = SAMPLE_JSON
        .replace(r#""wall_thickness": 1"#, r#""wall_thickness": 0"#)
        .replace(r#""symbol": "c""#, r##""symbol": "#""##);
    match LayoutConfig::from_json(&json) {
        Err(LayoutError::ConfigValidation(issues)) => assert_eq!(issues.len(), 2),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn walker_moves_through_furnished_room() {
    let (mut room, _) = run_pipeline(&sample());
    let before = room.layout.clone();
    let mut rng = StdRng::seed_from_u64(2024);
    let mut walker = Walker::spawn(&mut room.layout, "john", 'P', 10, 8)
        .unwrap()
        .expect("spawn cell is free");
    let moved = walker.walk(&mut room.layout, 100, &mut rng).unwrap();
    assert_eq!(moved, 100);
    assert_eq!(room.layout.count(|c| matches!(c, Cell::Walker(_))), 1);
    // the walker only ever moves through empty cells
    for (x, y, cell) in before.iter() {
        if !cell.is_empty() {
            assert_eq!(room.layout.get(x, y).unwrap(), cell);
        }
    }
}
