//! RoomPlan headless layout runner
//!
//! Loads a room configuration, cuts walls and openings, places furniture and
//! prints the resulting grid with a per-item summary.
//!
//! Usage:
//!   cargo run -p roomplan-cli
//!   cargo run -p roomplan-cli -- path/to/room.json --colour --walk 50 --seed 7
//!
//! Flags:
//!   --verbose     debug logging and per-item footprints (RUST_LOG still wins when set)
//!   --colour      coloured output
//!   --walk N      run a random walker for N steps after placement
//!   --seed S      seed the walker (default: entropy)
//!   --json        print the placement report and skipped openings as JSON
//!   --strict      exit non-zero if any item could not be placed

use crossterm::style::{Attribute, Color, Stylize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use roomplan_logic::cell::{Cell, Colour};
use roomplan_logic::config::LayoutConfig;
use roomplan_logic::direction::Direction;
use roomplan_logic::footprint::FurnitureSpec;
use roomplan_logic::placement::{LayoutReport, PlacementEngine, PlacementOutcome, PlacementStatus};
use roomplan_logic::render::{cell_text, render, render_footprint};
use roomplan_logic::room::{Room, SkippedOpening};
use roomplan_logic::rotation::rotate;
use roomplan_logic::walker::Walker;
use serde_json::json;
use std::process::ExitCode;

// ── Bundled configuration (same file the integration tests use) ─────────
const DEFAULT_CONFIG: &str = include_str!("../../../data/room_config.json");

// ── Command line ────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Options {
    config_path: Option<String>,
    verbose: bool,
    colour: bool,
    walk: usize,
    seed: Option<u64>,
    json: bool,
    strict: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" => options.verbose = true,
            "--colour" | "--color" => options.colour = true,
            "--json" => options.json = true,
            "--strict" => options.strict = true,
            "--walk" => {
                let value = args.next().ok_or("--walk needs a step count")?;
                options.walk = value
                    .parse()
                    .map_err(|_| format!("invalid step count: {value}"))?;
            }
            "--seed" => {
                let value = args.next().ok_or("--seed needs a number")?;
                options.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid seed: {value}"))?,
                );
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag: {flag}")),
            path => {
                if options.config_path.replace(path.to_string()).is_some() {
                    return Err("only one configuration path may be given".into());
                }
            }
        }
    }
    Ok(options)
}

// ── Output ──────────────────────────────────────────────────────────────

fn terminal_colour(colour: Colour) -> Color {
    match colour {
        Colour::Black => Color::Black,
        Colour::Red => Color::Red,
        Colour::Green => Color::Green,
        Colour::Yellow => Color::Yellow,
        Colour::Blue => Color::Blue,
        Colour::Magenta => Color::Magenta,
        Colour::Cyan => Color::Cyan,
        Colour::White => Color::White,
    }
}

fn print_room(room: &Room, colour: bool) {
    if !colour {
        println!("{}", render(&room.layout));
        return;
    }

    let mut line = String::new();
    for ((x, _, cell), (_, _, tint)) in room.layout.iter().zip(room.colours.iter()) {
        let text = cell_text(*cell);
        let styled = match (cell, tint) {
            (Cell::Buffer, _) => text.attribute(Attribute::Dim).to_string(),
            (_, Some(c)) => text.with(terminal_colour(*c)).to_string(),
            (_, None) => text,
        };
        line.push_str(&styled);
        if x + 1 == room.width() {
            println!("{line}");
            line.clear();
        }
    }
}

/// Each item's footprint turned to its configured facing.
fn print_footprints(items: &[FurnitureSpec]) {
    for item in items {
        println!("  {} ({}):", item.name, item.facing);
        for row in render_footprint(&rotate(item.footprint(), Direction::North, item.facing)) {
            println!("    {row}");
        }
    }
    println!();
}

/// Placement report plus any openings that could not be cut.
fn json_report(
    report: &LayoutReport,
    skipped: &[SkippedOpening],
) -> serde_json::Result<serde_json::Value> {
    let mut value = serde_json::to_value(report)?;
    value["skipped"] = skipped
        .iter()
        .map(|skip| {
            json!({
                "kind": skip.kind,
                "wall": skip.opening.wall,
                "position": skip.opening.position,
                "size": skip.opening.size,
                "reason": skip.error.to_string(),
            })
        })
        .collect();
    Ok(value)
}

fn print_summary(outcomes: &[PlacementOutcome], verbose: bool) {
    for outcome in outcomes {
        match outcome.status {
            PlacementStatus::Placed { x, y, facing } => {
                if verbose {
                    println!("  ✓ {} at ({}, {}) facing {}", outcome.name, x, y, facing);
                } else {
                    println!("  ✓ {}", outcome.name);
                }
            }
            PlacementStatus::Unplaced => println!("  ✗ {}: no valid position", outcome.name),
        }
    }
    let placed = outcomes.iter().filter(|o| o.is_placed()).count();
    println!();
    println!("  {} placed, {} unplaced", placed, outcomes.len() - placed);
}

// ── Main ────────────────────────────────────────────────────────────────

fn run(options: &Options) -> Result<bool, Box<dyn std::error::Error>> {
    let config = match &options.config_path {
        Some(path) => LayoutConfig::from_path(path)?,
        None => LayoutConfig::from_json(DEFAULT_CONFIG)?,
    };

    let (mut room, skipped) = Room::from_config_with_skipped(&config.room)?;
    let items = config.furniture_specs();
    let mut engine = PlacementEngine::new();
    let outcomes = engine.place_all(&mut room, &items)?;
    log::debug!("{} trial placement(s) evaluated", engine.trials());
    let report = LayoutReport::from_outcomes(&outcomes);

    if options.walk > 0 {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        match Walker::spawn_anywhere(&mut room.layout, "visitor", 'P', &mut rng)? {
            Some(mut walker) => {
                let moved = walker.walk(&mut room.layout, options.walk, &mut rng)?;
                log::info!(
                    "{} took {} step(s), ended at ({}, {})",
                    walker.name,
                    moved,
                    walker.x,
                    walker.y
                );
            }
            None => log::warn!("No free cell to start a walker on"),
        }
    }

    if options.json {
        let value = json_report(&report, &skipped)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(report.all_placed());
    }

    println!("=== RoomPlan ===\n");
    if options.verbose {
        print_footprints(&items);
    }
    print_room(&room, options.colour);
    println!();
    for skip in &skipped {
        println!("  ✗ {:?} skipped: {}", skip.kind, skip.error);
    }
    print_summary(&outcomes, options.verbose);
    Ok(report.all_placed())
}

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            return ExitCode::from(2);
        }
    };

    let default_level = if options.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&options) {
        Ok(all_placed) if all_placed || !options.strict => ExitCode::SUCCESS,
        Ok(_) => {
            eprintln!("error: some furniture could not be placed");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn test_parse_flags() {
        let options = parse_args(args(&["room.json", "--walk", "20", "--seed", "7", "--strict"]))
            .unwrap();
        assert_eq!(options.config_path.as_deref(), Some("room.json"));
        assert_eq!(options.walk, 20);
        assert_eq!(options.seed, Some(7));
        assert!(options.strict);
        assert!(!options.colour);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&["--walk"])).is_err());
        assert!(parse_args(args(&["--walk", "many"])).is_err());
        assert!(parse_args(args(&["--frobnicate"])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
    }

    #[test]
    fn test_bundled_config_runs() {
        let options = Options {
            json: true,
            ..Options::default()
        };
        assert!(run(&options).unwrap());
    }

    #[test]
    fn test_json_report_lists_skipped_openings() {
        let config = LayoutConfig::from_json(
            r#"{
                "room": {
                    "width": 6, "length": 6, "wall_thickness": 1,
                    "doors": [{ "wall": "north", "position": 5, "size": 2, "buffer": 1 }]
                }
            }"#,
        )
        .unwrap();
        let (_, skipped) = Room::from_config_with_skipped(&config.room).unwrap();
        let value = json_report(&LayoutReport::default(), &skipped).unwrap();
        let entries = value["skipped"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["kind"], "door");
        assert_eq!(entries[0]["wall"], "north");
        assert_eq!(entries[0]["position"], 5);
        assert!(!entries[0]["reason"].as_str().unwrap().is_empty());
        assert!(value["placed"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_json_report_without_skips() {
        let report = LayoutReport {
            placed: vec!["bed".into()],
            unplaced: vec![],
        };
        let value = json_report(&report, &[]).unwrap();
        assert_eq!(value["placed"][0], "bed");
        assert_eq!(value["skipped"], json!([]));
    }
}
