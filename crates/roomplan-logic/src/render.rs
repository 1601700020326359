//! Plain-text rendering. Each cell prints as its glyph padded by one space
//! on either side.

use crate::cell::Cell;
use crate::footprint::Footprint;
use crate::grid::Grid;

/// One padded cell, ` g `.
pub fn cell_text(cell: Cell) -> String {
    format!(" {} ", cell.glyph())
}

/// One string per grid row, top to bottom.
pub fn render_rows(grid: &Grid<Cell>) -> Vec<String> {
    grid.rows()
        .map(|row| row.iter().map(|c| cell_text(*c)).collect())
        .collect()
}

/// One string per bitmap row.
pub fn render_footprint(footprint: &Footprint) -> Vec<String> {
    let mut rows = vec![String::new(); footprint.rows()];
    for (row, _, cell) in footprint.iter() {
        rows[row].push_str(&cell_text(cell));
    }
    rows
}

/// Whole grid as a newline-joined block.
pub fn render(grid: &Grid<Cell>) -> String {
    render_rows(grid).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::footprint::Buffer;
    use crate::walls::place_walls;

    #[test]
    fn test_render_walled_grid() {
        let mut grid = Grid::empty(3, 3);
        place_walls(&mut grid, 1);
        grid.set(1, 1, Cell::Facing(Direction::East)).unwrap();
        assert_eq!(
            render_rows(&grid),
            vec![" #  #  # ", " #  →  # ", " #  #  # "]
        );
    }

    #[test]
    fn test_render_joins_rows() {
        let grid = Grid::empty(2, 2);
        assert_eq!(render(&grid), "      \n      ");
    }

    #[test]
    fn test_render_footprint() {
        let fp = Footprint::build(1, 1, Buffer::uniform(1), 'L');
        assert_eq!(
            render_footprint(&fp),
            vec!["    .    ", " .  ↑  . ", "    .    "]
        );
    }
}
