//! Corridor check: is there still a way across the room?
//!
//! Start cells are the empty cells of the interior column next to the west
//! wall, end cells the empty cells of the interior column next to the east
//! wall. A 4-directional BFS over empty cells succeeds if it reaches any end
//! cell. Running one multi-source search gives the same answer as testing
//! every (start, end) pair separately.

use crate::cell::Cell;
use crate::grid::Grid;
use std::collections::VecDeque;

/// Interior rows `[thickness, length - thickness)` of `column` that are empty.
fn empty_column_cells(grid: &Grid<Cell>, column: usize, thickness: usize) -> Vec<(usize, usize)> {
    let end = grid.length().saturating_sub(thickness);
    (thickness..end)
        .filter(|&y| matches!(grid.get(column, y), Ok(cell) if cell.is_empty()))
        .map(|y| (column, y))
        .collect()
}

/// True iff an unobstructed 4-connected path of empty cells joins the
/// west-adjacent interior column to the east-adjacent one.
pub fn has_left_to_right_path(grid: &Grid<Cell>, thickness: usize) -> bool {
    let Some(east_column) = grid.width().checked_sub(thickness + 1) else {
        return false;
    };
    if east_column < thickness {
        return false;
    }

    let starts = empty_column_cells(grid, thickness, thickness);
    if starts.is_empty() {
        return false;
    }

    let mut visited = vec![false; grid.width() * grid.length()];
    let mut queue = VecDeque::new();
    for &(x, y) in &starts {
        visited[y * grid.width() + x] = true;
        queue.push_back((x, y));
    }

    let interior_rows = thickness..grid.length().saturating_sub(thickness);
    while let Some((x, y)) = queue.pop_front() {
        if x == east_column && interior_rows.contains(&y) {
            return true;
        }
        for (nx, ny) in grid.empty_neighbours4(x, y) {
            let i = ny * grid.width() + nx;
            if !visited[i] {
                visited[i] = true;
                queue.push_back((nx, ny));
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walls::place_walls;

    fn room(w: usize, l: usize, t: usize) -> Grid<Cell> {
        let mut grid = Grid::empty(w + 2 * t, l + 2 * t);
        place_walls(&mut grid, t);
        grid
    }

    #[test]
    fn test_empty_room_has_path() {
        assert!(has_left_to_right_path(&room(10, 10, 1), 1));
        assert!(has_left_to_right_path(&room(3, 5, 2), 2));
    }

    #[test]
    fn test_single_cell_interior() {
        assert!(has_left_to_right_path(&room(1, 1, 1), 1));
    }

    #[test]
    fn test_full_length_divider_blocks() {
        let mut grid = room(10, 10, 1);
        for y in 1..11 {
            grid.set(5, y, Cell::Furniture('X')).unwrap();
        }
        assert!(!has_left_to_right_path(&grid, 1));
    }

    #[test]
    fn test_gap_in_divider_lets_through() {
        let mut grid = room(10, 10, 1);
        for y in 1..11 {
            if y != 7 {
                grid.set(5, y, Cell::Buffer).unwrap();
            }
        }
        assert!(has_left_to_right_path(&grid, 1));
    }

    #[test]
    fn test_diagonal_gap_does_not_count() {
        let mut grid = room(4, 2, 1);
        // row 1: . X . .
        // row 2: X . . .
        grid.set(2, 1, Cell::Furniture('X')).unwrap();
        grid.set(1, 2, Cell::Furniture('X')).unwrap();
        // start column x=1 only has (1,1); it is boxed in diagonally
        assert!(!has_left_to_right_path(&grid, 1));
    }

    #[test]
    fn test_blocked_start_column() {
        let mut grid = room(5, 3, 1);
        for y in 1..4 {
            grid.set(1, y, Cell::Clearance).unwrap();
        }
        assert!(!has_left_to_right_path(&grid, 1));
    }

    #[test]
    fn test_horizontal_bar_does_not_block() {
        let mut grid = room(10, 10, 1);
        for x in 1..11 {
            grid.set(x, 4, Cell::Furniture('B')).unwrap();
        }
        assert!(has_left_to_right_path(&grid, 1));
    }

    #[test]
    fn test_walls_are_not_walkable() {
        // path would exist only by walking through the wall ring
        let mut grid = room(3, 1, 1);
        grid.set(2, 1, Cell::Furniture('X')).unwrap();
        assert!(!has_left_to_right_path(&grid, 1));
    }
}
