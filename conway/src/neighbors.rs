use crate::Grid;

/// Offsets of the eight Moore neighbors.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Counts live neighbors of `(x, y)` in `grid`, wrapping at the edges.
///
/// On grids narrower or shorter than 3 cells several offsets land on the same
/// cell (or on `(x, y)` itself) and each hit is counted.
pub fn count_live_neighbors(grid: &Grid, x: i64, y: i64) -> u8 {
    let (width, height) = grid.dimensions();
    // Reduce first so the offsets cannot overflow
    let x = x.rem_euclid(width as i64);
    let y = y.rem_euclid(height as i64);
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| grid.get(x + dx, y + dy).is_alive())
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellState;

    #[test]
    fn counts_all_eight_neighbors() {
        let mut grid = Grid::new(5, 5).unwrap();
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            grid.set(2 + dx, 2 + dy, CellState::Alive);
        }
        assert_eq!(count_live_neighbors(&grid, 2, 2), 8);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn the_cell_itself_is_not_counted() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, CellState::Alive);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 0);
    }

    #[test]
    fn neighbors_wrap_across_corners() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(4, 4, CellState::Alive);
        grid.set(0, 4, CellState::Alive);
        grid.set(4, 0, CellState::Alive);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 3);
    }

    #[test]
    fn single_cell_grid_sees_itself_eight_times() {
        let mut grid = Grid::new(1, 1).unwrap();
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);
        grid.set(0, 0, CellState::Alive);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 8);
    }

    #[test]
    fn extreme_coordinates_wrap_instead_of_overflowing() {
        let mut grid = Grid::new(5, 5).unwrap();
        // i64::MAX lands on column 2, i64::MIN on row 2
        grid.set(1, 2, CellState::Alive);
        grid.set(3, 1, CellState::Alive);
        assert_eq!(count_live_neighbors(&grid, i64::MAX, i64::MIN), 2);
        assert_eq!(count_live_neighbors(&grid, i64::MIN, i64::MAX), count_live_neighbors(&grid, 2, 2));
    }

    #[test]
    fn narrow_grid_double_counts_the_shared_column() {
        // width 2: left and right neighbors are the same column
        let mut grid = Grid::new(2, 5).unwrap();
        grid.set(1, 2, CellState::Alive);
        assert_eq!(count_live_neighbors(&grid, 0, 2), 2);
    }
}
