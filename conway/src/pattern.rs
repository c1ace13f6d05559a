// pattern.rs - Rectangular live/dead blocks handed to the simulation for seeding

use crate::{CellState, Error, Result};

/// A rectangular block of cells, stored row-major.
///
/// Named patterns (glider, glider gun, ...) are the business of whoever builds
/// the block; the engine only ever sees the cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Pattern {
    pub fn new(width: usize, height: usize, cells: Vec<CellState>) -> Result<Pattern> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if cells.len() != width * height {
            return Err(Error::PatternSize {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Pattern { width, height, cells })
    }

    /// Builds the bounding box of a list of live `(row, col)` coordinates.
    ///
    /// The box is shifted so its top-left corner is `(0, 0)`; duplicates are
    /// harmless.
    pub fn from_live_cells(cells: &[(usize, usize)]) -> Result<Pattern> {
        let min_row = cells.iter().map(|&(row, _)| row).min().ok_or(Error::EmptyPattern)?;
        let min_col = cells.iter().map(|&(_, col)| col).min().ok_or(Error::EmptyPattern)?;
        let max_row = cells.iter().map(|&(row, _)| row).max().ok_or(Error::EmptyPattern)?;
        let max_col = cells.iter().map(|&(_, col)| col).max().ok_or(Error::EmptyPattern)?;

        let width = max_col - min_col + 1;
        let height = max_row - min_row + 1;
        let mut block = vec![CellState::Dead; width * height];
        for &(row, col) in cells {
            block[(row - min_row) * width + (col - min_col)] = CellState::Alive;
        }
        Pattern::new(width, height, block)
    }

    /// Builds a pattern from rows of `true` (alive) / `false` (dead).
    ///
    /// Rows shorter than the longest one are padded with dead cells.
    pub fn from_rows(rows: &[&[bool]]) -> Result<Pattern> {
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            cells.extend(row.iter().map(|&alive| CellState::from(alive)));
            cells.extend(std::iter::repeat_n(CellState::Dead, width - row.len()));
        }
        Pattern::new(width, height, cells)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cell at `(x, y)` inside the block. Unlike a grid, a pattern does not wrap.
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        (x < self.width && y < self.height).then(|| self.cells[y * self.width + x])
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Every cell with its offset inside the block, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (i % self.width, i / self.width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_count_must_match_the_block() {
        assert!(matches!(
            Pattern::new(2, 2, vec![CellState::Alive; 3]),
            Err(Error::PatternSize { expected: 4, actual: 3 })
        ));
        assert!(matches!(
            Pattern::new(0, 2, vec![]),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn live_cells_are_normalized_to_their_bounding_box() {
        // glider, as (row, col)
        let glider = Pattern::from_live_cells(&[(6, 7), (7, 8), (8, 6), (8, 7), (8, 8)]).unwrap();

        assert_eq!(glider.dimensions(), (3, 3));
        assert_eq!(glider.live_count(), 5);
        assert_eq!(glider.get(1, 0), Some(CellState::Alive));
        assert_eq!(glider.get(0, 0), Some(CellState::Dead));
        assert_eq!(glider.get(3, 0), None);
    }

    #[test]
    fn empty_coordinate_lists_are_rejected() {
        assert!(matches!(Pattern::from_live_cells(&[]), Err(Error::EmptyPattern)));
    }

    #[test]
    fn ragged_rows_are_padded_dead() {
        let pattern = Pattern::from_rows(&[&[true], &[false, true, true]]).unwrap();

        assert_eq!(pattern.dimensions(), (3, 2));
        assert_eq!(pattern.get(1, 0), Some(CellState::Dead));
        assert_eq!(pattern.get(2, 1), Some(CellState::Alive));
        assert!(Pattern::from_rows(&[]).is_err());
    }
}
