// grid.rs - Fixed-size toroidal grid for Conway's Game of Life

use std::fmt;

use rand::Rng;

use crate::{CellState, Error, Result};

/// Rectangular grid of cells whose edges wrap around onto each other.
///
/// Cells are stored row-major, one [`CellState`] per cell. Any integer
/// coordinate pair is valid: it is reduced modulo the grid dimensions before
/// lookup, so the topology is a torus and there is no out-of-range case.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-dead grid. Both dimensions must be at least 1.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![CellState::Dead; width * height],
        })
    }

    /// Builds a grid from a row-major byte buffer where any nonzero byte is alive.
    pub fn from_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Grid> {
        let mut grid = Grid::new(width, height)?;
        if bytes.len() != grid.cells.len() {
            return Err(Error::BufferSize {
                expected: grid.cells.len(),
                actual: bytes.len(),
            });
        }
        for (cell, &byte) in grid.cells.iter_mut().zip(bytes) {
            *cell = CellState::from_byte(byte);
        }
        Ok(grid)
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Reads the cell at `(x, y)` after wrapping both coordinates.
    pub fn get(&self, x: i64, y: i64) -> CellState {
        self.cells[self.index(x, y)]
    }

    /// Writes the cell at `(x, y)` after wrapping both coordinates.
    pub fn set(&mut self, x: i64, y: i64, state: CellState) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    pub fn toggle(&mut self, x: i64, y: i64) {
        let idx = self.index(x, y);
        self.cells[idx] = self.cells[idx].toggled();
    }

    pub fn clear(&mut self) {
        self.cells.fill(CellState::Dead);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(i, _)| (i % self.width, i / self.width))
    }

    /// Row slices from top to bottom, for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Sets every cell alive with probability `density`, dead otherwise.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        for cell in self.cells.iter_mut() {
            *cell = CellState::from(rng.gen_bool(density));
        }
        Ok(())
    }

    /// Row-major copy with one byte per cell (0 dead, 1 alive).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.iter().map(|&cell| u8::from(cell)).collect()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CellState] {
        &mut self.cells
    }

    fn index(&self, x: i64, y: i64) -> usize {
        let x = x.rem_euclid(self.width as i64) as usize;
        let y = y.rem_euclid(self.height as i64) as usize;
        y * self.width + x
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", if cell.is_alive() { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn zero_sized_grids_are_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(Error::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(Error::InvalidDimensions { width: 5, height: 0 })
        ));
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn new_grid_is_all_dead_with_fixed_dimensions() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.dimensions(), (7, 3));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn coordinates_wrap_in_both_directions() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set(-1, -1, CellState::Alive);

        assert_eq!(grid.get(3, 2), CellState::Alive);
        assert_eq!(grid.get(7, 5), CellState::Alive);
        assert_eq!(grid.get(-5, -4), CellState::Alive);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(3, 2)]);
    }

    #[test]
    fn toggling_twice_restores_the_cell() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.toggle(1, 1);
        assert_eq!(grid.get(1, 1), CellState::Alive);
        grid.toggle(4, 4);
        assert_eq!(grid.get(1, 1), CellState::Dead);
    }

    #[test]
    fn clones_are_independent() {
        let mut grid = Grid::new(3, 3).unwrap();
        let snapshot = grid.clone();
        grid.set(0, 0, CellState::Alive);

        assert_eq!(snapshot.population(), 0);
        assert_ne!(snapshot, grid);
    }

    #[test]
    fn byte_buffers_must_match_the_dimensions() {
        let grid = Grid::from_bytes(2, 2, &[0, 7, 0, 1]).unwrap();
        assert_eq!(grid.to_bytes(), vec![0, 1, 0, 1]);
        assert!(matches!(
            Grid::from_bytes(2, 2, &[0, 1, 0]),
            Err(Error::BufferSize { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn random_fill_respects_extreme_densities() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(10, 10).unwrap();

        grid.fill_random(&mut rng, 1.0).unwrap();
        assert_eq!(grid.population(), 100);
        grid.fill_random(&mut rng, 0.0).unwrap();
        assert_eq!(grid.population(), 0);

        assert!(matches!(grid.fill_random(&mut rng, 1.5), Err(Error::InvalidDensity(_))));
        assert!(grid.fill_random(&mut rng, f64::NAN).is_err());
    }

    #[test]
    fn display_draws_one_line_per_row() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(1, 0, CellState::Alive);
        assert_eq!(grid.to_string(), ".#.\n...\n");
    }
}
