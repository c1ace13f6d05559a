//! Per-cell evolution over a raw row-major byte buffer.
//!
//! This is the contract an accelerated executor (SIMD batch, GPU kernel,
//! foreign thread pool) has to honor: a pure function of the cell position,
//! the *source* buffer and its dimensions, producing one output byte. It never
//! reads from the buffer being written.

use crate::CellState;
use crate::neighbors::NEIGHBOR_OFFSETS;
use crate::rule::next_state;

/// Next state of `(x, y)` as a byte (0 dead, 1 alive).
///
/// `cells` holds `width * height` bytes, nonzero meaning alive. `x` and `y`
/// must be in range; neighbors wrap.
pub fn evolve_cell(cells: &[u8], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let (w, h) = (width as i64, height as i64);
    let live_neighbors = NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            let nx = (x as i64 + dx).rem_euclid(w) as usize;
            let ny = (y as i64 + dy).rem_euclid(h) as usize;
            cells[ny * width + nx] != 0
        })
        .count() as u8;
    let current = CellState::from_byte(cells[y * width + x]);
    next_state(current, live_neighbors) as u8
}

/// Applies [`evolve_cell`] to every position, writing into `out`.
///
/// # Panics
///
/// Panics if `cells` or `out` does not hold exactly `width * height` bytes.
pub fn evolve_buffer(cells: &[u8], out: &mut [u8], width: usize, height: usize) {
    assert_eq!(cells.len(), width * height, "source buffer must hold width * height cells");
    assert_eq!(out.len(), width * height, "target buffer must hold width * height cells");
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = evolve_cell(cells, width, height, i % width, i / width);
    }
}
