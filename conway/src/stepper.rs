// stepper.rs - Evaluates one generation, reading the old grid and writing a new one

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use crate::neighbors::count_live_neighbors;
use crate::rule::next_state;
use crate::{CellState, Error, Grid, Result};

/// Cells a row coroutine evaluates between cooperative yields.
const YIELD_EVERY: usize = 64;

/// How the cells of a generation are scheduled.
///
/// Every executor reads only the source grid and writes disjoint rows of the
/// target, so they all produce identical grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Executor {
    /// Row-major loop on the calling thread.
    Sequential,
    /// Rows split across the rayon thread pool.
    #[default]
    Parallel,
    /// One tokio task per row, awaited together before the swap.
    Coroutines,
}

/// An [`Executor`] together with whatever it needs to run.
#[derive(Debug)]
enum Backend {
    Sequential,
    Parallel,
    Coroutines(Runtime),
}

#[derive(Debug)]
pub struct Stepper {
    backend: Backend,
}

impl Stepper {
    /// Creates a stepper. The coroutine executor starts its own tokio runtime,
    /// which is the only way this can fail.
    pub fn new(executor: Executor) -> Result<Stepper> {
        let backend = match executor {
            Executor::Sequential => Backend::Sequential,
            Executor::Parallel => Backend::Parallel,
            Executor::Coroutines => Backend::Coroutines(Runtime::new().map_err(Error::Runtime)?),
        };
        debug!("Created {:?} stepper", executor);
        Ok(Stepper { backend })
    }

    pub fn executor(&self) -> Executor {
        match self.backend {
            Backend::Sequential => Executor::Sequential,
            Backend::Parallel => Executor::Parallel,
            Backend::Coroutines(_) => Executor::Coroutines,
        }
    }

    /// Returns the generation after `current`, leaving `current` untouched.
    pub fn step(&self, current: &Grid) -> Grid {
        let mut next = current.clone();
        self.step_into(current, &mut next);
        next
    }

    /// Writes the generation after `current` into `next`, overwriting every cell.
    ///
    /// # Panics
    ///
    /// Panics if the two grids differ in size, or when the coroutine executor
    /// is used from inside another tokio runtime.
    pub fn step_into(&self, current: &Grid, next: &mut Grid) {
        assert_eq!(
            current.dimensions(),
            next.dimensions(),
            "source and target grids must have the same dimensions"
        );
        match &self.backend {
            Backend::Sequential => step_sequential(current, next),
            Backend::Parallel => step_parallel(current, next),
            Backend::Coroutines(runtime) => step_coroutines(runtime, current, next),
        }
    }
}

fn evolve(current: &Grid, x: usize, y: usize) -> CellState {
    let (x, y) = (x as i64, y as i64);
    next_state(current.get(x, y), count_live_neighbors(current, x, y))
}

fn evolve_row(current: &Grid, y: usize, row: &mut [CellState]) {
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = evolve(current, x, y);
    }
}

fn step_sequential(current: &Grid, next: &mut Grid) {
    let width = current.width();
    for (y, row) in next.cells_mut().chunks_mut(width).enumerate() {
        evolve_row(current, y, row);
    }
}

fn step_parallel(current: &Grid, next: &mut Grid) {
    let width = current.width();
    next.cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| evolve_row(current, y, row));
}

/// Row coroutine: evaluates row `y` of `source` and hands it back tagged with its index.
async fn process_row(y: usize, source: Arc<Grid>) -> (usize, Vec<CellState>) {
    let mut row = vec![CellState::Dead; source.width()];
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = evolve(&source, x, y);
        if (x + 1) % YIELD_EVERY == 0 {
            tokio::task::yield_now().await;
        }
    }
    (y, row)
}

fn step_coroutines(runtime: &Runtime, current: &Grid, next: &mut Grid) {
    let source = Arc::new(current.clone());
    let width = current.width();
    runtime.block_on(async {
        let handles: Vec<_> = (0..source.height())
            .map(|y| tokio::spawn(process_row(y, Arc::clone(&source))))
            .collect();

        // Every row has to land before the caller may swap buffers.
        for handle in handles {
            match handle.await {
                Ok((y, row)) => next.cells_mut()[y * width..(y + 1) * width].copy_from_slice(&row),
                Err(err) => std::panic::resume_unwind(err.into_panic()),
            }
        }
    });
}
