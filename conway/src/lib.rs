//! # conway
//!
//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! A [`Simulation`] owns two [`Grid`] buffers. Each generation the
//! [`Stepper`] reads every cell of the current buffer, counts its wrapped
//! neighbors and writes the rule outcome into the other buffer; the buffers
//! then swap. Cells are evaluated independently of each other, so the stepper
//! can spread the work over a thread pool or a set of row coroutines.

mod cell;
pub mod config;
mod error;
mod grid;
pub mod kernel;
pub mod neighbors;
mod pattern;
pub mod rule;
mod simulation;
mod stepper;

pub use cell::CellState;
pub use config::SimulationConfig;
pub use error::{Error, Result};
pub use grid::Grid;
pub use neighbors::count_live_neighbors;
pub use pattern::Pattern;
pub use simulation::{Simulation, Status};
pub use stepper::{Executor, Stepper};
