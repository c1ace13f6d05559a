// simulation.rs - Double-buffered driver: owns the grids, the generation counter and the history

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use log::{Level, debug, info, log_enabled, trace, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{CellState, Executor, Grid, Pattern, Result, SimulationConfig, Stepper};

/// Where the simulation is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Seeded, nothing simulated yet.
    Initialized,
    Running,
    /// The last generation equals the one before it.
    Stable,
    /// The last generation repeats one `period` generations back.
    Periodic { period: u64 },
    /// Explicitly stopped; `advance` does nothing until `restart`.
    Stopped,
}

/// A prior generation kept for cycle detection.
#[derive(Debug)]
struct Snapshot {
    generation: u64,
    hash: u64,
    grid: Grid,
}

/// Conway's Game of Life on a fixed toroidal grid.
///
/// Two buffers are kept: `current` is what callers see, `next` receives the
/// following generation and the two swap roles after every step. Callers only
/// ever get `&Grid`; edits go through the seed/set methods, between steps.
#[derive(Debug)]
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
    stepper: Stepper,
    history: VecDeque<Snapshot>,
    history_capacity: usize,
    density: f64,
    rng: StdRng,
    status: Status,
}

impl Simulation {
    /// Empty `width` x `height` simulation with the default settings.
    pub fn new(width: usize, height: usize) -> Result<Simulation> {
        Simulation::with_executor(width, height, Executor::default())
    }

    pub fn with_executor(width: usize, height: usize, executor: Executor) -> Result<Simulation> {
        Simulation::from_config(&SimulationConfig {
            width,
            height,
            executor,
            ..SimulationConfig::default()
        })
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Simulation> {
        config.validate()?;
        let current = Grid::new(config.width, config.height)?;
        let next = current.clone();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        info!(
            "New {}x{} simulation ({:?} executor, history of {})",
            config.width, config.height, config.executor, config.history
        );
        Ok(Simulation {
            current,
            next,
            generation: 0,
            stepper: Stepper::new(config.executor)?,
            history: VecDeque::with_capacity(config.history),
            history_capacity: config.history,
            density: config.density,
            rng,
            status: Status::Initialized,
        })
    }

    /// Copies `pattern` onto the grid with its top-left corner at `origin`.
    ///
    /// Dead cells of the pattern are written too. Placement wraps like every
    /// other grid access: a pattern hanging off an edge continues on the
    /// opposite side, and a pattern larger than the grid overlaps itself with
    /// later rows overwriting earlier ones. Nothing is ever clipped.
    pub fn seed(&mut self, pattern: &Pattern, origin: (i64, i64)) {
        let (width, height) = self.current.dimensions();
        // Reduce first so adding the offsets cannot overflow
        let ox = origin.0.rem_euclid(width as i64);
        let oy = origin.1.rem_euclid(height as i64);
        for (dx, dy, cell) in pattern.cells() {
            self.current.set(ox + dx as i64, oy + dy as i64, cell);
        }
        debug!(
            "Seeded {:?} pattern with {} live cells at {:?}",
            pattern.dimensions(),
            pattern.live_count(),
            origin
        );
        self.edited();
    }

    pub fn set_cell(&mut self, x: i64, y: i64, state: CellState) {
        self.current.set(x, y, state);
        self.edited();
    }

    pub fn toggle_cell(&mut self, x: i64, y: i64) {
        self.current.toggle(x, y);
        self.edited();
    }

    /// Refills the grid at random; each cell is alive with probability `density`.
    pub fn randomize(&mut self, density: f64) -> Result<()> {
        self.current.fill_random(&mut self.rng, density)?;
        debug!("Randomized grid, {} live cells", self.current.population());
        self.edited();
        Ok(())
    }

    /// Runs `n` generations and returns the resulting grid.
    pub fn advance(&mut self, n: u64) -> &Grid {
        if self.status == Status::Stopped {
            warn!("Ignoring advance({}) on a stopped simulation", n);
            return &self.current;
        }
        for _ in 0..n {
            self.stepper.step_into(&self.current, &mut self.next);
            std::mem::swap(&mut self.current, &mut self.next);
            self.generation += 1;
            // `next` now holds the generation we just left
            self.record_snapshot();
            if log_enabled!(Level::Trace) {
                trace!("Generation {}: {} live cells", self.generation, self.current.population());
            }
            self.update_status();
        }
        &self.current
    }

    pub fn current_generation(&self) -> u64 {
        self.generation
    }

    pub fn current_grid(&self) -> &Grid {
        &self.current
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    pub fn executor(&self) -> Executor {
        self.stepper.executor()
    }

    /// Density used by callers that randomize with the configured value.
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Compares the current grid with up to `history_window` of the most
    /// recent stored generations and returns the period of the closest exact
    /// match. Only generations simulated since the last edit are stored.
    pub fn detect_cycle(&self, history_window: usize) -> Option<u64> {
        let hash = hash_grid(&self.current);
        self.history
            .iter()
            .rev()
            .take(history_window)
            .find(|snapshot| snapshot.hash == hash && snapshot.grid == self.current)
            .map(|snapshot| self.generation - snapshot.generation)
    }

    pub fn stop(&mut self) {
        info!("Stopped at generation {}", self.generation);
        self.status = Status::Stopped;
    }

    /// Clears the grid and history and resets the generation counter to 0.
    pub fn restart(&mut self) {
        self.current.clear();
        self.generation = 0;
        self.history.clear();
        self.status = Status::Initialized;
        info!("Restarted simulation");
    }

    fn record_snapshot(&mut self) {
        if self.history_capacity == 0 {
            return;
        }
        if self.history.len() == self.history_capacity {
            self.history.pop_front();
        }
        self.history.push_back(Snapshot {
            generation: self.generation - 1,
            hash: hash_grid(&self.next),
            grid: self.next.clone(),
        });
    }

    fn update_status(&mut self) {
        let status = match self.detect_cycle(self.history_capacity) {
            Some(1) => Status::Stable,
            Some(period) => Status::Periodic { period },
            None => Status::Running,
        };
        if status != self.status && status != Status::Running {
            debug!("Generation {}: {:?}", self.generation, status);
        }
        self.status = status;
    }

    /// Stored generations no longer describe how we got here after an edit.
    fn edited(&mut self) {
        self.history.clear();
        if self.status != Status::Stopped {
            self.status = if self.generation == 0 {
                Status::Initialized
            } else {
                Status::Running
            };
        }
    }
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}
