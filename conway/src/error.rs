// error.rs - Error type shared by the whole crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("grid dimensions must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("pattern needs {expected} cells, got {actual}")]
    PatternSize { expected: usize, actual: usize },
    #[error("cell buffer needs {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
    #[error("pattern has no live cells")]
    EmptyPattern,
    #[error("density must be within 0.0..=1.0, got {0}")]
    InvalidDensity(f64),
    #[error("invalid simulation config: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("could not read simulation config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not start coroutine runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
