// config.rs - Simulation settings (can be loaded from YAML)

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Executor, Result};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// How each generation is scheduled
    pub executor: Executor,
    /// Prior generations kept for cycle detection (0 = disabled)
    pub history: usize,
    /// Probability that a cell starts alive when randomizing
    pub density: f64,
    /// RNG seed for randomizing; unset means seed from entropy
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 50,
            height: 50,
            executor: Executor::default(),
            history: 10,
            density: 0.2,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: SimulationConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidDensity(self.density));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = SimulationConfig::from_yaml_str("width: 80\nexecutor: coroutines\n").unwrap();

        assert_eq!(config.width, 80);
        assert_eq!(config.height, 50);
        assert_eq!(config.executor, Executor::Coroutines);
        assert_eq!(config.history, 10);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn zero_dimensions_are_a_config_error() {
        assert!(matches!(
            SimulationConfig::from_yaml_str("height: 0"),
            Err(Error::InvalidDimensions { width: 50, height: 0 })
        ));
    }

    #[test]
    fn negative_dimensions_do_not_parse() {
        assert!(matches!(SimulationConfig::from_yaml_str("width: -3"), Err(Error::Config(_))));
    }

    #[test]
    fn density_out_of_range_is_rejected() {
        assert!(matches!(
            SimulationConfig::from_yaml_str("density: 2.5"),
            Err(Error::InvalidDensity(_))
        ));
    }

    #[test]
    fn yaml_round_trips() {
        let config = SimulationConfig {
            seed: Some(42),
            executor: Executor::Sequential,
            ..SimulationConfig::default()
        };
        let yaml = config.to_yaml().unwrap();
        assert_eq!(SimulationConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            SimulationConfig::load("definitely/not/here.yaml"),
            Err(Error::Io(_))
        ));
    }
}
