// Loads the run configuration from a TOML file. Every field is optional and
// falls back to the defaults in config.rs, so an empty file is a valid run.

use crate::config::{self, SimParams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RunConfig {
    pub simulation: Option<SimulationConfig>,
    pub bodies: Option<BodiesConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub theta: Option<f64>,
    pub epsilon: Option<f64>,
    pub g: Option<f64>,
    pub dt: Option<f64>,
    pub steps: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BodiesConfig {
    /// "disk" (default) or "scatter".
    pub scenario: Option<String>,
    pub count: Option<usize>,
    pub seed: Option<u64>,
    /// Scatter only: draw masses from the configured range.
    pub random_mass: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Write a frames/frame_NNNNN.json body dump every N steps. 0 disables.
    pub frame_interval: Option<usize>,
    /// Write a compressed full-state snapshot every N steps. 0 disables.
    pub snapshot_interval: Option<usize>,
    pub directory: Option<String>,
}

impl RunConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: RunConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn params(&self) -> SimParams {
        let sim = self.simulation.as_ref();
        SimParams {
            theta: sim.and_then(|s| s.theta).unwrap_or(config::THETA),
            epsilon: sim.and_then(|s| s.epsilon).unwrap_or(config::EPSILON),
            g: sim.and_then(|s| s.g).unwrap_or(config::G),
            dt: sim.and_then(|s| s.dt).unwrap_or(config::DELTA_T),
        }
    }

    pub fn steps(&self) -> usize {
        self.simulation
            .as_ref()
            .and_then(|s| s.steps)
            .unwrap_or(100)
    }

    pub fn body_count(&self) -> usize {
        self.bodies
            .as_ref()
            .and_then(|b| b.count)
            .unwrap_or(config::NUM_BODIES)
    }

    pub fn seed(&self) -> u64 {
        self.bodies.as_ref().and_then(|b| b.seed).unwrap_or(0)
    }

    pub fn scenario(&self) -> &str {
        self.bodies
            .as_ref()
            .and_then(|b| b.scenario.as_deref())
            .unwrap_or("disk")
    }

    pub fn random_mass(&self) -> bool {
        self.bodies
            .as_ref()
            .and_then(|b| b.random_mass)
            .unwrap_or(false)
    }

    pub fn frame_interval(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.frame_interval)
            .unwrap_or(0)
    }

    pub fn snapshot_interval(&self) -> usize {
        self.output
            .as_ref()
            .and_then(|o| o.snapshot_interval)
            .unwrap_or(0)
    }

    pub fn output_directory(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.directory.as_deref())
            .unwrap_or("out")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: RunConfig = toml::from_str("").unwrap();
        let params = cfg.params();
        assert_eq!(params.theta, config::THETA);
        assert_eq!(params.dt, config::DELTA_T);
        assert_eq!(cfg.body_count(), config::NUM_BODIES);
        assert_eq!(cfg.scenario(), "disk");
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let cfg: RunConfig = toml::from_str(
            r#"
            [simulation]
            theta = 0.5
            steps = 10

            [bodies]
            scenario = "scatter"
            count = 500
            seed = 99
            "#,
        )
        .unwrap();

        let params = cfg.params();
        assert_eq!(params.theta, 0.5);
        assert_eq!(params.epsilon, config::EPSILON);
        assert_eq!(cfg.steps(), 10);
        assert_eq!(cfg.body_count(), 500);
        assert_eq!(cfg.seed(), 99);
        assert_eq!(cfg.scenario(), "scatter");
    }
}
