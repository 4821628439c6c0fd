use crate::domains::planning::DEFAULT_ITERATION_CAP;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub grid: GridConfig,
    pub planning: PlanningConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: i32,
    pub columns: i32,
    pub obstacles: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningConfig {
    pub agents: usize,
    pub iteration_cap: u64,
    /// Fixed RNG seed for reproducible scenarios; omit for entropy.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Rolling log file path; omit to log to the console only.
    pub file: Option<String>,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading config from {}", path.as_ref().display()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                rows: 100,
                columns: 100,
                obstacles: 50,
            },
            planning: PlanningConfig {
                agents: 5,
                iteration_cap: DEFAULT_ITERATION_CAP,
                seed: None,
            },
            logging: LoggingConfig { file: None },
        }
    }
}
