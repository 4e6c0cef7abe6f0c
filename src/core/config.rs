use crate::core::models::{CubIndex, OptimizationMethod};
use crate::core::selection::SelectionPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub orf: OrfConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrfConfig {
    /// Handling of a wanted-organism count other than 1
    pub selection_policy: SelectionPolicy,
    pub method: OptimizationMethod,
    pub cub_index: CubIndex,
    /// Leading codons copied unchanged
    pub skipped_codons: usize,
    /// Near-optimal cutoff as a fraction of the best weight (tuned method only)
    pub tuning_param: f64,
    /// Avoid repeating a codon at adjacent positions (tuned method only)
    pub dedup_codons: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the run summary JSON, if anywhere
    pub summary_path: Option<String>,
    pub pretty: bool,
}

impl Default for OrfConfig {
    fn default() -> Self {
        Self {
            selection_policy: SelectionPolicy::Strict,
            method: OptimizationMethod::SingleOrganism,
            cub_index: CubIndex::Cai,
            skipped_codons: 0,
            tuning_param: 1.0,
            dedup_codons: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            summary_path: None,
            pretty: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), crate::CommuniqueError> {
        if !(0.0..=1.0).contains(&self.orf.tuning_param) {
            return Err(crate::CommuniqueError::Config(format!(
                "orf.tuning_param must be within [0, 1], got {}",
                self.orf.tuning_param
            )));
        }
        Ok(())
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, crate::CommuniqueError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| crate::CommuniqueError::Config(format!("Failed to parse config: {}", e)))?;
    config.validate()?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), crate::CommuniqueError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| crate::CommuniqueError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
