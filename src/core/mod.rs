pub mod config;
pub mod models;
pub mod optimizer;
pub mod selection;

pub use config::Config;
pub use models::{CubIndex, CubProfile, Organism, OptimizationMethod};
pub use optimizer::{OptimizationRequest, OrfRunRecord, SequenceOptimizer};
