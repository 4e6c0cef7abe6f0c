pub mod commands;
pub mod formatter;

use crate::core::config::{default_config, load_config, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "communique",
    version,
    about = "Codon optimization against a reference organism's codon usage bias",
    long_about = "Communique rewrites the coding sequence of a target gene so that every codon \
                  is the one its wanted organism prefers, judged by a codon usage bias index \
                  such as CAI or tAI."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "COMMUNIQUE_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Configuration from `--config`, or the defaults
    pub fn load_config(&self) -> Result<Config, crate::CommuniqueError> {
        match &self.config {
            Some(path) => load_config(path),
            None => Ok(default_config()),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Optimize a target gene for the wanted organism
    Optimize(commands::optimize::OptimizeArgs),

    /// Show the optimal codon of every amino acid
    Codons(commands::codons::CodonsArgs),

    /// Create or inspect configuration files
    Config(commands::config::ConfigArgs),
}
