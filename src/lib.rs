pub mod bio;
pub mod cli;
pub mod core;
pub mod report;
pub mod utils;

pub use crate::core::{
    optimizer::{OptimizationRequest, SequenceOptimizer},
    selection::{CodonMap, CodonSelector, SelectionPolicy, SingleOrganismSelector},
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommuniqueError {
    #[error("Invalid number of wanted organisms ({count}) for {method} optimization method")]
    InvalidOrganismSelection { count: usize, method: String },

    #[error("No {cub_index} weight for any codon of amino acid '{amino_acid}' in organism {organism}")]
    MissingCodonWeight {
        amino_acid: char,
        cub_index: String,
        organism: String,
    },

    #[error("Invalid codon '{codon}' at codon position {position}")]
    InvalidCodon { codon: String, position: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CommuniqueError {
    fn from(err: serde_json::Error) -> Self {
        CommuniqueError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CommuniqueError>;
