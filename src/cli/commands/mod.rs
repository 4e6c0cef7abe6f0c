pub mod codons;
pub mod config;
pub mod optimize;
