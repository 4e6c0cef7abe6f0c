pub mod genetic_code;
pub mod sequence;

pub use genetic_code::{translate, AminoAcid, Codon, STOP_SYMBOL};
pub use sequence::TargetGene;
