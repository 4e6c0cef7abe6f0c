//! Optimal codon selection

pub mod impls;
pub mod traits;

pub use traits::{CodonMap, CodonRanking, CodonSelector, RankedCodon, SelectionPolicy};

pub use impls::{create_selector, SingleOrganismSelector};
