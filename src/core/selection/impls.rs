//! Single-organism codon selection

use super::traits::{CodonRanking, CodonSelector, RankedCodon, SelectionPolicy};
use crate::bio::genetic_code::{synonymous_codons, AminoAcid, Codon};
use crate::core::models::{CubIndex, Organism, OptimizationMethod};
use crate::{CommuniqueError, Result};
use std::collections::BTreeSet;
use tracing::{debug, error, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reads the codon weights of the one organism flagged for optimization
#[derive(Debug, Clone, Default)]
pub struct SingleOrganismSelector {
    policy: SelectionPolicy,
}

impl SingleOrganismSelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn strict() -> Self {
        Self::new(SelectionPolicy::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(SelectionPolicy::Lenient)
    }

    /// The organism whose profile drives selection
    pub fn wanted_organism<'a>(
        &self,
        organisms: &'a [Organism],
        method: OptimizationMethod,
    ) -> Result<&'a Organism> {
        let wanted: Vec<&Organism> = organisms.iter().filter(|o| o.is_optimized).collect();
        let count = wanted.len();

        if count != 1 {
            match self.policy {
                SelectionPolicy::Strict => {
                    error!(
                        "Number of wanted organisms is {} and is not suitable for the current optimization method {}",
                        count, method
                    );
                    return Err(CommuniqueError::InvalidOrganismSelection {
                        count,
                        method: method.to_string(),
                    });
                }
                SelectionPolicy::Lenient => {
                    warn!(
                        "Number of wanted organisms is {} for the current optimization method {}. \
                         Optimizing based on the first wanted organism.",
                        count, method
                    );
                }
            }
        }

        wanted.first().copied().ok_or_else(|| CommuniqueError::InvalidOrganismSelection {
            count,
            method: method.to_string(),
        })
    }

    fn rank_amino_acid(
        organism: &Organism,
        aa: AminoAcid,
        codons: &BTreeSet<Codon>,
        cub_index: CubIndex,
    ) -> Result<(AminoAcid, Vec<RankedCodon>)> {
        let mut ranked: Vec<RankedCodon> = organism
            .profile(cub_index)
            .iter()
            .filter(|(codon, _)| codons.contains(*codon))
            .map(|(codon, weight)| RankedCodon {
                codon: codon.clone(),
                weight,
            })
            .collect();

        if ranked.is_empty() {
            return Err(CommuniqueError::MissingCodonWeight {
                amino_acid: aa,
                cub_index: cub_index.to_string(),
                organism: organism.name.clone(),
            });
        }

        // Stable sort keeps the profile's key order among equal weights
        ranked.sort_by(|a, b| b.weight.total_cmp(&a.weight));
        Ok((aa, ranked))
    }
}

impl CodonSelector for SingleOrganismSelector {
    fn rank_codons(
        &self,
        organisms: &[Organism],
        method: OptimizationMethod,
        cub_index: CubIndex,
    ) -> Result<CodonRanking> {
        let organism = self.wanted_organism(organisms, method)?;
        organism.profile(cub_index).validate().map_err(|e| {
            CommuniqueError::InvalidInput(format!("{} profile of {}: {}", cub_index, organism.name, e))
        })?;
        let entries: Vec<(AminoAcid, &BTreeSet<Codon>)> =
            synonymous_codons().iter().map(|(&aa, codons)| (aa, codons)).collect();

        #[cfg(feature = "parallel")]
        let ranked: Vec<Result<(AminoAcid, Vec<RankedCodon>)>> = entries
            .par_iter()
            .map(|&(aa, codons)| Self::rank_amino_acid(organism, aa, codons, cub_index))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let ranked: Vec<Result<(AminoAcid, Vec<RankedCodon>)>> = entries
            .iter()
            .map(|&(aa, codons)| Self::rank_amino_acid(organism, aa, codons, cub_index))
            .collect();

        // Reassembled in table order, so the first failing amino acid is reported
        let ranking = ranked.into_iter().collect::<Result<CodonRanking>>()?;

        debug!(
            "Ranked codons for {} amino acids using {} profile of {}",
            ranking.len(),
            cub_index,
            organism.name
        );
        Ok(ranking)
    }

    fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    fn strategy_name(&self) -> &str {
        "single-organism"
    }
}

/// Build the selector for an optimization method
pub fn create_selector(
    method: OptimizationMethod,
    policy: SelectionPolicy,
) -> Box<dyn CodonSelector> {
    match method {
        OptimizationMethod::SingleOrganism | OptimizationMethod::SingleOrganismTuned => {
            Box::new(SingleOrganismSelector::new(policy))
        }
    }
}
