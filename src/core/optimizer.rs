//! Codon-for-codon rewriting of a target gene
//!
//! Every codon past the skipped prefix is replaced with the optimal codon of
//! its amino acid. Under the tRNA adaptation index the original stop codon is
//! put back, since stop codons have no tAI weight worth optimizing for.

use crate::bio::genetic_code::{is_stop, normalize_bases, translate, AminoAcid};
use crate::core::config::Config;
use crate::core::models::{CubIndex, Organism, OptimizationMethod};
use crate::core::selection::{create_selector, CodonMap, CodonRanking, CodonSelector};
use crate::report::{RunSummarySink, ORF_CATEGORY};
use crate::utils::timer::{SystemTimer, Timer};
use crate::{CommuniqueError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Inputs of a single optimization call
#[derive(Debug, Clone)]
pub struct OptimizationRequest<'a> {
    pub target_gene: &'a str,
    pub organisms: &'a [Organism],
    pub method: OptimizationMethod,
    pub cub_index: CubIndex,
    pub skipped_codons: usize,
    /// Falls back to the optimizer default when unset
    pub tuning_param: Option<f64>,
    /// Falls back to the optimizer default when unset
    pub dedup_codons: Option<bool>,
}

impl<'a> OptimizationRequest<'a> {
    pub fn new(target_gene: &'a str, organisms: &'a [Organism]) -> Self {
        Self {
            target_gene,
            organisms,
            method: OptimizationMethod::SingleOrganism,
            cub_index: CubIndex::Cai,
            skipped_codons: 0,
            tuning_param: None,
            dedup_codons: None,
        }
    }

    pub fn with_method(mut self, method: OptimizationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_cub_index(mut self, cub_index: CubIndex) -> Self {
        self.cub_index = cub_index;
        self
    }

    pub fn with_skipped_codons(mut self, skipped_codons: usize) -> Self {
        self.skipped_codons = skipped_codons;
        self
    }

    pub fn with_tuning_param(mut self, tuning_param: f64) -> Self {
        self.tuning_param = Some(tuning_param);
        self
    }

    pub fn with_dedup_codons(mut self, dedup_codons: bool) -> Self {
        self.dedup_codons = Some(dedup_codons);
        self
    }
}

/// Diagnostic record of one optimization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrfRunRecord {
    pub orf_module_input_sequence: String,
    pub optimized_sequence: String,
    pub aa_to_optimal_codon: CodonMap,
    /// Seconds
    pub run_time: f64,
}

/// Per-position codon choice of the tuned method
struct TunedChoice<'r> {
    ranking: &'r CodonRanking,
    threshold: f64,
    dedup: bool,
}

impl<'r> TunedChoice<'r> {
    fn choose(&self, aa: AminoAcid, previous: Option<&str>) -> Option<&'r str> {
        let candidates = self.ranking.near_optimal(aa, self.threshold);
        let optimal = *candidates.first()?;
        if self.dedup && previous == Some(optimal) {
            return Some(candidates.get(1).copied().unwrap_or(optimal));
        }
        Some(optimal)
    }
}

pub struct SequenceOptimizer {
    selector: Box<dyn CodonSelector>,
    timer: Box<dyn Timer>,
    tuning_param: f64,
    dedup_codons: bool,
}

impl SequenceOptimizer {
    pub fn new(selector: Box<dyn CodonSelector>, timer: Box<dyn Timer>) -> Self {
        Self {
            selector,
            timer,
            tuning_param: 1.0,
            dedup_codons: false,
        }
    }

    /// Selector, policy and tuned-method defaults taken from configuration
    pub fn from_config(config: &Config) -> Self {
        let selector = create_selector(config.orf.method, config.orf.selection_policy);
        Self::new(selector, Box::new(SystemTimer))
            .with_tuning_defaults(config.orf.tuning_param, config.orf.dedup_codons)
    }

    pub fn with_tuning_defaults(mut self, tuning_param: f64, dedup_codons: bool) -> Self {
        self.tuning_param = tuning_param;
        self.dedup_codons = dedup_codons;
        self
    }

    pub fn selector(&self) -> &dyn CodonSelector {
        self.selector.as_ref()
    }

    /// Rewrite the target gene and report the run to `summary`.
    ///
    /// Nothing is recorded when any step fails.
    pub fn optimize_sequence(
        &self,
        request: &OptimizationRequest<'_>,
        summary: &mut dyn RunSummarySink,
    ) -> Result<String> {
        let timer = self.timer.start();

        let tuning_param = request.tuning_param.unwrap_or(self.tuning_param);
        let dedup_codons = request.dedup_codons.unwrap_or(self.dedup_codons);

        let ranking = match request.method {
            OptimizationMethod::SingleOrganism => {
                if request.tuning_param.is_some() || request.dedup_codons.is_some() {
                    debug!("Tuning options are ignored by the {} method", request.method);
                }
                None
            }
            OptimizationMethod::SingleOrganismTuned => {
                if !(0.0..=1.0).contains(&tuning_param) {
                    return Err(CommuniqueError::InvalidInput(format!(
                        "tuning parameter must be within [0, 1], got {}",
                        tuning_param
                    )));
                }
                Some(self.selector.rank_codons(
                    request.organisms,
                    request.method,
                    request.cub_index,
                )?)
            }
        };
        let codon_map = match &ranking {
            Some(ranking) => ranking.optimal(),
            None => self.selector.select_optimal_codons(
                request.organisms,
                request.method,
                request.cub_index,
            )?,
        };
        debug!(
            "Optimal codons from {} selection: {:?}",
            self.selector.strategy_name(),
            codon_map
        );

        let target_protein = translate(request.target_gene)?;
        // Kept codons must share the alphabet of the substituted ones
        let target_gene = normalize_bases(request.target_gene);

        let skipped_codons = request.skipped_codons;
        if skipped_codons > target_protein.len() {
            return Err(CommuniqueError::InvalidInput(format!(
                "cannot skip {} codons of a {}-codon gene",
                skipped_codons,
                target_protein.len()
            )));
        }

        let tuned = ranking.as_ref().map(|ranking| TunedChoice {
            ranking,
            threshold: tuning_param,
            dedup: dedup_codons,
        });

        let skipped_codons_size_in_nt = skipped_codons * 3;
        let mut optimized_sequence = String::with_capacity(target_gene.len());
        optimized_sequence.push_str(&target_gene[..skipped_codons_size_in_nt]);

        let mut previous: Option<&str> = None;
        for &aa in &target_protein[skipped_codons..] {
            let optimal_codon = match &tuned {
                Some(tuned) => tuned.choose(aa, previous),
                None => codon_map.get(aa),
            }
            .ok_or_else(|| {
                CommuniqueError::InvalidInput(format!(
                    "no optimal codon was selected for amino acid '{}'",
                    aa
                ))
            })?;
            optimized_sequence.push_str(optimal_codon);
            previous = Some(optimal_codon);
        }

        let ends_with_stop = target_protein.last().copied().is_some_and(is_stop);
        if ends_with_stop && request.cub_index.is_trna_adaptation_index() {
            let stop_start = target_gene.len() - 3;
            optimized_sequence.truncate(stop_start);
            optimized_sequence.push_str(&target_gene[stop_start..]);
        }

        let run_time = timer.elapsed().as_secs_f64();
        info!(
            "Optimized {} codons ({} skipped) in {:.3}s",
            target_protein.len(),
            skipped_codons,
            run_time
        );

        let record = OrfRunRecord {
            orf_module_input_sequence: target_gene.clone(),
            optimized_sequence: optimized_sequence.clone(),
            aa_to_optimal_codon: codon_map,
            run_time,
        };
        summary.add_to_run_summary(ORF_CATEGORY, serde_json::to_value(&record)?);

        Ok(optimized_sequence)
    }
}
