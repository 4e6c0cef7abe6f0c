//! Shared fixtures for the integration tests
#![allow(dead_code)]

use communique::bio::genetic_code::codon_table;
use communique::core::models::{CubIndex, CubProfile, Organism};
use communique::core::selection::{SelectionPolicy, SingleOrganismSelector};
use communique::utils::timer::FixedTimer;
use communique::SequenceOptimizer;
use std::time::Duration;

/// Profile covering all 64 codons with a deterministic, codon-specific weight
pub fn graded_profile(seed: u64) -> CubProfile {
    codon_table()
        .keys()
        .enumerate()
        .map(|(i, codon)| {
            let weight = ((i as u64 * 37 + seed * 11) % 17) as f64 / 16.0;
            (codon.clone(), weight)
        })
        .collect()
}

/// Profile with weight 0.5 everywhere except the listed codons
pub fn flat_profile(overrides: &[(&str, f64)]) -> CubProfile {
    let mut profile = CubProfile::new();
    for codon in codon_table().keys() {
        profile.insert(codon, 0.5);
    }
    for &(codon, weight) in overrides {
        profile.insert(codon, weight);
    }
    profile
}

pub fn organism(name: &str, wanted: bool, profile: CubProfile) -> Organism {
    let organism = Organism::new(name)
        .with_profile(CubIndex::Cai, profile.clone())
        .with_profile(CubIndex::Tai, profile);
    if wanted {
        organism.optimized()
    } else {
        organism
    }
}

pub fn optimizer(policy: SelectionPolicy) -> SequenceOptimizer {
    SequenceOptimizer::new(
        Box::new(SingleOrganismSelector::new(policy)),
        Box::new(FixedTimer(Duration::from_millis(5))),
    )
}

/// Path of a file under tests/data
pub fn data_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}
