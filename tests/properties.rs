//! Property tests over random genes and profiles

mod common;

use common::{graded_profile, optimizer, organism};
use communique::bio::genetic_code::{codon_table, synonymous_codons, translate};
use communique::core::models::{CubIndex, OptimizationMethod};
use communique::core::selection::{CodonSelector, SelectionPolicy, SingleOrganismSelector};
use communique::report::{NullSummary, RunSummary, ORF_CATEGORY};
use communique::OptimizationRequest;
use proptest::prelude::*;

fn all_codons() -> Vec<String> {
    codon_table().keys().cloned().collect()
}

/// Random gene of whole codons, with the number of codons to skip
fn gene_and_skip() -> impl Strategy<Value = (String, usize)> {
    prop::collection::vec(0usize..64, 0..40).prop_flat_map(|indices| {
        let codons = all_codons();
        let gene: String = indices.iter().map(|&i| codons[i].as_str()).collect();
        let count = indices.len();
        (Just(gene), 0..=count)
    })
}

fn cub_index() -> impl Strategy<Value = CubIndex> {
    prop_oneof![Just(CubIndex::Cai), Just(CubIndex::Tai)]
}

proptest! {
    #[test]
    fn prop_length_and_prefix_preserved(
        (gene, skip) in gene_and_skip(),
        seed in 0u64..100,
        index in cub_index(),
    ) {
        let organisms = vec![organism("wanted", true, graded_profile(seed))];
        let request = OptimizationRequest::new(&gene, &organisms)
            .with_cub_index(index)
            .with_skipped_codons(skip);

        let optimized = optimizer(SelectionPolicy::Strict)
            .optimize_sequence(&request, &mut NullSummary)
            .unwrap();

        prop_assert_eq!(optimized.len(), gene.len());
        prop_assert_eq!(&optimized[..skip * 3], &gene[..skip * 3]);
    }

    #[test]
    fn prop_substitution_matches_codon_map(
        (gene, skip) in gene_and_skip(),
        seed in 0u64..100,
    ) {
        let organisms = vec![organism("wanted", true, graded_profile(seed))];
        let request = OptimizationRequest::new(&gene, &organisms).with_skipped_codons(skip);
        let mut summary = RunSummary::new();

        let optimized = optimizer(SelectionPolicy::Strict)
            .optimize_sequence(&request, &mut summary)
            .unwrap();
        let codon_map = SingleOrganismSelector::strict()
            .select_optimal_codons(&organisms, OptimizationMethod::SingleOrganism, CubIndex::Cai)
            .unwrap();

        let protein = translate(&gene).unwrap();
        for (i, &aa) in protein.iter().enumerate().skip(skip) {
            prop_assert_eq!(Some(&optimized[i * 3..i * 3 + 3]), codon_map.get(aa));
        }

        let recorded = &summary.latest(ORF_CATEGORY).unwrap()["aa_to_optimal_codon"];
        prop_assert_eq!(recorded, &serde_json::to_value(&codon_map).unwrap());
    }

    #[test]
    fn prop_codon_map_picks_max_weight(seed in 0u64..100, index in cub_index()) {
        let profile = graded_profile(seed);
        let organisms = vec![organism("wanted", true, profile.clone())];
        let codon_map = SingleOrganismSelector::strict()
            .select_optimal_codons(&organisms, OptimizationMethod::SingleOrganism, index)
            .unwrap();

        prop_assert_eq!(codon_map.len(), synonymous_codons().len());
        for (aa, codon) in codon_map.iter() {
            let synonymous = &synonymous_codons()[&aa];
            prop_assert!(synonymous.contains(codon));

            let chosen = profile.get(codon).unwrap();
            let best = synonymous
                .iter()
                .filter_map(|c| profile.get(c))
                .fold(f64::MIN, f64::max);
            prop_assert_eq!(chosen, best);

            // Nothing lexicographically earlier shares the maximum
            for other in synonymous.iter().filter(|c| c.as_str() < codon) {
                prop_assert!(profile.get(other).unwrap() < best);
            }
        }
    }

    #[test]
    fn prop_tai_never_touches_stop_codon(
        (gene, _) in gene_and_skip(),
        seed in 0u64..100,
        stop in prop_oneof![Just("TAA"), Just("TAG"), Just("TGA")],
    ) {
        let gene = format!("{}{}", gene, stop);
        let organisms = vec![organism("wanted", true, graded_profile(seed))];
        let request = OptimizationRequest::new(&gene, &organisms).with_cub_index(CubIndex::Tai);

        let optimized = optimizer(SelectionPolicy::Strict)
            .optimize_sequence(&request, &mut NullSummary)
            .unwrap();

        prop_assert_eq!(&optimized[optimized.len() - 3..], stop);
    }

    #[test]
    fn prop_deterministic(
        (gene, skip) in gene_and_skip(),
        seed in 0u64..100,
        index in cub_index(),
        tuned in any::<bool>(),
    ) {
        let organisms = vec![organism("wanted", true, graded_profile(seed))];
        let method = if tuned {
            OptimizationMethod::SingleOrganismTuned
        } else {
            OptimizationMethod::SingleOrganism
        };
        let request = OptimizationRequest::new(&gene, &organisms)
            .with_method(method)
            .with_cub_index(index)
            .with_skipped_codons(skip)
            .with_tuning_param(0.5)
            .with_dedup_codons(true);

        let optimizer = optimizer(SelectionPolicy::Strict);
        let mut first_summary = RunSummary::new();
        let mut second_summary = RunSummary::new();
        let first = optimizer.optimize_sequence(&request, &mut first_summary).unwrap();
        let second = optimizer.optimize_sequence(&request, &mut second_summary).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_summary.to_json(), second_summary.to_json());
    }
}
