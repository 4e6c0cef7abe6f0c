use communique::bio::genetic_code::codon_table;
use communique::core::models::{CubIndex, CubProfile, Organism, OptimizationMethod};
use communique::core::selection::{CodonSelector, SingleOrganismSelector};
use communique::report::NullSummary;
use communique::utils::timer::SystemTimer;
use communique::{OptimizationRequest, SequenceOptimizer};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn generate_organism() -> Organism {
    let profile: CubProfile = codon_table()
        .keys()
        .enumerate()
        .map(|(i, codon)| (codon.clone(), ((i * 31) % 64) as f64 / 63.0))
        .collect();
    Organism::new("bench")
        .optimized()
        .with_profile(CubIndex::Cai, profile.clone())
        .with_profile(CubIndex::Tai, profile)
}

fn generate_gene(num_codons: usize) -> String {
    let codons: Vec<&String> = codon_table()
        .iter()
        .filter(|(_, &aa)| aa != '*')
        .map(|(codon, _)| codon)
        .collect();
    let mut gene = String::with_capacity(num_codons * 3 + 3);
    for i in 0..num_codons {
        gene.push_str(codons[(i * 7) % codons.len()]);
    }
    gene.push_str("TAA");
    gene
}

fn bench_codon_selection(c: &mut Criterion) {
    let organisms = vec![generate_organism()];
    let selector = SingleOrganismSelector::strict();

    c.bench_function("codon_selection", |b| {
        b.iter(|| {
            let map = selector
                .select_optimal_codons(
                    black_box(&organisms),
                    OptimizationMethod::SingleOrganism,
                    CubIndex::Cai,
                )
                .unwrap();
            black_box(map);
        });
    });
}

fn bench_sequence_optimization(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence_optimization");
    let organisms = vec![generate_organism()];
    let optimizer = SequenceOptimizer::new(
        Box::new(SingleOrganismSelector::strict()),
        Box::new(SystemTimer),
    );

    for num_codons in [100, 1_000, 10_000].iter() {
        let gene = generate_gene(*num_codons);
        for method in [OptimizationMethod::SingleOrganism, OptimizationMethod::SingleOrganismTuned] {
            group.bench_with_input(
                BenchmarkId::new(method.to_string(), num_codons),
                &gene,
                |b, gene| {
                    let request = OptimizationRequest::new(gene, &organisms)
                        .with_method(method)
                        .with_cub_index(CubIndex::Tai)
                        .with_tuning_param(0.8)
                        .with_dedup_codons(true);
                    b.iter(|| {
                        let optimized = optimizer
                            .optimize_sequence(black_box(&request), &mut NullSummary)
                            .unwrap();
                        black_box(optimized);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_codon_selection, bench_sequence_optimization);
criterion_main!(benches);
