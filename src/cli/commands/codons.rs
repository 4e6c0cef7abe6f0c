use crate::bio::genetic_code::synonymous_codons;
use crate::cli::formatter::codon_table;
use crate::core::config::Config;
use crate::core::models::{load_organisms, CubIndex};
use crate::core::selection::{create_selector, SelectionPolicy};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CodonsArgs {
    /// Organisms with their CUB profiles (JSON array)
    #[arg(long, value_name = "FILE")]
    pub organisms: PathBuf,

    /// CUB index to rank codons by (CAI, tAI)
    #[arg(long)]
    pub cub_index: Option<CubIndex>,

    /// Wanted-organism count handling (strict, lenient)
    #[arg(long)]
    pub policy: Option<SelectionPolicy>,

    /// Print the codon map as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CodonsArgs, config: Config) -> anyhow::Result<()> {
    let organisms = load_organisms(&args.organisms)?;
    let cub_index = args.cub_index.unwrap_or(config.orf.cub_index);
    let policy = args.policy.unwrap_or(config.orf.selection_policy);
    let selector = create_selector(config.orf.method, policy);

    let ranking = selector.rank_codons(&organisms, config.orf.method, cub_index)?;
    let codon_map = ranking.optimal();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&codon_map)?);
        return Ok(());
    }

    let rows: Vec<(char, String, f64, usize)> = codon_map
        .iter()
        .map(|(aa, codon)| {
            let weight = ranking
                .get(aa)
                .and_then(|ranked| ranked.first())
                .map(|best| best.weight)
                .unwrap_or_default();
            let synonymous = synonymous_codons().get(&aa).map_or(0, |c| c.len());
            (aa, codon.to_string(), weight, synonymous)
        })
        .collect();

    codon_table(&format!("Optimal codons ({})", cub_index), &rows);
    Ok(())
}
