use crate::bio::sequence::TargetGene;
use crate::cli::formatter::{codon_changes, print_run_report, success, warning, wrap_sequence};
use crate::core::config::Config;
use crate::core::models::{load_organisms, CubIndex, OptimizationMethod};
use crate::core::optimizer::{OptimizationRequest, SequenceOptimizer};
use crate::core::selection::{create_selector, SelectionPolicy};
use crate::report::RunSummary;
use crate::utils::timer::SystemTimer;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args)]
pub struct OptimizeArgs {
    /// Target gene as FASTA or plain sequence
    #[arg(short, long, value_name = "FILE", conflicts_with = "sequence", required_unless_present = "sequence")]
    pub gene: Option<PathBuf>,

    /// Target gene given inline
    #[arg(short, long, value_name = "SEQUENCE")]
    pub sequence: Option<String>,

    /// Organisms with their CUB profiles (JSON array)
    #[arg(long, value_name = "FILE")]
    pub organisms: PathBuf,

    /// CUB index to optimize by (CAI, tAI)
    #[arg(long)]
    pub cub_index: Option<CubIndex>,

    /// Optimization method (single-organism, single-organism-tuned)
    #[arg(short, long)]
    pub method: Option<OptimizationMethod>,

    /// Number of leading codons to leave untouched
    #[arg(long, value_name = "CODONS")]
    pub skip: Option<usize>,

    /// Near-optimal cutoff in [0, 1] for the tuned method
    #[arg(long)]
    pub tuning: Option<f64>,

    /// Avoid repeating a codon at adjacent positions (tuned method)
    #[arg(long)]
    pub dedup: bool,

    /// Wanted-organism count handling (strict, lenient)
    #[arg(long)]
    pub policy: Option<SelectionPolicy>,

    /// Write the optimized sequence here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the run summary JSON here
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    /// Print a summary table after the sequence
    #[arg(long)]
    pub report: bool,
}

pub fn run(args: OptimizeArgs, config: Config) -> anyhow::Result<()> {
    let raw = match (&args.gene, &args.sequence) {
        (Some(path), _) => std::fs::read_to_string(path)?,
        (None, Some(sequence)) => sequence.clone(),
        (None, None) => anyhow::bail!("Either --gene or --sequence is required"),
    };
    let is_fasta = raw.trim_start().starts_with('>');
    let gene = TargetGene::parse(&raw)?;
    let organisms = load_organisms(&args.organisms)?;
    info!(
        "Loaded {} organisms and a {}-codon target gene",
        organisms.len(),
        gene.codon_count()
    );

    let method = args.method.unwrap_or(config.orf.method);
    if (args.tuning.is_some() || args.dedup) && !method.accepts_tuning() {
        warning(&format!("--tuning and --dedup have no effect with the {} method", method));
    }
    let policy = args.policy.unwrap_or(config.orf.selection_policy);
    let optimizer = SequenceOptimizer::new(create_selector(method, policy), Box::new(SystemTimer))
        .with_tuning_defaults(config.orf.tuning_param, config.orf.dedup_codons);

    let mut request = OptimizationRequest::new(gene.as_str(), &organisms)
        .with_method(method)
        .with_cub_index(args.cub_index.unwrap_or(config.orf.cub_index))
        .with_skipped_codons(args.skip.unwrap_or(config.orf.skipped_codons));
    if let Some(tuning) = args.tuning {
        request = request.with_tuning_param(tuning);
    }
    if args.dedup {
        request = request.with_dedup_codons(true);
    }

    let mut summary = RunSummary::new();
    let optimized = optimizer.optimize_sequence(&request, &mut summary)?;

    let rendered = if is_fasta {
        format!("{}\n{}\n", gene.header(), wrap_sequence(&optimized, 80))
    } else {
        format!("{}\n", optimized)
    };
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            success(&format!("Optimized sequence written to {}", path.display()));
        }
        None => print!("{}", rendered),
    }

    let summary_path = args
        .summary
        .clone()
        .or_else(|| config.output.summary_path.as_ref().map(PathBuf::from));
    if let Some(path) = summary_path {
        summary.save(&path, config.output.pretty)?;
        success(&format!("Run summary written to {}", path.display()));
    }

    if args.report {
        print_run_report(
            &[
                ("Method", method.to_string()),
                ("CUB index", request.cub_index.to_string()),
                ("Policy", policy.to_string()),
                ("Codons", gene.codon_count().to_string()),
                ("Skipped", request.skipped_codons.to_string()),
            ],
            &codon_changes(&gene, &optimized),
        );
    }

    Ok(())
}
