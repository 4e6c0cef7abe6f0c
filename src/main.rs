use clap::Parser;
use colored::*;
use communique::cli::{Cli, Commands};
use communique::CommuniqueError;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(2);
        }
    };

    // COMMUNIQUE_LOG wins over -v, which wins over the configured level
    let log_level = std::env::var("COMMUNIQUE_LOG").unwrap_or_else(|_| match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Optimize(args) => communique::cli::commands::optimize::run(args, config),
        Commands::Codons(args) => communique::cli::commands::codons::run(args, config),
        Commands::Config(args) => communique::cli::commands::config::run(args, config),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<CommuniqueError>() {
            Some(CommuniqueError::Config(_)) => 2,
            Some(CommuniqueError::Io(_)) => 3,
            Some(CommuniqueError::Parse(_)) | Some(CommuniqueError::InvalidInput(_)) => 4,
            Some(CommuniqueError::InvalidOrganismSelection { .. })
            | Some(CommuniqueError::MissingCodonWeight { .. })
            | Some(CommuniqueError::InvalidCodon { .. }) => 5,
            None => 1,
        };
        process::exit(exit_code);
    }
}
