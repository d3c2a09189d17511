use ability_metadata::{pipeline, GeneratorConfig, RunSummary};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Regenerate the ability metadata asset from the ability corpus.
#[derive(Parser, Debug)]
#[command(name = "ability-metadata", version, about)]
struct Cli {
    /// RON configuration file. Defaults to ./ability_metadata.ron when present.
    #[arg(long, env = "ABILITY_METADATA_CONFIG")]
    config: Option<PathBuf>,
}

fn init_logging() {
    let filter = if std::env::var("DEBUG_LOGGING").is_ok() {
        "info,ability_metadata=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .init();
}

fn print_summary(summary: &RunSummary) {
    println!("Generated metadata for {} abilities", summary.abilities);
    println!("  Effects:            {}", summary.effects);
    println!("  Signature profiles: {}", summary.signature_profiles);
    println!("  Fallback only:      {}", summary.fallback_only);
    println!("  Species-restricted: {}", summary.restricted);
    println!("  Output:             {}", summary.output_path.display());

    if !summary.examples.is_empty() {
        println!();
        println!("Examples:");
        for example in &summary.examples {
            println!("  {}", example.name);
            for description in &example.descriptions {
                println!("    - {}", description);
            }
        }
    }
}

fn generate(cli: &Cli) -> Result<RunSummary> {
    let config = GeneratorConfig::resolve(cli.config.as_deref())
        .context("could not load generator configuration")?;
    pipeline::run(&config).context("ability metadata generation failed")
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match generate(&cli) {
        Ok(summary) => print_summary(&summary),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(1);
        }
    }
}
