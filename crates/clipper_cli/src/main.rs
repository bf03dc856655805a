use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use clipper_core::{PipelineConfig, ProcessingOutcome, Result};
use clipper_pipeline::{fix_links, HttpFetcher, Pipeline};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert web-clipping stubs into rendered markdown articles", long_about = None)]
struct Cli {
    /// Directory holding the pending stub files
    #[arg(long, default_value = "Ressources")]
    root: PathBuf,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fetch and convert every pending stub (the default)
    Process,
    /// Normalize split image links in every markdown file under the root
    FixLinks,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Process) {
        Commands::Process => {
            let config = PipelineConfig::for_root(cli.root);
            let pipeline = Pipeline::new(config, HttpFetcher::new());
            let outcomes = pipeline.run().await?;

            let converted = outcomes
                .iter()
                .filter(|o| matches!(o, ProcessingOutcome::Converted { .. }))
                .count();
            let manual = outcomes
                .iter()
                .filter(|o| matches!(o, ProcessingOutcome::NoUrlFound))
                .count();
            let failed = outcomes
                .iter()
                .filter(|o| matches!(o, ProcessingOutcome::FetchFailed { .. }))
                .count();
            info!(
                "Run complete: {} converted, {} moved for manual processing, {} failed",
                converted, manual, failed
            );
        }
        Commands::FixLinks => {
            let rewritten = fix_links(&cli.root)?;
            info!("Normalized links in {} file(s)", rewritten);
        }
    }

    Ok(())
}
