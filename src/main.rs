//! src/main.rs
use anyhow::Context;
use clap::Parser;
use countngrams::configuration::get_configuration;
use countngrams::job::CountJob;
use countngrams::spec::{CountSpec, NGramSizes};
use countngrams::telemetry::init_tracing;
use std::path::PathBuf;

/// Counts word n-gram occurrences across a directory of text documents.
///
/// Each file is one document; n-grams never span document boundaries.
#[derive(Parser)]
#[command(name = "countngrams", version)]
struct Cli {
    /// Directory of input text files, one document per file
    input_dir: PathBuf,
    /// Directory the count records are written into
    output_dir: PathBuf,
    /// Comma-separated n-gram sizes to count, a subset of 1-5 (e.g. 1,2,3,5)
    sizes: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    init_tracing("countngrams")?;

    let sizes: NGramSizes = cli
        .sizes
        .parse()
        .context("Invalid <sizes> argument; expected a comma-separated subset of 1-5")?;
    let spec = CountSpec::new(cli.input_dir, cli.output_dir, sizes);
    let configuration = get_configuration().context("Failed to read configuration.")?;

    let summary = CountJob::run(spec, configuration).await?;
    tracing::info!(
        "Done: {} documents, {} distinct n-grams",
        summary.documents,
        summary.distinct_ngrams
    );
    Ok(())
}
