//! src/job.rs
use crate::aggregate::CountTable;
use crate::configuration::Settings;
use crate::extract::NGramExtractor;
use crate::output::PartitionedCountWriter;
use crate::reader::WholeFileSource;
use crate::spec::CountSpec;
use crate::tokenize::tokenize;
use anyhow::Context;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub job_id: Uuid,
    pub documents: usize,
    pub distinct_ngrams: usize,
    pub total_count: u64,
}

/// Runs the count pipeline across a pool of in-process workers. Each worker
/// owns a disjoint batch of whole documents (the source is not splittable,
/// so a document is never shared), runs the pure read → tokenize → extract
/// chain per document, and pre-aggregates its own emissions. The per-worker
/// partial tables are then merged per key into the final totals and written
/// out as partitioned record files.
pub struct CountJob;

impl CountJob {
    #[tracing::instrument(name = "Run count job", skip_all, fields(input_dir = %spec.input_dir().display()))]
    pub async fn run(spec: CountSpec, configuration: Settings) -> Result<JobSummary, anyhow::Error> {
        let job_id = Uuid::new_v4();
        let source = WholeFileSource::new(spec.input_dir());
        let documents = source.list().context("Failed to enumerate input documents")?;
        let document_count = documents.len();
        tracing::info!("Job {job_id}: counting n-grams across {document_count} documents");

        let worker_count = (configuration.cluster.workers as usize).max(1);
        let mut batches: Vec<Vec<PathBuf>> = vec![Vec::new(); worker_count];
        for (i, document) in documents.into_iter().enumerate() {
            batches[i % worker_count].push(document);
        }

        let extractor = NGramExtractor::new(spec.sizes());
        let mut handles: Vec<JoinHandle<Result<CountTable, anyhow::Error>>> = Vec::new();
        for batch in batches {
            let source = source.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                run_worker(&source, extractor, batch)
            }));
        }

        let mut totals = CountTable::new();
        for handle in handles {
            let partial = handle.await.context("Worker task panicked")??;
            totals.merge(partial);
        }

        let distinct_ngrams = totals.len();
        let total_count = totals.total();

        let mut writer = PartitionedCountWriter::new(
            spec.output_dir(),
            configuration.cluster.output_partitions as usize,
        )
        .context("Failed to open output directory for writing")?;
        for record in totals.into_records() {
            writer.write(&record)?;
        }
        writer.close().context("Failed to finalize output files")?;

        tracing::info!(
            "Job {job_id}: wrote {distinct_ngrams} distinct n-grams ({total_count} total occurrences)"
        );
        Ok(JobSummary {
            job_id,
            documents: document_count,
            distinct_ngrams,
            total_count,
        })
    }
}

/// One worker's unit of work: a batch of whole documents in, one locally
/// pre-aggregated partial table out. Pure apart from reading the files, so
/// a failed attempt can be re-run after its output is discarded.
#[tracing::instrument(name = "Run worker", skip_all, fields(documents = batch.len()))]
fn run_worker(
    source: &WholeFileSource,
    extractor: NGramExtractor,
    batch: Vec<PathBuf>,
) -> Result<CountTable, anyhow::Error> {
    let mut partial = CountTable::new();
    for path in batch {
        let mut reader = source.open(&path)?;
        while let Some(document) = reader.read() {
            let text = document.text();
            let tokens = tokenize(&text);
            tracing::debug!(
                "Extracting from {} ({} tokens)",
                document.path().display(),
                tokens.len()
            );
            for (key, count) in extractor.extract(&tokens) {
                partial.add(key, count);
            }
        }
    }
    Ok(partial)
}
