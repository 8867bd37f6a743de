//! Batch processing of interchange files.
//!
//! Discovers interchange files, parses and structures them concurrently
//! and writes one JSON document per input. Every file is isolated: a
//! format error fails that file only and the batch carries on.

pub mod discovery;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::{discovery::FileDiscovery, writer::DocumentWriter};

use crate::config::MsconsConfig;
use crate::constants::DEFAULT_OUTPUT_DIR_NAME;
use crate::error::{MsconsError, Result};
use crate::extract::{classify_message, quantity_records};
use crate::models::{DocumentReport, DocumentStatus, ProcessingStats};
use crate::structure::structure_interchange;

use colored::*;
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;
use tokio::task;
use tracing::{debug, error};

/// Main processor for interchange batches
#[derive(Debug)]
pub struct DocumentProcessor {
    input_path: PathBuf,
    output_path: PathBuf,
    config: MsconsConfig,
}

impl DocumentProcessor {
    /// Create a new processor; output defaults to `structured/` next to the inputs
    pub fn new(input_path: PathBuf, output_path: Option<PathBuf>) -> Result<Self> {
        if !input_path.exists() {
            return Err(MsconsError::InputNotFound { path: input_path });
        }

        let output_path =
            output_path.unwrap_or_else(|| input_root(&input_path).join(DEFAULT_OUTPUT_DIR_NAME));

        Ok(Self {
            input_path,
            output_path,
            config: MsconsConfig::default(),
        })
    }

    /// Configure the processor
    pub fn with_config(mut self, config: MsconsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Main processing entry point
    pub async fn process(&mut self) -> Result<ProcessingStats> {
        let start_time = Instant::now();
        self.config.validate()?;

        println!("{}", "Starting MSCONS interchange processing".bright_green().bold());
        println!("  {} {}", "Input:".bright_cyan(), self.input_path.display());
        println!("  {} {}", "Output:".bright_cyan(), self.output_path.display());

        // Step 1: Discover interchange files
        println!("\n{}", "Discovering interchange files...".bright_yellow());
        let mut discovery = FileDiscovery::new(self.input_path.clone(), &self.config.file_pattern)?;
        let files = task::spawn_blocking(move || discovery.discover_files())
            .await
            .map_err(|e| MsconsError::ProcessingFailed {
                path: self.input_path.clone(),
                reason: format!("Discovery task failed: {}", e),
            })??;
        println!(
            "  {} {} interchange files",
            "Found".bright_green(),
            files.len().to_string().bright_white().bold()
        );

        let mut stats = ProcessingStats {
            output_path: self.output_path.clone(),
            ..Default::default()
        };

        if files.is_empty() {
            stats.processing_time_ms = start_time.elapsed().as_millis();
            return Ok(stats);
        }

        // Step 2: Create output directory
        fs::create_dir_all(&self.output_path).await?;

        // Step 3: Parse, structure and write concurrently
        println!("\n{}", "Processing interchanges...".bright_yellow());
        let writer = DocumentWriter::new(
            input_root(&self.input_path).to_path_buf(),
            self.output_path.clone(),
            self.config.pretty_json,
        );
        let mut reports = self.process_files(files, writer).await;
        reports.sort_by(|a, b| a.path.cmp(&b.path));

        for report in reports {
            stats.record(report);
        }
        stats.processing_time_ms = start_time.elapsed().as_millis();

        self.print_summary(&stats);
        Ok(stats)
    }

    async fn process_files(&self, files: Vec<PathBuf>, writer: DocumentWriter) -> Vec<DocumentReport> {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .map(|style| style.progress_chars("#>-"))
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb.set_message("Structuring interchanges");

        let workers = self.config.workers.min(files.len()).max(1);
        debug!("Processing {} files with {} workers", files.len(), workers);

        let reports = stream::iter(files)
            .map(|path| {
                let writer = writer.clone();
                let config = self.config.clone();
                let pb = pb.clone();
                async move {
                    if let Some(file_name) = path.file_name() {
                        pb.set_message(format!("Processing: {}", file_name.to_string_lossy()));
                    }

                    let task_path = path.clone();
                    let report = task::spawn_blocking(move || process_file(&task_path, &writer, &config))
                        .await
                        .unwrap_or_else(|e| {
                            error!("Worker for {} failed: {}", path.display(), e);
                            DocumentReport::failed(path, e)
                        });

                    pb.inc(1);
                    report
                }
            })
            .buffer_unordered(workers)
            .collect::<Vec<_>>()
            .await;

        pb.finish_with_message("Done");
        reports
    }

    fn print_summary(&self, stats: &ProcessingStats) {
        println!("\n{}", "Processing Summary".bright_green().bold());
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Files processed:".bright_cyan(),
            stats.files_processed.to_string().bright_white()
        );
        if stats.files_partial > 0 {
            println!(
                "  {} {}",
                "Files with dropped segments:".bright_yellow(),
                stats.files_partial.to_string().bright_yellow().bold()
            );
        }
        if stats.files_failed > 0 {
            println!(
                "  {} {}",
                "Files failed:".bright_red(),
                stats.files_failed.to_string().bright_red().bold()
            );
            for report in stats
                .reports
                .iter()
                .filter(|r| r.status == DocumentStatus::Failed)
            {
                println!(
                    "    {} {}",
                    report.path.display().to_string().red(),
                    report.error.as_deref().unwrap_or_default()
                );
            }
        }
        println!(
            "  {} {}",
            "Segments structured:".bright_cyan(),
            stats.segments_structured.to_string().bright_white().bold()
        );
        println!(
            "  {} {}",
            "Quantity records:".bright_cyan(),
            stats.records_extracted.to_string().bright_white().bold()
        );
    }
}

/// Directory the inputs are resolved against
pub(crate) fn input_root(input_path: &Path) -> &Path {
    if input_path.is_file() {
        input_path.parent().unwrap_or_else(|| Path::new("."))
    } else {
        input_path
    }
}

/// Process one file, turning any error into a failed report
fn process_file(path: &Path, writer: &DocumentWriter, config: &MsconsConfig) -> DocumentReport {
    match process_single(path, writer, config) {
        Ok(report) => report,
        Err(e) => {
            error!("Failed to process {}: {}", path.display(), e);
            DocumentReport::failed(path.to_path_buf(), e)
        }
    }
}

/// Parse, structure and write a single interchange file
pub fn process_single(
    path: &Path,
    writer: &DocumentWriter,
    config: &MsconsConfig,
) -> Result<DocumentReport> {
    let bytes = std::fs::read(path)?;
    let text = decode_interchange(&bytes);

    let (interchange, document) = structure_interchange(&text, &config.parse)?;
    debug!(
        "{}: {} segments, {} without field layout",
        path.display(),
        interchange.segments.len(),
        interchange.unrecognized_count()
    );

    let records = quantity_records(&document.body);
    let output = writer.write_document(path, &document)?;
    if config.write_records {
        writer.write_records(path, &records)?;
    }

    Ok(DocumentReport {
        path: path.to_path_buf(),
        status: DocumentStatus::from_document(&document),
        segments: document.len(),
        records: records.len(),
        classification: Some(classify_message(&document.header)),
        warnings: document.warnings,
        error: None,
        output: Some(output),
    })
}

/// UTF-8 if valid, otherwise ISO 8859-1 (the UNOC character set)
fn decode_interchange(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}
