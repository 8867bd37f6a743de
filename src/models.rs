//! Result types of batch processing.
//!
//! Per-document reports and the statistics of a whole run.

use crate::extract::MessageClassification;
use crate::structure::{StructureWarning, StructuredDocument};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of one interchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Every segment was placed
    Success,
    /// Structured, but some segments were dropped
    Partial,
    /// Aborted with a format or I/O error; no output written
    Failed,
}

impl DocumentStatus {
    pub fn from_document(document: &StructuredDocument) -> Self {
        if document.has_data_loss() {
            DocumentStatus::Partial
        } else {
            DocumentStatus::Success
        }
    }
}

/// Report for one processed interchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    pub path: PathBuf,
    pub status: DocumentStatus,
    pub segments: usize,
    pub records: usize,
    pub classification: Option<MessageClassification>,
    pub warnings: Vec<StructureWarning>,
    pub error: Option<String>,
    /// Structured document written for this interchange
    pub output: Option<PathBuf>,
}

impl DocumentReport {
    pub fn failed(path: PathBuf, error: impl ToString) -> Self {
        Self {
            path,
            status: DocumentStatus::Failed,
            segments: 0,
            records: 0,
            classification: None,
            warnings: Vec::new(),
            error: Some(error.to_string()),
            output: None,
        }
    }
}

/// Processing statistics
#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_partial: usize,
    pub files_failed: usize,
    pub segments_structured: usize,
    pub records_extracted: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
    pub reports: Vec<DocumentReport>,
}

impl ProcessingStats {
    /// Fold one report into the totals
    pub fn record(&mut self, report: DocumentReport) {
        match report.status {
            DocumentStatus::Success => self.files_processed += 1,
            DocumentStatus::Partial => {
                self.files_processed += 1;
                self.files_partial += 1;
            }
            DocumentStatus::Failed => self.files_failed += 1,
        }
        self.segments_structured += report.segments;
        self.records_extracted += report.records;
        self.reports.push(report);
    }
}
