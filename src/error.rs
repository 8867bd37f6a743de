//! Error handling for MSCONS interchange processing.
//!
//! Format errors abort the current interchange only. Everything else
//! (I/O, discovery, configuration) belongs to the batch around it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MsconsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory traversal failed: {0}")]
    Discovery(#[from] walkdir::Error),

    #[error("Invalid file pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("Interchange does not start with a UNA service string advice (found '{found}')")]
    MissingServiceStringAdvice { found: String },

    #[error("Service string advice characters must be pairwise distinct: '{characters}'")]
    DuplicateServiceCharacters { characters: String },

    #[error("Anchor segment {tag} not found in message")]
    MissingAnchor { tag: &'static str },

    #[error(
        "Anchor segments out of order: section control at {section_control}, message trailer at {trailer}"
    )]
    AnchorsOutOfOrder {
        section_control: usize,
        trailer: usize,
    },

    #[error("Segment parser for {expected} received segment '{found}'")]
    SegmentTagMismatch { expected: &'static str, found: String },

    #[error("{tag} segment at position {position} in {region} has no open parent scope")]
    OrphanSegment {
        region: &'static str,
        tag: String,
        position: usize,
    },

    #[error("Input not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Processing failed for file: {path} - {reason}")]
    ProcessingFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl MsconsError {
    /// True for errors caused by the content of one interchange
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            MsconsError::MissingServiceStringAdvice { .. }
                | MsconsError::DuplicateServiceCharacters { .. }
                | MsconsError::MissingAnchor { .. }
                | MsconsError::AnchorsOutOfOrder { .. }
                | MsconsError::SegmentTagMismatch { .. }
                | MsconsError::OrphanSegment { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MsconsError>;
