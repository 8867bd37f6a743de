//! Non-fatal structuring diagnostics.

use super::path::GroupLevel;
use crate::error::MsconsError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message region a segment belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Header,
    Body,
    Footer,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Body => "body",
            Region::Footer => "footer",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A segment that could not be placed, or an inconsistency in the message.
///
/// Positions index the full segment sequence of the interchange (UNA excluded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructureWarning {
    /// Tag has no transition in this region
    Unrecognized {
        region: Region,
        position: usize,
        tag: String,
    },
    /// Segment needs a parent scope that is not open
    Orphan {
        region: Region,
        position: usize,
        tag: String,
        parent: GroupLevel,
    },
    /// Second occurrence of a single-slot segment
    Duplicate {
        region: Region,
        position: usize,
        tag: String,
    },
    /// UNT count differs from the segments actually present
    SegmentCountMismatch { declared: String, actual: usize },
}

impl StructureWarning {
    /// True if the segment at this warning's position was dropped
    pub fn is_data_loss(&self) -> bool {
        !matches!(self, StructureWarning::SegmentCountMismatch { .. })
    }

    pub fn is_orphan(&self) -> bool {
        matches!(self, StructureWarning::Orphan { .. })
    }

    /// Format error raised for this warning in strict mode
    pub fn to_error(&self) -> Option<MsconsError> {
        match self {
            StructureWarning::Orphan {
                region,
                position,
                tag,
                ..
            } => Some(MsconsError::OrphanSegment {
                region: region.as_str(),
                tag: tag.clone(),
                position: *position,
            }),
            _ => None,
        }
    }
}

impl fmt::Display for StructureWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureWarning::Unrecognized {
                region,
                position,
                tag,
            } => write!(
                f,
                "could not place {} segment at position {} in {}",
                tag, position, region
            ),
            StructureWarning::Orphan {
                region,
                position,
                tag,
                parent,
            } => write!(
                f,
                "no open {} scope for {} segment at position {} in {}, segment dropped",
                parent, tag, position, region
            ),
            StructureWarning::Duplicate {
                region,
                position,
                tag,
            } => write!(
                f,
                "duplicate {} segment at position {} in {}, segment dropped",
                tag, position, region
            ),
            StructureWarning::SegmentCountMismatch { declared, actual } => write!(
                f,
                "message trailer declares {} segments but message has {}",
                declared, actual
            ),
        }
    }
}
