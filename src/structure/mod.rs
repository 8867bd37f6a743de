//! Hierarchical structuring of parsed MSCONS messages
//!
//! EDIFACT does not mark where a segment group starts or ends. This module
//! rebuilds the nesting from tag order alone and keys every placed segment
//! by its [`SegmentPath`].
//!
//! ## Architecture
//!
//! - [`splitter`] - header / detail / summary partitioning on UNS and UNT
//! - [`engine`] - region state machine trait and the fold that runs it
//! - [`header`], [`body`], [`footer`] - the three transition tables
//! - [`path`] - dotted path keys, e.g. `SG5.1.SG6.2.SG9.1.SG10.3`
//! - [`warnings`] - non-fatal diagnostics collected alongside the result

pub mod body;
pub mod engine;
pub mod footer;
pub mod header;
pub mod path;
pub mod splitter;
pub mod warnings;

#[cfg(test)]
pub mod tests;

pub use body::BodyState;
pub use engine::{RegionMachine, RegionResult, SegmentMap, structure_region};
pub use footer::FooterState;
pub use header::HeaderState;
pub use path::{GroupLevel, SegmentPath};
pub use splitter::{Regions, split_regions};
pub use warnings::{Region, StructureWarning};

use crate::config::ParseOptions;
use crate::constants::tags;
use crate::edifact::{Interchange, Segment, parse_interchange};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Path-keyed view of one message, split into its three regions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    pub header: SegmentMap,
    pub body: SegmentMap,
    pub footer: SegmentMap,
    pub warnings: Vec<StructureWarning>,
}

impl StructuredDocument {
    /// Total number of placed segments
    pub fn len(&self) -> usize {
        self.header.len() + self.body.len() + self.footer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a segment by its dotted path in any region
    pub fn get(&self, path: &str) -> Option<&Segment> {
        let path: SegmentPath = path.parse().ok()?;
        self.header
            .get(&path)
            .or_else(|| self.body.get(&path))
            .or_else(|| self.footer.get(&path))
    }

    /// True if any segment was dropped while structuring
    pub fn has_data_loss(&self) -> bool {
        self.warnings.iter().any(StructureWarning::is_data_loss)
    }
}

/// Structure a parsed segment sequence
pub fn structure_segments(segments: &[Segment], options: &ParseOptions) -> Result<StructuredDocument> {
    let regions = split_regions(segments)?;
    let policy = options.attachment;

    let header = structure_region::<HeaderState>(regions.header, 0, policy)?;
    let body = structure_region::<BodyState>(regions.detail, regions.detail_offset, policy)?;
    let footer = structure_region::<FooterState>(regions.summary, regions.summary_offset, policy)?;

    let mut warnings = header.warnings;
    warnings.extend(body.warnings);
    warnings.extend(footer.warnings);
    warnings.extend(check_segment_count(segments, regions.summary_offset));

    debug!(
        "Structured {} header, {} body, {} footer segments with {} warnings",
        header.entries.len(),
        body.entries.len(),
        footer.entries.len(),
        warnings.len()
    );

    Ok(StructuredDocument {
        header: header.entries,
        body: body.entries,
        footer: footer.entries,
        warnings,
    })
}

/// Parse and structure an interchange in one go
pub fn structure_interchange(
    text: &str,
    options: &ParseOptions,
) -> Result<(Interchange, StructuredDocument)> {
    let interchange = parse_interchange(text, options)?;
    let document = structure_segments(&interchange.segments, options)?;
    Ok((interchange, document))
}

/// Compare the UNT segment count with the segments from UNH to UNT inclusive
fn check_segment_count(segments: &[Segment], trailer: usize) -> Option<StructureWarning> {
    let Some(Segment::MessageTrailer(unt)) = segments.get(trailer) else {
        return None;
    };
    let declared = unt.segment_count.clone()?;
    let start = segments
        .iter()
        .position(|segment| segment.tag() == tags::MESSAGE_HEADER)?;
    if start > trailer {
        return None;
    }

    let actual = trailer - start + 1;
    if declared.parse::<usize>().ok() == Some(actual) {
        return None;
    }

    let warning = StructureWarning::SegmentCountMismatch { declared, actual };
    warn!("{}", warning);
    Some(warning)
}
