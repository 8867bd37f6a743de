//! Header / detail / summary partitioning.

use crate::constants::tags;
use crate::edifact::Segment;
use crate::error::{MsconsError, Result};

/// The three contiguous regions of one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions<'a> {
    /// Segments up to and including the section control (UNS)
    pub header: &'a [Segment],
    /// Segments strictly between UNS and the message trailer (UNT)
    pub detail: &'a [Segment],
    /// Message trailer and everything after it
    pub summary: &'a [Segment],
    /// Position of the first detail segment in the full sequence
    pub detail_offset: usize,
    /// Position of the message trailer in the full sequence
    pub summary_offset: usize,
}

/// Split a segment sequence on its UNS and UNT anchors
pub fn split_regions(segments: &[Segment]) -> Result<Regions<'_>> {
    let section_control = find_anchor(segments, tags::SECTION_CONTROL)?;
    let trailer = find_anchor(segments, tags::MESSAGE_TRAILER)?;

    if trailer < section_control {
        return Err(MsconsError::AnchorsOutOfOrder {
            section_control,
            trailer,
        });
    }

    Ok(Regions {
        header: &segments[..=section_control],
        detail: &segments[section_control + 1..trailer],
        summary: &segments[trailer..],
        detail_offset: section_control + 1,
        summary_offset: trailer,
    })
}

fn find_anchor(segments: &[Segment], tag: &'static str) -> Result<usize> {
    segments
        .iter()
        .position(|segment| segment.tag() == tag)
        .ok_or(MsconsError::MissingAnchor { tag })
}
