//! EDIFACT segment parser for MSCONS interchanges
//!
//! Turns raw interchange text into an ordered list of typed segment records.
//!
//! ## Architecture
//!
//! - [`separators`] - UNA service string advice resolution
//! - [`tokenizer`] - release-aware splitting into segments, elements, components
//! - [`segments`] - typed segment records and the tag-to-parser table
//!
//! ## Usage
//!
//! ```rust
//! use mscons_processor::config::ParseOptions;
//! use mscons_processor::edifact::parse_interchange;
//!
//! # fn example(text: &str) -> mscons_processor::error::Result<()> {
//! let interchange = parse_interchange(text, &ParseOptions::default())?;
//! println!("{} segments", interchange.segments.len());
//! # Ok(())
//! # }
//! ```

pub mod segments;
pub mod separators;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use segments::{Segment, parse_segment};
pub use separators::Separators;
pub use tokenizer::{SegmentFields, split_segments, split_with_release};

use crate::config::ParseOptions;
use crate::constants::{SERVICE_STRING_ADVICE_LEN, SERVICE_STRING_ADVICE_TAG};
use crate::error::Result;
use tracing::{debug, warn};

/// A parsed interchange: its delimiter set and segments in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interchange {
    pub separators: Separators,
    pub segments: Vec<Segment>,
}

impl Interchange {
    /// Number of segments without a field layout
    pub fn unrecognized_count(&self) -> usize {
        self.segments.iter().filter(|s| !s.is_recognized()).count()
    }
}

/// Parse a complete interchange starting with its UNA segment
pub fn parse_interchange(text: &str, options: &ParseOptions) -> Result<Interchange> {
    let text = text.trim_start_matches('\u{feff}');

    let (separators, body) =
        if !text.starts_with(SERVICE_STRING_ADVICE_TAG) && options.allow_missing_service_advice {
            warn!("No UNA segment found, assuming default separators");
            (Separators::default(), text)
        } else {
            let separators = Separators::resolve(text)?;
            let body = text
                .char_indices()
                .nth(SERVICE_STRING_ADVICE_LEN)
                .map_or("", |(offset, _)| &text[offset..]);
            (separators, body)
        };

    let segments = split_segments(body, &separators)
        .iter()
        .map(|raw| parse_segment(raw, &separators))
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} segments", segments.len());

    Ok(Interchange {
        separators,
        segments,
    })
}
