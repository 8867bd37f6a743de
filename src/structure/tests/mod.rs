//! Tests for message structuring
//!
//! Segment sequences are mostly assembled by hand with the builders from
//! the parser fixtures; the end-to-end checks run the sample interchange.

use super::SegmentPath;
use super::engine::SegmentMap;

mod body_tests;
mod document_tests;
mod splitter_tests;

/// Paths of a region as dotted strings, in structural order
pub fn path_strings(entries: &SegmentMap) -> Vec<String> {
    entries.keys().map(SegmentPath::to_string).collect()
}
