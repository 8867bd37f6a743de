//! Splitting of interchanges into segments, elements and components.
//!
//! Every split honours the release character: a separator immediately
//! preceded by the release character is data, and comes out of the split
//! as the bare separator. A doubled release character is an escaped release
//! and never escapes the character after it. Escapes belonging to deeper
//! levels are left untouched so the next split can resolve them; doubled
//! releases collapse to one only at the innermost (component) level.

use super::separators::Separators;
use crate::constants::{ESCAPE_PLACEHOLDER, RELEASE_PLACEHOLDER};

/// What a split does with a doubled release character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReleasePairs {
    /// Leave `??` in place for the next split level
    Keep,
    /// Restore `??` as a single release character
    Collapse,
}

/// Split `text` on every `separator` not immediately preceded by `release`.
///
/// `release release` is a literal release character and `release separator`
/// a literal separator; both are swapped for placeholders before the split
/// and restored afterwards. Input that already contains a placeholder is
/// handed to a character scanner with the same semantics, so a collision
/// costs speed but never correctness.
pub fn split_with_release(text: &str, separator: char, release: char) -> Vec<String> {
    split_release_aware(text, separator, release, ReleasePairs::Collapse)
}

/// Outer-level split: doubled releases stay doubled for the next level
fn split_keeping_release_pairs(text: &str, separator: char, release: char) -> Vec<String> {
    split_release_aware(text, separator, release, ReleasePairs::Keep)
}

fn split_release_aware(
    text: &str,
    separator: char,
    release: char,
    pairs: ReleasePairs,
) -> Vec<String> {
    if text.contains(ESCAPE_PLACEHOLDER) || text.contains(RELEASE_PLACEHOLDER) {
        return scan_with_release(text, separator, release, pairs);
    }

    let doubled: String = [release, release].iter().collect();
    let escaped: String = [release, separator].iter().collect();
    let restored_release = match pairs {
        ReleasePairs::Keep => doubled.clone(),
        ReleasePairs::Collapse => release.to_string(),
    };
    let restored = separator.to_string();

    text.replace(&doubled, &RELEASE_PLACEHOLDER.to_string())
        .replace(&escaped, &ESCAPE_PLACEHOLDER.to_string())
        .split(separator)
        .map(|part| {
            part.replace(ESCAPE_PLACEHOLDER, &restored)
                .replace(RELEASE_PLACEHOLDER, &restored_release)
        })
        .collect()
}

/// Character-by-character variant of [`split_release_aware`]
fn scan_with_release(text: &str, separator: char, release: char, pairs: ReleasePairs) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == release && chars.peek() == Some(&release) {
            chars.next();
            current.push(release);
            if pairs == ReleasePairs::Keep {
                current.push(release);
            }
        } else if c == release && chars.peek() == Some(&separator) {
            current.push(separator);
            chars.next();
        } else if c == separator {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

/// Split an interchange body (everything after the UNA segment) into raw segments.
///
/// Line breaks between segments are dropped and blank segments skipped;
/// the order of the remaining segments is preserved.
pub fn split_segments(body: &str, separators: &Separators) -> Vec<String> {
    split_keeping_release_pairs(body, separators.segment_terminator, separators.release)
        .into_iter()
        .map(|segment| segment.trim_start_matches(['\r', '\n']).to_string())
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// A raw segment split into its tag and data elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentFields {
    tag: String,
    elements: Vec<String>,
    component_separator: char,
    release: char,
}

impl SegmentFields {
    /// Split a raw segment on the element separator
    pub fn split(raw: &str, separators: &Separators) -> Self {
        let mut parts =
            split_keeping_release_pairs(raw, separators.element, separators.release).into_iter();
        let tag = parts.next().unwrap_or_default();

        Self {
            tag,
            elements: parts.collect(),
            component_separator: separators.component,
            release: separators.release,
        }
    }

    /// Segment tag (first element)
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Number of data elements after the tag
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Components of the data element at `element` (0-based, tag excluded)
    pub fn components(&self, element: usize) -> Vec<String> {
        self.elements
            .get(element)
            .map(|value| split_with_release(value, self.component_separator, self.release))
            .unwrap_or_default()
    }

    /// Component at a fixed position; omitted or empty positions yield `None`
    pub fn component(&self, element: usize, component: usize) -> Option<String> {
        self.components(element)
            .into_iter()
            .nth(component)
            .filter(|value| !value.is_empty())
    }

    /// First component of a simple data element
    pub fn value(&self, element: usize) -> Option<String> {
        self.component(element, 0)
    }
}
