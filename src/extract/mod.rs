//! Consumers of the structured document
//!
//! Flattens the path-keyed regions into the views downstream tooling
//! works with: market roles, message classification and one record per
//! measured quantity. Lookups go through [`SegmentPath`](crate::structure::SegmentPath)
//! keys only; nothing here re-derives the nesting.

pub mod datetime;
pub mod records;

pub use datetime::parse_edifact_datetime;
pub use records::{
    MessageClassification, QuantityRecord, classify_message, market_roles, quantity_records,
};
