//! MSCONS Processor Library
//!
//! A Rust library for parsing UN/EDIFACT MSCONS metered-energy interchanges
//! and rebuilding their segment-group hierarchy.
//!
//! This library provides tools for:
//! - Resolving the interchange's delimiters from its UNA service string advice
//! - Release-aware tokenizing into segments, elements and components
//! - Typed field records for every segment the MSCONS profile uses
//! - Structuring messages into path-keyed header, body and footer maps
//! - Extracting market roles, message classification and quantity records
//! - Batch processing of interchange directories into JSON documents
//!
//! ```rust
//! use mscons_processor::{ParseOptions, structure_interchange};
//!
//! # fn example(text: &str) -> mscons_processor::Result<()> {
//! let (_, document) = structure_interchange(text, &ParseOptions::default())?;
//! if let Some(segment) = document.get("SG5.1.SG6.1.SG9.1.SG10.1") {
//!     println!("first quantity: {:?}", segment);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod edifact;
pub mod error;
pub mod extract;
pub mod models;
pub mod processor;
pub mod structure;

// Re-export commonly used types
pub use config::{AttachmentPolicy, MsconsConfig, ParseOptions};
pub use edifact::{Interchange, Segment, Separators, parse_interchange};
pub use error::{MsconsError, Result};
pub use extract::{QuantityRecord, classify_message, market_roles, quantity_records};
pub use processor::DocumentProcessor;
pub use structure::{
    SegmentPath, StructureWarning, StructuredDocument, structure_interchange, structure_segments,
};
