//! Configuration management and validation.
//!
//! [`ParseOptions`] controls how a single interchange is parsed and
//! structured. [`MsconsConfig`] wraps it with the settings of a batch run.

use crate::constants::DEFAULT_FILE_PATTERN;
use crate::error::{MsconsError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What to do with a segment that arrives without an open parent scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttachmentPolicy {
    /// Drop the segment and record a warning
    #[default]
    Lenient,
    /// Abort the interchange with a format error
    Strict,
}

/// Options for parsing and structuring one interchange
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Handling of orphaned STS/DTM/PIA and group segments
    pub attachment: AttachmentPolicy,

    /// Fall back to the default service characters when UNA is absent
    pub allow_missing_service_advice: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            attachment: AttachmentPolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_missing_service_advice(mut self) -> Self {
        self.allow_missing_service_advice = true;
        self
    }
}

/// Main configuration for batch processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsconsConfig {
    /// Number of interchanges processed concurrently
    pub workers: usize,

    /// Glob pattern selecting interchange files inside an input directory
    pub file_pattern: String,

    /// Also write extracted quantity records per interchange
    pub write_records: bool,

    /// Pretty-print JSON output
    pub pretty_json: bool,

    /// Parsing options applied to every interchange
    pub parse: ParseOptions,
}

impl Default for MsconsConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            write_records: false,
            pretty_json: true,
            parse: ParseOptions::default(),
        }
    }
}

impl MsconsConfig {
    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Create configuration with a custom file pattern
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.file_pattern = pattern.into();
        self
    }

    /// Enable quantity record output
    pub fn with_records(mut self) -> Self {
        self.write_records = true;
        self
    }

    /// Write compact instead of pretty JSON
    pub fn with_compact_json(mut self) -> Self {
        self.pretty_json = false;
        self
    }

    /// Replace the parse options
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(MsconsError::Configuration {
                message: "workers must be at least 1".to_string(),
            });
        }

        glob::Pattern::new(&self.file_pattern)?;

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
