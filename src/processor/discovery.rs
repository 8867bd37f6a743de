//! Interchange file discovery
//!
//! Walks an input directory and selects the files whose name matches the
//! configured glob pattern. A single file given as input is used as is.

use crate::error::{MsconsError, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// File discovery component for interchange inputs
#[derive(Debug)]
pub struct FileDiscovery {
    input_path: PathBuf,
    pattern: Pattern,
    skipped: usize,
}

impl FileDiscovery {
    pub fn new(input_path: PathBuf, file_pattern: &str) -> Result<Self> {
        Ok(Self {
            input_path,
            pattern: Pattern::new(file_pattern)?,
            skipped: 0,
        })
    }

    /// Files seen during the last walk that did not match the pattern
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Discover interchange files below the input path, sorted by path
    pub fn discover_files(&mut self) -> Result<Vec<PathBuf>> {
        if !self.input_path.exists() {
            return Err(MsconsError::InputNotFound {
                path: self.input_path.clone(),
            });
        }

        if self.input_path.is_file() {
            return Ok(vec![self.input_path.clone()]);
        }

        debug!("Searching for interchange files in: {}", self.input_path.display());

        let mut files = Vec::new();
        self.skipped = 0;

        for entry in WalkDir::new(&self.input_path).follow_links(false) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            if self.matches(entry.path()) {
                files.push(entry.into_path());
            } else {
                self.skipped += 1;
            }
        }

        files.sort();
        debug!("Found {} interchange files, skipped {}", files.len(), self.skipped);

        Ok(files)
    }

    /// Match the file name against the pattern; our own JSON output never matches
    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.pattern.matches(name) && !is_output_file(name)
    }
}

fn is_output_file(name: &str) -> bool {
    name.ends_with(".json")
}
