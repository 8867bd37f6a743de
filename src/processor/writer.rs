//! JSON output for structured interchanges
//!
//! Every input file gets `<file name>.json` holding its structured document
//! and, when enabled, `<file name>.records.json` with the extracted quantity
//! records. The input extension is kept in the name, so `a.txt` and `a.edi`
//! never share an output. The directory layout below the input root is
//! mirrored in the output.

use crate::constants::RECORDS_FILE_SUFFIX;
use crate::error::Result;
use crate::extract::QuantityRecord;
use crate::structure::StructuredDocument;
use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writer for per-interchange JSON files
#[derive(Debug, Clone)]
pub struct DocumentWriter {
    input_root: PathBuf,
    output_dir: PathBuf,
    pretty: bool,
}

impl DocumentWriter {
    pub fn new(input_root: PathBuf, output_dir: PathBuf, pretty: bool) -> Self {
        Self {
            input_root,
            output_dir,
            pretty,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Output path for an input file: its full file name plus `.extension`
    pub fn output_path(&self, input: &Path, extension: &str) -> PathBuf {
        let relative = input
            .strip_prefix(&self.input_root)
            .ok()
            .filter(|relative| !relative.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| input.file_name().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("interchange"));

        let mut path = self.output_dir.join(relative);
        let mut file_name = path.file_name().map(OsString::from).unwrap_or_default();
        file_name.push(".");
        file_name.push(extension);
        path.set_file_name(file_name);
        path
    }

    pub fn write_document(&self, input: &Path, document: &StructuredDocument) -> Result<PathBuf> {
        let path = self.output_path(input, "json");
        self.write_json(&path, document)?;
        Ok(path)
    }

    pub fn write_records(&self, input: &Path, records: &[QuantityRecord]) -> Result<PathBuf> {
        let path = self.output_path(input, &format!("{}.json", RECORDS_FILE_SUFFIX));
        self.write_json(&path, records)?;
        Ok(path)
    }

    fn write_json<T: Serialize + ?Sized>(&self, path: &Path, value: &T) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(path)?);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writer.flush()?;

        debug!("Wrote {}", path.display());
        Ok(())
    }
}
