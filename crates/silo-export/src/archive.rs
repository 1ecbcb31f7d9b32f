use std::collections::BTreeSet;
use std::io::{Cursor, Write};

use chrono::Utc;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{ExportError, Result};

/// Finished archive ready for delivery to the download mechanism.
#[derive(Clone, Debug)]
pub struct ExportBundle {
    /// `<prefix>-<ISO-date>.zip`
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// In-memory folder/file tree accumulated during an export run.
///
/// Folders are tracked separately from files so a resource that materializes
/// nothing still leaves its (empty) folder in the archive. Serialization is
/// deferred to [`VaultArchive::finish`]; only that step can fail.
#[derive(Debug, Default)]
pub struct VaultArchive {
    folders: BTreeSet<String>,
    files: Vec<(String, Vec<u8>)>,
}

impl VaultArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_folder(&mut self, folder: &str) {
        self.folders.insert(folder.to_owned());
    }

    pub fn add_file(&mut self, path: String, bytes: Vec<u8>) {
        self.files.push((path, bytes));
    }

    /// Files added so far, not counting folder entries.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Serialize the tree into a ZIP named `<prefix>-<ISO-date>.zip`.
    ///
    /// Directory entries are written first (sorted), then files in insertion
    /// order, so output is deterministic for a given input snapshot.
    pub fn finish(self, name_prefix: &str) -> Result<ExportBundle> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for folder in &self.folders {
            writer
                .add_directory(format!("{folder}/"), options)
                .map_err(|source| ExportError::Finalize { source })?;
        }

        for (path, bytes) in &self.files {
            writer
                .start_file(path.as_str(), options)
                .map_err(|source| ExportError::Finalize { source })?;
            writer.write_all(bytes)?;
        }

        let cursor = writer
            .finish()
            .map_err(|source| ExportError::Finalize { source })?;

        let file_name = format!("{name_prefix}-{}.zip", Utc::now().format("%Y-%m-%d"));
        Ok(ExportBundle {
            file_name,
            bytes: cursor.into_inner(),
        })
    }
}
