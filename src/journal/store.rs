//! Entry store: whole-collection load and atomic save of the journal file.
//!
//! The journal is a single JSON array of [`JournalEntry`] records. [`EntryStore`]
//! holds only the path; callers own the loaded `Vec` and hand it back to
//! [`EntryStore::save`] after appending.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{JournalError, Result};
use crate::journal::types::JournalEntry;

#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored entry in insertion order.
    ///
    /// A missing journal file is the first-run state and yields an empty list.
    /// A file that exists but does not parse fails with
    /// [`JournalError::CorruptStore`].
    pub fn load(&self) -> Result<Vec<JournalEntry>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no journal file yet");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(JournalError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let entries: Vec<JournalEntry> =
            serde_json::from_slice(&bytes).map_err(|source| JournalError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(path = %self.path.display(), count = entries.len(), "journal loaded");
        Ok(entries)
    }

    /// Replace the journal file with `entries`.
    ///
    /// Writes to a temp file in the same directory, fsyncs it, then renames it
    /// over the journal. A failure at any step leaves the previous file intact.
    /// Entries with a NaN or infinite embedding component are refused with
    /// [`JournalError::NonFiniteEmbedding`], since JSON cannot represent them.
    pub fn save(&self, entries: &[JournalEntry]) -> Result<()> {
        if entries
            .iter()
            .any(|e| e.embedding.iter().any(|x| !x.is_finite()))
        {
            return Err(JournalError::NonFiniteEmbedding);
        }

        let mut json = serde_json::to_vec_pretty(entries)?;
        json.push(b'\n');

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|source| JournalError::Io {
            path: dir.clone(),
            source,
        })?;

        let io_err = |source: std::io::Error| JournalError::Io {
            path: self.path.clone(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(io_err)?;
        tmp.write_all(&json).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        tracing::info!(path = %self.path.display(), count = entries.len(), "journal saved");
        Ok(())
    }
}
