//! src/reader.rs
//
// Whole-file document delivery. The default record readers of batch engines
// hand out one line at a time; n-grams span lines, so the corpus reader here
// delivers each file in its entirety, exactly once, and declares itself
// non-subdivisible so an owning engine never splits a document across workers.

use crate::error::DocumentError;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// One atomic unit of input: the complete raw content of a single file.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    contents: Vec<u8>,
}

impl Document {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Text view of the raw bytes. Input is expected to be text; anything
    /// that is not valid UTF-8 is converted lossily.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.contents)
    }
}

/// Reads the documents of a corpus directory, one whole file per document.
#[derive(Debug, Clone)]
pub struct WholeFileSource {
    input_dir: PathBuf,
}

impl WholeFileSource {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        WholeFileSource {
            input_dir: input_dir.into(),
        }
    }

    /// Whether an owning execution engine may split a document from this
    /// source across workers. Always false: fragments of a file would
    /// produce n-grams that never existed and lose those that span the cut.
    pub fn splittable(&self) -> bool {
        false
    }

    /// Enumerates the corpus files in sorted order, one path per document.
    /// Subdirectories are skipped.
    pub fn list(&self) -> Result<Vec<PathBuf>, DocumentError> {
        let entries = fs::read_dir(&self.input_dir).map_err(|source| DocumentError::List {
            path: self.input_dir.clone(),
            source,
        })?;
        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| DocumentError::List {
                path: self.input_dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }

    /// Opens one document for delivery. An unreadable file fails the unit of
    /// work for that document; the caller decides whether to retry.
    pub fn open(&self, path: &Path) -> Result<DocumentReader, DocumentError> {
        let contents = fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(DocumentReader {
            document: Document {
                path: path.to_path_buf(),
                contents,
            },
            delivered: false,
        })
    }
}

/// Delivers an opened document exactly once per task attempt: the first
/// `read` yields the full content, every later call yields nothing.
#[derive(Debug)]
pub struct DocumentReader {
    document: Document,
    delivered: bool,
}

impl DocumentReader {
    pub fn read(&mut self) -> Option<&Document> {
        if self.delivered {
            return None;
        }
        self.delivered = true;
        Some(&self.document)
    }
}
