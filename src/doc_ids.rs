//! Document-id table.
//!
//! An ordered sequence of opaque document identifiers, positionally
//! indexed by `doc-index`. In memory this is a plain growable vector
//! built by tail-append during indexing; on disk it is the fixed-width
//! `doc_id_list.txt` random-access format of §6.

use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::config::{DOC_ID_RECORD_SIZE, DOC_ID_SIZE};
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct DocIdTable {
    ids: Vec<String>,
}

impl DocIdTable {
    pub fn new() -> Self {
        DocIdTable { ids: Vec::new() }
    }

    /// Tail-append the next document identifier, returning its doc-index.
    pub fn push(&mut self, doc_id: impl Into<String>) -> u32 {
        self.ids.push(doc_id.into());
        (self.ids.len() - 1) as u32
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, doc_index: u32) -> Option<&str> {
        self.ids.get(doc_index as usize).map(String::as_str)
    }

    /// Write one fixed-width record per document: the identifier
    /// truncated/zero-padded to `DOC_ID_SIZE` bytes, followed by a
    /// newline. A trailing newline is written after every record,
    /// including the last, for symmetry (§9); the reader never
    /// depends on it, since it seeks by `doc_index * record width`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        for id in &self.ids {
            let mut record = [0u8; DOC_ID_SIZE];
            let bytes = id.as_bytes();
            let len = bytes.len().min(DOC_ID_SIZE);
            record[..len].copy_from_slice(&bytes[..len]);
            writer.write_all(&record)?;
            writer.write_all(b"\n")?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Random-access reader over `doc_id_list.txt`: seeks to
/// `doc_index * record_width` and reads the fixed-width identifier
/// field, stripping trailing zero padding.
pub struct DocIdReader {
    file: File,
}

const RECORD_WIDTH: u64 = DOC_ID_RECORD_SIZE as u64;

impl DocIdReader {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(DocIdReader { file })
    }

    pub fn read(&mut self, doc_index: u32) -> Result<String> {
        self.file
            .seek(SeekFrom::Start(doc_index as u64 * RECORD_WIDTH))?;

        let mut buf = [0u8; DOC_ID_SIZE];
        self.file
            .read_exact(&mut buf)
            .map_err(|_| Error::not_found(format!("doc_index {doc_index} out of range")))?;

        let end = buf.iter().position(|&b| b == 0).unwrap_or(DOC_ID_SIZE);
        Ok(String::from_utf8_lossy(&buf[..end]).into_owned())
    }
}
