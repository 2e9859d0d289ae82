//! Dictionary-file reader: binary search by term (§4.7).
//!
//! The dictionary file is never loaded wholesale. Its record count
//! falls out of `file_size / DICT_RECORD_SIZE`, and each probe reads
//! exactly one fixed-width record, so lookup cost is `O(log n)` reads
//! rather than `O(n)` memory.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::config::{DICT_RECORD_SIZE, MAX_KEY_SIZE, OFFSET_SIZE};
use crate::error::Result;
use crate::key::make_key;

pub struct IndexReader {
    file: File,
    record_count: u64,
    postings_len: u64,
}

impl IndexReader {
    pub fn open(dict_path: impl AsRef<Path>, postings_path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(dict_path)?;
        let record_count = file.metadata()?.len() / DICT_RECORD_SIZE as u64;
        let postings_len = std::fs::metadata(postings_path)?.len();

        Ok(IndexReader {
            file,
            record_count,
            postings_len,
        })
    }

    fn read_record(&mut self, index: u64) -> Result<([u8; MAX_KEY_SIZE], u32)> {
        self.file
            .seek(SeekFrom::Start(index * DICT_RECORD_SIZE as u64))?;

        let mut record = [0u8; DICT_RECORD_SIZE];
        self.file.read_exact(&mut record)?;

        let mut key = [0u8; MAX_KEY_SIZE];
        key.copy_from_slice(&record[..MAX_KEY_SIZE]);

        let mut offset_bytes = [0u8; OFFSET_SIZE];
        offset_bytes.copy_from_slice(&record[MAX_KEY_SIZE..]);
        let offset = u32::from_be_bytes(offset_bytes);

        Ok((key, offset))
    }

    /// Binary search for `stemmed_term`, returning the `[begin, end)`
    /// byte range of its posting list in `posting_list.bin`, or
    /// `None` if the term is absent from the dictionary.
    pub fn lookup(&mut self, stemmed_term: &str) -> Result<Option<(u64, u64)>> {
        let target = make_key(stemmed_term);

        if self.record_count == 0 {
            return Ok(None);
        }

        let (mut lo, mut hi) = (0u64, self.record_count);

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let (key, offset) = self.read_record(mid)?;

            match key.cmp(&target) {
                std::cmp::Ordering::Equal => {
                    let end = if mid + 1 < self.record_count {
                        self.read_record(mid + 1)?.1 as u64
                    } else {
                        self.postings_len
                    };
                    return Ok(Some((offset as u64, end)));
                }
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::doc_ids::DocIdTable;
    use crate::index_writer::write_index;
    use crate::types::Posting;
    use tempfile::tempdir;

    fn build_index(dir: &Path, terms: &[&str]) -> (std::path::PathBuf, std::path::PathBuf) {
        let mut dictionary = Dictionary::new();
        for term in terms {
            let (list, _) = dictionary.insert_or_get(term);
            list.push_back(Posting::new(0, 1));
        }
        let mut doc_ids = DocIdTable::new();
        doc_ids.push("D1");

        let dict_path = dir.join("dict_and_offset.bin");
        let postings_path = dir.join("posting_list.bin");
        write_index(
            &dictionary,
            &doc_ids,
            dir.join("doc_id_list.txt"),
            &dict_path,
            &postings_path,
        )
        .unwrap();
        (dict_path, postings_path)
    }

    #[test]
    fn test_lookup_hits_every_inserted_term() {
        let dir = tempdir().unwrap();
        let terms = ["ant", "cat", "dog", "fox", "owl"];
        let (dict_path, postings_path) = build_index(dir.path(), &terms);

        let mut reader = IndexReader::open(&dict_path, &postings_path).unwrap();
        for term in terms {
            assert!(reader.lookup(term).unwrap().is_some(), "missing {term}");
        }
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        let dir = tempdir().unwrap();
        let (dict_path, postings_path) = build_index(dir.path(), &["cat"]);

        let mut reader = IndexReader::open(&dict_path, &postings_path).unwrap();
        assert!(reader.lookup("zzzzznotaterm").unwrap().is_none());
    }

    #[test]
    fn test_last_record_end_is_postings_file_length() {
        let dir = tempdir().unwrap();
        let (dict_path, postings_path) = build_index(dir.path(), &["ant", "cat", "dog"]);

        let mut reader = IndexReader::open(&dict_path, &postings_path).unwrap();
        let (_, end) = reader.lookup("dog").unwrap().unwrap();
        let postings_len = std::fs::metadata(&postings_path).unwrap().len();
        assert_eq!(end, postings_len);
    }

    #[test]
    fn test_empty_dictionary_never_matches() {
        let dir = tempdir().unwrap();
        let (dict_path, postings_path) = build_index(dir.path(), &[]);

        let mut reader = IndexReader::open(&dict_path, &postings_path).unwrap();
        assert!(reader.lookup("anything").unwrap().is_none());
    }
}
