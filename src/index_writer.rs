//! On-disk index serialization (§4.5, §6).
//!
//! A single in-order traversal of the [`Dictionary`] drives both
//! output files: for each term, a fixed-width dictionary record is
//! written with the current running `posting_list.bin` byte offset,
//! then the term's posting list is delta- and variable-byte-encoded
//! and appended to the postings file, advancing the offset.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::OFFSET_SIZE;
use crate::dictionary::Dictionary;
use crate::doc_ids::DocIdTable;
use crate::error::Result;
use crate::posting_list::PostingList;
use crate::vbyte;

/// Delta-encode a posting list's `doc_index` sequence and
/// variable-byte encode the alternating `(delta, freq)` stream.
pub fn encode_posting_list(list: &PostingList) -> Vec<u8> {
    let mut out = Vec::new();
    let mut prev: u32 = 0;

    for (i, posting) in list.iter().enumerate() {
        let delta = if i == 0 {
            posting.doc_index
        } else {
            posting.doc_index - prev
        };
        vbyte::encode_into(&mut out, delta as u64);
        vbyte::encode_into(&mut out, posting.freq as u64);
        prev = posting.doc_index;
    }

    out
}

/// Write `doc_id_list.txt`, `dict_and_offset.bin`, and
/// `posting_list.bin` under `data_dir`, overwriting any existing
/// files (the index is produced atomically per run, never patched).
pub fn write_index(
    dictionary: &Dictionary,
    doc_ids: &DocIdTable,
    doc_id_path: impl AsRef<Path>,
    dict_path: impl AsRef<Path>,
    postings_path: impl AsRef<Path>,
) -> Result<()> {
    doc_ids.write_to(doc_id_path)?;

    let dict_file = File::create(dict_path)?;
    let mut dict_writer = BufWriter::new(dict_file);

    let postings_file = File::create(postings_path)?;
    let mut postings_writer = BufWriter::new(postings_file);

    let mut byte_offset: u32 = 0;

    for (key, list) in dictionary.iter_sorted() {
        dict_writer.write_all(key)?;
        dict_writer.write_all(&byte_offset.to_be_bytes())?;

        let encoded = encode_posting_list(list);
        postings_writer.write_all(&encoded)?;
        byte_offset += encoded.len() as u32;
    }

    debug_assert_eq!(OFFSET_SIZE, 4);

    dict_writer.flush()?;
    postings_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Posting;
    use tempfile::tempdir;

    #[test]
    fn test_encode_posting_list_matches_scenario_3() {
        let cat: PostingList = [Posting::new(0, 2)].into_iter().collect();
        let dog: PostingList = [Posting::new(0, 1), Posting::new(1, 1)].into_iter().collect();

        let cat_bytes = encode_posting_list(&cat);
        let dog_bytes = encode_posting_list(&dog);

        let expected_cat_len = vbyte::encode(0).len() + vbyte::encode(2).len();
        let expected_dog_len = vbyte::encode(0).len()
            + vbyte::encode(1).len()
            + vbyte::encode(1).len()
            + vbyte::encode(1).len();

        assert_eq!(cat_bytes.len(), expected_cat_len);
        assert_eq!(dog_bytes.len(), expected_dog_len);
    }

    #[test]
    fn test_write_index_produces_sorted_dict_file() {
        let dir = tempdir().unwrap();
        let mut dictionary = Dictionary::new();

        for term in ["dog", "cat"] {
            let (list, _) = dictionary.insert_or_get(term);
            list.push_back(Posting::new(0, 1));
        }

        let mut doc_ids = DocIdTable::new();
        doc_ids.push("D1");

        write_index(
            &dictionary,
            &doc_ids,
            dir.path().join("doc_id_list.txt"),
            dir.path().join("dict_and_offset.bin"),
            dir.path().join("posting_list.bin"),
        )
        .unwrap();

        let dict_bytes = std::fs::read(dir.path().join("dict_and_offset.bin")).unwrap();
        assert_eq!(dict_bytes.len() % crate::config::DICT_RECORD_SIZE, 0);

        let first_term = &dict_bytes[..crate::config::MAX_KEY_SIZE];
        assert!(first_term.starts_with(b"cat"));
    }
}
