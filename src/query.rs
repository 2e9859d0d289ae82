//! Query engine (§4.8): lookup, decode, intersect, rank.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::config::Config;
use crate::doc_ids::DocIdReader;
use crate::error::{Error, ErrorKind, Result};
use crate::index_reader::IndexReader;
use crate::posting_list::intersect_postings;
use crate::stemmer::normalize;
use crate::types::Posting;
use crate::vbyte;

/// One ranked hit: a resolved document identifier and its
/// accumulated frequency score across all query terms.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub doc_id: String,
    pub score: f64,
}

/// Reads an arbitrary `[begin, end)` byte range out of
/// `posting_list.bin` and decodes it back into postings, undoing the
/// delta encoding by carrying a running `prev_id` (§4.7, §4.8).
fn read_postings(file: &mut File, begin: u64, end: u64) -> Result<Vec<Posting>> {
    file.seek(SeekFrom::Start(begin))?;
    let mut buf = vec![0u8; (end - begin) as usize];
    file.read_exact(&mut buf)?;

    let mut postings = Vec::new();
    let mut pos = 0;
    let mut prev_id: u32 = 0;

    let truncated = || Error::new(ErrorKind::Parse, "truncated variable-byte stream in posting_list.bin");

    while pos < buf.len() {
        let (delta, consumed) = vbyte::decode(&buf[pos..]).ok_or_else(truncated)?;
        pos += consumed;
        let (freq, consumed) = vbyte::decode(&buf[pos..]).ok_or_else(truncated)?;
        pos += consumed;

        let doc_index = prev_id + delta as u32;
        postings.push(Posting::new(doc_index, freq as u32));
        prev_id = doc_index;
    }

    Ok(postings)
}

pub struct Searcher {
    index: IndexReader,
    postings_file: File,
    doc_ids: DocIdReader,
}

impl Searcher {
    pub fn open(config: &Config) -> Result<Self> {
        Self::open_paths(config.dict_path(), config.postings_path(), config.doc_id_path())
    }

    pub fn open_paths(
        dict_path: impl AsRef<Path>,
        postings_path: impl AsRef<Path>,
        doc_id_path: impl AsRef<Path>,
    ) -> Result<Self> {
        Ok(Searcher {
            index: IndexReader::open(&dict_path, &postings_path)?,
            postings_file: File::open(&postings_path)?,
            doc_ids: DocIdReader::open(&doc_id_path)?,
        })
    }

    /// Evaluate a conjunctive keyword query. Every term is normalized
    /// with the same procedure the indexer used (§4.2); a miss on any
    /// term short-circuits to an empty result (§4.8, scenario 6).
    pub fn search(&mut self, query_terms: &[String]) -> Result<Vec<SearchResult>> {
        if query_terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut per_term_postings: Vec<Vec<Posting>> = Vec::with_capacity(query_terms.len());

        for term in query_terms {
            let stemmed = normalize(term);
            match self.index.lookup(&stemmed)? {
                Some((begin, end)) => {
                    per_term_postings.push(read_postings(&mut self.postings_file, begin, end)?);
                }
                None => return Ok(Vec::new()),
            }
        }

        let mut result = per_term_postings.remove(0);
        for postings in &per_term_postings {
            result = intersect_postings(&result, postings);
            if result.is_empty() {
                return Ok(Vec::new());
            }
        }

        let mut hits = Vec::with_capacity(result.len());
        for posting in &result {
            let doc_id = self.doc_ids.read(posting.doc_index)?;
            hits.push(SearchResult {
                doc_id,
                score: posting.freq as f64,
            });
        }

        // Stable sort: descending score, ties keep first-encountered
        // (i.e. intersection) order.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap());
        Ok(hits)
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:.6}", self.doc_id, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use crate::doc_ids::DocIdTable;
    use crate::index_writer::write_index;
    use tempfile::tempdir;

    fn build(dir: &Path, docs: &[(&str, &[(&str, u32, u32)])]) -> Searcher {
        // docs: (doc_id, &[(term, doc_index, freq)]) — caller supplies
        // postings directly already sorted per term.
        let mut dictionary = Dictionary::new();
        let mut doc_ids = DocIdTable::new();
        for (doc_id, _) in docs {
            doc_ids.push(*doc_id);
        }
        for (_, postings) in docs {
            for &(term, doc_index, freq) in *postings {
                let (list, _) = dictionary.insert_or_get(term);
                list.push_back(Posting::new(doc_index, freq));
            }
        }

        let dict_path = dir.join("dict_and_offset.bin");
        let postings_path = dir.join("posting_list.bin");
        let doc_id_path = dir.join("doc_id_list.txt");
        write_index(&dictionary, &doc_ids, &doc_id_path, &dict_path, &postings_path).unwrap();
        Searcher::open_paths(&dict_path, &postings_path, &doc_id_path).unwrap()
    }

    #[test]
    fn test_scenario_1_single_doc_single_term() {
        let dir = tempdir().unwrap();
        let mut searcher = build(
            dir.path(),
            &[("DOC-0001", &[("the", 0, 1), ("cat", 0, 1), ("sat", 0, 1)])],
        );

        let results = searcher.search(&["cats".to_string()]).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].doc_id, "DOC-0001");
        assert_eq!(format!("{}", results[0]), "DOC-0001 1.000000");
    }

    #[test]
    fn test_scenario_4_intersection_and_ranking() {
        let dir = tempdir().unwrap();
        let mut searcher = build(
            dir.path(),
            &[
                ("D0", &[("cat", 0, 2), ("dog", 0, 1)]),
                ("D1", &[("dog", 1, 3)]),
                ("D2", &[("cat", 2, 1), ("dog", 2, 5)]),
            ],
        );

        let results = searcher
            .search(&["cat".to_string(), "dog".to_string()])
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].doc_id, "D2");
        assert_eq!(results[0].score, 6.0);
        assert_eq!(results[1].doc_id, "D0");
        assert_eq!(results[1].score, 3.0);
    }

    #[test]
    fn test_scenario_6_missing_term_short_circuits() {
        let dir = tempdir().unwrap();
        let mut searcher = build(dir.path(), &[("D0", &[("cat", 0, 5)])]);

        let results = searcher
            .search(&["cat".to_string(), "zzzzznotaterm".to_string()])
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_query_returns_empty() {
        let dir = tempdir().unwrap();
        let mut searcher = build(dir.path(), &[("D0", &[("cat", 0, 1)])]);
        assert!(searcher.search(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_query_normalizes_like_the_indexer() {
        let dir = tempdir().unwrap();
        // Indexed stem is "cat" (as the indexer would store after
        // normalizing "cats"); searching the surface form "cats" must
        // hit via the same normalization.
        let mut searcher = build(dir.path(), &[("D0", &[("cat", 0, 1)])]);
        let results = searcher.search(&["cats".to_string()]).unwrap();
        assert_eq!(results.len(), 1);
    }
}
