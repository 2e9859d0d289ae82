//! Indexer (§4.4): consumes the parser's word stream, builds the
//! in-memory dictionary and doc-id table.

use std::io::BufRead;

use crate::dictionary::Dictionary;
use crate::doc_ids::DocIdTable;
use crate::error::Result;
use crate::posting_list::bump_or_append;
use crate::stemmer::normalize;

/// Result of consuming one complete word stream.
pub struct BuiltIndex {
    pub dictionary: Dictionary,
    pub doc_ids: DocIdTable,
}

/// Consume a line-oriented word stream (first non-empty line of each
/// document is its identifier, subsequent non-blank lines are content
/// words, a blank line separates documents) and build the in-memory
/// dictionary and doc-id table.
///
/// Malformed input — a blank line not followed by anything, or a
/// stream that starts blank — is undefined-but-safe per §4.4: the
/// blank-line rule greedily treats the next non-empty line as the
/// next doc-id without validating it.
pub fn build_index(reader: impl BufRead) -> Result<BuiltIndex> {
    let mut dictionary = Dictionary::new();
    let mut doc_ids = DocIdTable::new();

    let mut expecting_doc_id = true;
    let mut current_doc_index: u32 = 0;

    for line in reader.lines() {
        let line = line?;

        if line.is_empty() {
            expecting_doc_id = true;
            continue;
        }

        if expecting_doc_id {
            current_doc_index = doc_ids.push(line);
            expecting_doc_id = false;
        } else {
            let stemmed = normalize(&line);
            let (list, _created) = dictionary.insert_or_get(&stemmed);
            bump_or_append(list, current_doc_index);
        }
    }

    Ok(BuiltIndex { dictionary, doc_ids })
}
