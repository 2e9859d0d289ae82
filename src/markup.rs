//! Markup parser (§4.9) — boundary stage, not part of the core contract.
//!
//! Recognizes a WSJ-style tagged corpus: documents delimited by
//! `<DOC>...</DOC>`, with the identifier in a `<DOCNO>...</DOCNO>`
//! element. Everything else between tags is scanned for maximal runs
//! of ASCII alphanumeric characters, each run becoming one word. This
//! stage does not stem — the indexer and searcher own normalization
//! exclusively (§4.2, §4.4, §4.8), so the word stream it emits is
//! only lowercased trivially at the tag-stripping boundary, never
//! suffix-stripped.

use std::io::Write;

/// One recognized document: an identifier and its ordered body words.
#[derive(Debug, PartialEq)]
pub struct ParsedDocument {
    pub doc_id: String,
    pub words: Vec<String>,
}

/// Parse a tagged corpus into a sequence of documents.
///
/// A `<DOC>` with no `<DOCNO>` does not abort parsing: a generated
/// placeholder (`UNKNOWN-<n>`) takes the identifier's place so the
/// word stream stays well-formed for the indexer (§4.9).
pub fn parse_corpus(text: &str) -> Vec<ParsedDocument> {
    let mut documents = Vec::new();
    let mut unknown_count = 0usize;

    for doc_body in extract_tagged(text, "DOC") {
        let doc_id = extract_tagged(&doc_body, "DOCNO")
            .into_iter()
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                unknown_count += 1;
                format!("UNKNOWN-{unknown_count}")
            });

        let body = strip_tag(&doc_body, "DOCNO");
        let words = words_outside_tags(&body);

        documents.push(ParsedDocument { doc_id, words });
    }

    documents
}

/// Write the word-stream format of §4.4: doc-id line, content-word
/// lines, one blank line between documents.
pub fn write_word_stream(documents: &[ParsedDocument], out: &mut impl Write) -> std::io::Result<()> {
    for (i, doc) in documents.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", doc.doc_id)?;
        for word in &doc.words {
            writeln!(out, "{}", word)?;
        }
    }
    Ok(())
}

/// Extract the text content of every `<tag>...</tag>` span, in order.
fn extract_tagged(text: &str, tag: &str) -> Vec<String> {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let mut spans = Vec::new();
    let mut rest = text;

    while let Some(start) = find_case_insensitive(rest, &open) {
        let after_open = &rest[start + open.len()..];
        match find_case_insensitive(after_open, &close) {
            Some(end) => {
                spans.push(after_open[..end].to_string());
                rest = &after_open[end + close.len()..];
            }
            None => break,
        }
    }

    spans
}

/// Remove the first `<tag>...</tag>` span (if any) from `text`,
/// leaving the rest of the body intact for word extraction.
fn strip_tag(text: &str, tag: &str) -> String {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");

    if let Some(start) = find_case_insensitive(text, &open) {
        let after_open_idx = start + open.len();
        if let Some(end) = find_case_insensitive(&text[after_open_idx..], &close) {
            let close_end = after_open_idx + end + close.len();
            let mut out = String::with_capacity(text.len());
            out.push_str(&text[..start]);
            out.push_str(&text[close_end..]);
            return out;
        }
    }

    text.to_string()
}

fn find_case_insensitive(haystack: &str, needle: &str) -> Option<usize> {
    let haystack_lower = haystack.to_ascii_lowercase();
    let needle_lower = needle.to_ascii_lowercase();
    haystack_lower.find(&needle_lower)
}

/// Strip all `<...>` tag runs, then split the remaining text into
/// maximal runs of ASCII alphanumeric characters, lowercased.
fn words_outside_tags(text: &str) -> Vec<String> {
    let mut untagged = String::with_capacity(text.len());
    let mut depth = 0i32;

    for ch in text.chars() {
        match ch {
            '<' => depth += 1,
            '>' => depth = (depth - 1).max(0),
            _ if depth == 0 => untagged.push(ch),
            _ => {}
        }
    }

    let mut words = Vec::new();
    let mut current = String::new();

    for ch in untagged.chars() {
        if ch.is_ascii_alphanumeric() {
            current.push(ch.to_ascii_lowercase());
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}
