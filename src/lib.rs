//! corpusdex — a batch, write-once inverted-index search engine.
//!
//! Three stages, each a standalone binary sharing this library:
//! `parser` tokenizes a tagged corpus into a word stream, `indexer`
//! consumes that stream into an on-disk inverted index, `searcher`
//! evaluates conjunctive keyword queries against it. See each
//! module for the invariant it owns.

pub mod config;
pub mod dictionary;
pub mod doc_ids;
pub mod error;
pub mod index_reader;
pub mod index_writer;
pub mod indexer;
pub mod key;
pub mod logging;
pub mod markup;
pub mod posting_list;
pub mod query;
pub mod stemmer;
pub mod types;
pub mod vbyte;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
