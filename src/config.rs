use std::path::PathBuf;

/// Maximum length in bytes of a term before the trailing zero-pad marker.
pub const MAX_TERM_BYTES: usize = 59;

/// Fixed width of a dictionary-record key: `MAX_TERM_BYTES` plus the
/// zero terminator/padding, matching the source's `MAX_KEY_SIZE`.
pub const MAX_KEY_SIZE: usize = 60;

/// Width in bytes of the big-endian posting-offset field in a dictionary record.
pub const OFFSET_SIZE: usize = 4;

/// Total width of one `dict_and_offset.bin` record.
pub const DICT_RECORD_SIZE: usize = MAX_KEY_SIZE + OFFSET_SIZE;

/// Fixed width of a document identifier before the record separator.
pub const DOC_ID_SIZE: usize = 14;

/// Total width of one `doc_id_list.txt` record (identifier + newline).
pub const DOC_ID_RECORD_SIZE: usize = DOC_ID_SIZE + 1;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    pub fn doc_id_path(&self) -> PathBuf {
        self.data_dir.join("doc_id_list.txt")
    }

    pub fn dict_path(&self) -> PathBuf {
        self.data_dir.join("dict_and_offset.bin")
    }

    pub fn postings_path(&self) -> PathBuf {
        self.data_dir.join("posting_list.bin")
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("./data"),
        }
    }
}
