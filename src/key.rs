//! Fixed-width dictionary keys.
//!
//! Both the in-memory dictionary and the on-disk `dict_and_offset.bin`
//! records use the same representation: a `MAX_KEY_SIZE`-byte,
//! zero-padded array. Padding with `\0` makes byte-lexicographic array
//! comparison equivalent to NUL-terminated string comparison, which is
//! what the binary-search reader relies on.

use crate::config::{MAX_KEY_SIZE, MAX_TERM_BYTES};

pub type Key = [u8; MAX_KEY_SIZE];

/// Build a dictionary key from an already-normalized term.
///
/// Terms longer than `MAX_TERM_BYTES` are silently truncated to
/// `MAX_TERM_BYTES` — the last key byte is always reserved as the
/// zero terminator/padding byte, never term content, so a 60-byte
/// term is truncated at 59, not 60. The truncated form is what gets
/// indexed, and the searcher truncates the same way before lookup, so
/// the two sides stay consistent.
pub fn make_key(term: &str) -> Key {
    let mut key = [0u8; MAX_KEY_SIZE];
    let bytes = term.as_bytes();
    let len = bytes.len().min(MAX_TERM_BYTES);
    key[..len].copy_from_slice(&bytes[..len]);
    key
}

/// Recover the term text from a key, stripping zero padding.
pub fn key_to_string(key: &Key) -> String {
    let end = key.iter().position(|&b| b == 0).unwrap_or(key.len());
    String::from_utf8_lossy(&key[..end]).into_owned()
}
