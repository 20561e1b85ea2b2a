//! Record extraction for play-script corpora.
//!
//! A corpus is a run of comma-delimited records separated by one or more
//! newlines. The first four fields carry metadata (ids, play, speaker, ...);
//! everything after the 4th comma is the spoken text and is the only part
//! that takes part in matching. No quoting or escaping is honored.

/// Number of leading metadata fields dropped from every record.
pub const METADATA_FIELDS: usize = 4;

const FIELD_DELIMITER: char = ',';

/// Byte index of the `n`th occurrence (1-based) of `needle` in `haystack`.
///
/// Returns `None` when there are fewer than `n` occurrences or `n == 0`.
pub fn nth_index_of(haystack: &str, needle: char, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    let mut index: Option<usize> = None;
    for _ in 0..n {
        let from = index.map_or(0, |i| i + needle.len_utf8());
        index = Some(from + haystack[from..].find(needle)?);
    }
    index
}

/// The text field of a single record.
///
/// A record with fewer than [`METADATA_FIELDS`] commas has no recognizable
/// metadata prefix, so the whole line is used.
pub fn text_field(line: &str) -> &str {
    match nth_index_of(line, FIELD_DELIMITER, METADATA_FIELDS) {
        Some(comma) => &line[comma + FIELD_DELIMITER.len_utf8()..],
        None => line,
    }
}

/// Iterate over the text fields of every record in `corpus`.
///
/// Runs of newlines act as a single separator. Leading and trailing
/// separators still produce one empty record each, which tokenizes to a
/// single empty word and never matches.
pub fn records(corpus: &str) -> impl Iterator<Item = &str> + '_ {
    let mut lines = corpus.split('\n').peekable();
    let mut first = true;
    std::iter::from_fn(move || loop {
        let line = lines.next()?;
        let is_first = std::mem::replace(&mut first, false);
        // An empty piece between two newlines is part of a run; only the
        // leading and trailing pieces survive as (empty) records.
        if line.is_empty() && !is_first && lines.peek().is_some() {
            continue;
        }
        return Some(text_field(line));
    })
}
