//! Whole-word matching of a lowercase term against raw corpus words.
//!
//! A word matches when, after skipping leading non-letters, its first
//! `term.chars().count()` characters fold to the term and the next character
//! (if any) is not an ASCII letter. `"thee,"` and `"(Thee"` match `thee`;
//! `"theer"` does not.

const WORD_DELIMITER: char = ' ';

/// Strip everything before the first ASCII letter.
///
/// A word without letters is consumed entirely.
pub fn skip_punctuation(word: &str) -> &str {
    match word.find(|c: char| c.is_ascii_alphabetic()) {
        Some(start) => &word[start..],
        None => "",
    }
}

/// Lowercase `c` when it folds to exactly one character.
fn fold(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => Some(folded),
        _ => None,
    }
}

/// Check if `word` is a whole-word, case-insensitive occurrence of `term`.
///
/// `term` must already be lowercase. An empty term matches nothing.
pub fn matches(word: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let mut target = skip_punctuation(word).chars();
    for expected in term.chars() {
        match target.next() {
            Some(c) if fold(c) == Some(expected) => {}
            _ => return false,
        }
    }
    target.next().map_or(true, |c| !c.is_ascii_alphabetic())
}

/// Count matching words in one record's text field.
///
/// Words are separated by single spaces; runs of spaces produce empty words.
pub fn count_in_line(line: &str, term: &str) -> usize {
    line.split(WORD_DELIMITER)
        .filter(|word| matches(word, term))
        .count()
}
