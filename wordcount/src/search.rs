//! Corpus search entry points.
//!
//! `search` is the reference single-pass count. `search_parallel` collects the
//! records first and fans the per-record counts out over rayon; since matching
//! is per-record and stateless the two always agree.

use crate::corpus::records;
use crate::matcher::count_in_line;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace};

/// Error type for search operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("corpus is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
    #[error("search term is empty")]
    EmptyTerm,
    #[error("unknown search mode: {0}")]
    UnknownMode(String),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// Which implementation runs the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    #[default]
    Sequential,
    Parallel,
}

impl SearchMode {
    pub const ALL: [SearchMode; 2] = [SearchMode::Sequential, SearchMode::Parallel];

    pub fn label(self) -> &'static str {
        match self {
            SearchMode::Sequential => "Sequential",
            SearchMode::Parallel => "Parallel",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchMode {
    type Err = SearchError;

    fn from_str(s: &str) -> SearchResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(SearchMode::Sequential),
            "parallel" | "par" => Ok(SearchMode::Parallel),
            other => Err(SearchError::UnknownMode(other.to_string())),
        }
    }
}

/// A validated, lowercased search term.
///
/// The matchers take `&str` and stay total (an empty term counts nothing);
/// this type is for callers that want to reject bad input up front.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: &str) -> SearchResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SearchError::EmptyTerm);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Count whole-word, case-insensitive occurrences of `term` in `corpus`.
///
/// `term` must be lowercase. Never fails: malformed records degrade to
/// whole-line text and an empty corpus or term counts zero.
pub fn search(corpus: &str, term: &str) -> usize {
    let total: usize = records(corpus).map(|line| count_in_line(line, term)).sum();
    debug!(bytes = corpus.len(), term, total, "sequential search");
    total
}

/// Same count as [`search`], with per-record work spread over rayon.
pub fn search_parallel(corpus: &str, term: &str) -> usize {
    use rayon::prelude::*;

    let lines: Vec<&str> = records(corpus).collect();
    trace!(records = lines.len(), "collected records");
    let total: usize = lines
        .into_par_iter()
        .map(|line| count_in_line(line, term))
        .sum();
    debug!(bytes = corpus.len(), term, total, "parallel search");
    total
}

pub fn search_with(corpus: &str, term: &str, mode: SearchMode) -> usize {
    match mode {
        SearchMode::Sequential => search(corpus, term),
        SearchMode::Parallel => search_parallel(corpus, term),
    }
}

/// Borrow a byte buffer as corpus text.
pub fn decode(corpus: &[u8]) -> SearchResult<&str> {
    std::str::from_utf8(corpus).map_err(|e| SearchError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

/// Search a raw byte buffer, e.g. a file read without decoding.
pub fn search_bytes(corpus: &[u8], term: &str, mode: SearchMode) -> SearchResult<usize> {
    Ok(search_with(decode(corpus)?, term, mode))
}
