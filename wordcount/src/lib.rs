//! Wordcount - whole-word term counting over play-script corpora
//!
//! Counts case-insensitive, whole-word occurrences of a term in a corpus of
//! comma-delimited records, sequentially or across a rayon pool, and times
//! the runs for comparison.
//!
//! # Architecture
//! - `corpus`: record splitting and text-field extraction
//! - `matcher`: punctuation skip and whole-word matching
//! - `search`: sequential/parallel entry points and error types
//! - `bench`: wall-clock timing harness
//! - `report`: timed comparison written to a caller-supplied sink

pub mod bench;
pub mod corpus;
pub mod matcher;
pub mod report;
pub mod search;

pub use bench::Benchmark;
pub use report::{compare, ReportFormat, Run};
pub use search::{
    decode, search, search_bytes, search_parallel, search_with, SearchError, SearchMode,
    SearchResult, SearchTerm,
};
