//! End-to-end counts over the bundled sample corpus and hand-written records.

use wordcount::{search, search_bytes, search_parallel, SearchMode};

const KING: &str = "0,1,2,3,The king doth wake tonight and takes his rouse,\n\
                    0,1,2,3,Thee thee thee,\n";

#[test]
fn test_sample_corpus_counts() {
    let corpus = demo_data::sample_corpus();
    assert_eq!(search(corpus, "thee"), 6);
    assert_eq!(search(corpus, "thou"), 3);
    assert_eq!(search(corpus, "romeo"), 3);
    assert_eq!(search(corpus, "king"), 2);
}

#[test]
fn test_sample_corpus_skips_speaker_and_play_fields() {
    let corpus = demo_data::sample_corpus();
    // "Hamlet" appears as the play on six records but only once in spoken text.
    assert_eq!(search(corpus, "hamlet"), 1);
    assert_eq!(search(corpus, "juliet"), 0);
    assert_eq!(search(corpus, "macbeth"), 0);
}

#[test]
fn test_sample_corpus_parallel_agrees() {
    let corpus = demo_data::sample_corpus();
    for term in ["thee", "thou", "the", "and", "me", "zzz"] {
        assert_eq!(search_parallel(corpus, term), search(corpus, term), "term {term}");
    }
}

#[test]
fn test_no_substring_matches() {
    // "takes", "tonight" and "the" share letters with "thee" but never match.
    assert_eq!(search(KING, "thee"), 3);
    assert_eq!(search(KING, "the"), 1);
}

#[test]
fn test_crlf_records() {
    let corpus = "0,1,2,3,thee\r\n0,1,2,3,Thee\r\n";
    assert_eq!(search(corpus, "thee"), 2);
}

#[test]
fn test_missing_fourth_comma_does_not_fail() {
    assert_eq!(search("only,two,commas\n", "two"), 0);
    assert_eq!(search("only two commas\n", "two"), 1);
}

#[test]
fn test_synthetic_corpus_modes_agree() {
    let corpus = demo_data::synthetic_corpus(5_000, 99).unwrap();
    let expected = search(&corpus, "thee");
    assert!(expected > 0);
    for mode in SearchMode::ALL {
        assert_eq!(search_bytes(corpus.as_bytes(), "thee", mode), Ok(expected));
    }
}
