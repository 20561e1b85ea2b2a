//! Demo corpora in the play-script layout `id,play,act.scene.line,speaker,text`.
//!
//! `SAMPLE_LINES` is a small hand-picked corpus for demos and tests.
//! `synthetic_corpus` builds arbitrarily large corpora for benchmarks; the
//! same seed always yields the same bytes.

use once_cell::sync::Lazy;
use rand::prelude::*;
use rand::rngs::StdRng;

pub const SAMPLE_LINES: &[&str] = &[
    r#"1,Hamlet,1.1.1,BERNARDO,Who's there?"#,
    r#"2,Hamlet,1.1.2,FRANCISCO,"Nay, answer me: stand, and unfold yourself.""#,
    r#"3,Hamlet,1.1.3,BERNARDO,Long live the king!"#,
    r#"4,Hamlet,1.2.5,CLAUDIUS,"The king doth wake tonight and takes his rouse,""#,
    r#"5,Hamlet,1.2.70,GERTRUDE,"Good Hamlet, cast thy nighted colour off,""#,
    r#"6,Hamlet,3.1.131,HAMLET,"Get thee to a nunnery: why wouldst thou be a breeder of sinners?""#,
    r#"7,Romeo and Juliet,2.2.33,JULIET,"O Romeo, Romeo! wherefore art thou Romeo?""#,
    r#"8,Romeo and Juliet,2.2.35,JULIET,"Deny thy father and refuse thy name;""#,
    r#"9,Romeo and Juliet,2.2.36,JULIET,"Or, if thou wilt not, be but sworn my love,""#,
    r#"10,Sonnets,18.1,POET,"Shall I compare thee to a summer's day?""#,
    r#"11,Sonnets,18.14,POET,"So long lives this, and this gives life to thee.""#,
    r#"12,Macbeth,2.1.33,MACBETH,"Is this a dagger which I see before me, Come, let me clutch thee.""#,
    r#"13,Macbeth,2.1.35,MACBETH,"I have thee not, and yet I see thee still.""#,
    r#"14,Twelfth Night,1.5.250,VIOLA,"Theeless and thereafter, prithee, hear me.""#,
];

/// `SAMPLE_LINES` joined into one newline-terminated corpus.
pub static SAMPLE_CORPUS: Lazy<String> = Lazy::new(|| {
    let mut corpus = SAMPLE_LINES.join("\n");
    corpus.push('\n');
    corpus
});

pub fn sample_corpus() -> &'static str {
    SAMPLE_CORPUS.as_str()
}

const PLAYS: &[&str] = &[
    "Hamlet",
    "Macbeth",
    "King Lear",
    "Othello",
    "Romeo and Juliet",
    "The Tempest",
    "Twelfth Night",
];

const SPEAKERS: &[&str] = &[
    "HAMLET", "HORATIO", "MACBETH", "LADY MACBETH", "LEAR", "CORDELIA", "IAGO", "JULIET",
    "PROSPERO", "VIOLA",
];

const VOCABULARY: &[&str] = &[
    "thee", "Thee", "thee,", "thee.", "thee!", "thee?", "theer", "prithee", "thou", "thy",
    "thine", "the", "king", "doth", "wake", "tonight", "and", "takes", "his", "rouse,", "love",
    "O", "what", "a", "rogue", "and", "peasant", "slave", "am", "I!", "'tis", "noble", "mind",
    "to", "be,", "or", "not", "--", "sweet", "night.", "(aside)", "lord;", "good", "sir,",
];

const MIN_WORDS: usize = 3;
const MAX_WORDS: usize = 18;

/// Generate `records` play-script rows with a deterministic RNG.
///
/// Text fields containing commas are quoted by the CSV writer, exactly like a
/// real export would be.
pub fn synthetic_corpus(records: usize, seed: u64) -> Result<String, csv::Error> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(records * 64));

    for id in 1..=records {
        let play = PLAYS[rng.gen_range(0..PLAYS.len())];
        let act: u32 = rng.gen_range(1..=5);
        let scene: u32 = rng.gen_range(1..=7);
        let line: u32 = rng.gen_range(1..=400);
        let speaker = SPEAKERS[rng.gen_range(0..SPEAKERS.len())];
        let word_count = rng.gen_range(MIN_WORDS..=MAX_WORDS);
        let text = (0..word_count)
            .map(|_| VOCABULARY[rng.gen_range(0..VOCABULARY.len())])
            .collect::<Vec<_>>()
            .join(" ");

        writer.write_record([
            id.to_string(),
            play.to_string(),
            format!("{act}.{scene}.{line}"),
            speaker.to_string(),
            text,
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_corpus_one_line_per_record() {
        assert_eq!(sample_corpus().lines().count(), SAMPLE_LINES.len());
        assert!(sample_corpus().ends_with('\n'));
    }

    #[test]
    fn test_synthetic_corpus_is_deterministic() {
        let a = synthetic_corpus(200, 7).unwrap();
        let b = synthetic_corpus(200, 7).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, synthetic_corpus(200, 8).unwrap());
    }

    #[test]
    fn test_synthetic_corpus_record_count() {
        let corpus = synthetic_corpus(50, 1).unwrap();
        assert_eq!(corpus.lines().count(), 50);
        assert!(corpus.lines().all(|l| l.matches(',').count() >= 4));
    }

    #[test]
    fn test_synthetic_corpus_empty() {
        assert_eq!(synthetic_corpus(0, 1).unwrap(), "");
    }
}
