/*!
 * Property-style tests for the sentence spacer and the chunker.
 */

use enkores::processing::{chunk_text, space_sentences, DEFAULT_CHUNK_CHARS};

const SAMPLES: [&str; 8] = [
    "",
    "Hello world.Nice day.",
    "One!Two?Three.",
    "Already. Spaced. Out.",
    "안녕하세요.반갑습니다!좋은 하루 되세요?",
    "No terminal marks at all",
    "Trailing mark.",
    "Multi\nline.Text!here",
];

#[test]
fn test_spacer_shouldBeIdempotentOnAllSamples() {
    for s in SAMPLES {
        let once = space_sentences(s);
        let twice = space_sentences(&once);
        assert_eq!(once, twice, "spacer not idempotent for {:?}", s);
    }
}

#[test]
fn test_spacer_outputNeverGluesTerminalToText() {
    for s in SAMPLES {
        let spaced = space_sentences(s);
        let chars: Vec<char> = spaced.chars().collect();
        for w in chars.windows(2) {
            if matches!(w[0], '.' | '!' | '?') {
                assert!(
                    w[1].is_whitespace(),
                    "terminal glued to {:?} in {:?}",
                    w[1],
                    spaced
                );
            }
        }
    }
}

#[test]
fn test_chunker_concatenationReproducesInputForAllSamples() {
    for s in SAMPLES {
        for max in [1, 3, 5, DEFAULT_CHUNK_CHARS] {
            let chunks = chunk_text(s, max);
            assert_eq!(chunks.concat(), s);
            assert!(chunks.iter().all(|c| c.chars().count() <= max));
            assert!(chunks.iter().all(|c| !c.is_empty()));
        }
    }
}

#[test]
fn test_chunker_emptyInputYieldsEmptySequence() {
    assert_eq!(chunk_text("", 1), Vec::<String>::new());
    assert_eq!(chunk_text("", DEFAULT_CHUNK_CHARS), Vec::<String>::new());
}

#[test]
fn test_chunker_boundariesArePositionalNotWordAware() {
    // A boundary may fall inside a word; that is accepted behavior.
    let chunks = chunk_text("hello world", 7);
    assert_eq!(chunks, vec!["hello w", "orld"]);
}
