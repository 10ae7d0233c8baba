/*!
 * Extractive statistical summarization.
 *
 * Selects existing sentences from the input ranked by normalized term
 * frequency, and emits the top-ranked sentences in their original order.
 * Stop words are filtered per language before scoring; Korean tokens
 * additionally have common trailing particles stripped so that inflected
 * forms of the same word count together.
 */

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SummarizationError;
use crate::summarization::{SummarizeOptions, Summarizer, SummaryLanguage};

/// Matches one sentence: a run of non-terminal characters plus its
/// trailing terminal marks, if any.
static SENTENCE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Characters stripped from token edges before scoring
static TOKEN_TRIM_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^[\s"'“”‘’(\[{<,;:~-]+|[\s"'“”‘’)\]}>,;:~.!?-]+$"#).unwrap()
});

/// English stop words ignored during scoring
static EN_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "and", "or", "but", "if", "then", "so", "of", "to", "in", "on", "at",
        "by", "for", "with", "about", "as", "into", "from", "is", "are", "was", "were", "be",
        "been", "being", "am", "do", "does", "did", "have", "has", "had", "will", "would",
        "can", "could", "shall", "should", "may", "might", "must", "i", "you", "he", "she",
        "it", "we", "they", "this", "that", "these", "those", "my", "your", "his", "her",
        "its", "our", "their", "not", "no", "nor", "there", "here", "what", "which", "who",
        "whom", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
        "most", "other", "some", "such", "only", "own", "same", "than", "too", "very",
    ]
    .into_iter()
    .collect()
});

/// Korean stop words ignored during scoring
static KO_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "이", "그", "저", "것", "수", "들", "등", "및", "또", "또는", "그리고", "하지만",
        "그러나", "그래서", "그런데", "즉", "더", "덜", "매우", "아주", "좀", "잘", "같이",
        "함께", "대해", "위해", "통해", "대한", "모든", "어떤", "이런", "그런", "저런",
        "하다", "있다", "없다", "되다", "않다", "같다", "때문", "경우", "우리", "저희",
        "당신", "너", "나", "그것", "이것", "저것",
    ]
    .into_iter()
    .collect()
});

/// Trailing Korean particles stripped from tokens longer than the particle
const KO_PARTICLES: [&str; 14] = [
    "은", "는", "이", "가", "을", "를", "의", "에", "와", "과", "도", "로", "에서", "에게",
];

/// Split text into trimmed, non-empty sentences
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_REGEX
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Local extractive summarizer
#[derive(Debug, Default)]
pub struct ExtractiveSummarizer;

impl ExtractiveSummarizer {
    /// Create a new extractive summarizer
    pub fn new() -> Self {
        Self
    }

    /// Normalize one raw whitespace-separated token for scoring.
    /// Returns None for tokens that carry no scoring weight.
    fn normalize_token(raw: &str, language: SummaryLanguage) -> Option<String> {
        let trimmed = TOKEN_TRIM_REGEX.replace_all(raw, "");
        if trimmed.is_empty() {
            return None;
        }

        let token = match language {
            SummaryLanguage::En => trimmed.to_lowercase(),
            SummaryLanguage::Ko => {
                let mut t = trimmed.to_string();
                for particle in KO_PARTICLES {
                    if t.len() > particle.len() && t.ends_with(particle) {
                        t.truncate(t.len() - particle.len());
                        break;
                    }
                }
                t
            }
        };

        let stop_words = match language {
            SummaryLanguage::En => &*EN_STOP_WORDS,
            SummaryLanguage::Ko => &*KO_STOP_WORDS,
        };

        if stop_words.contains(token.as_str()) {
            None
        } else {
            Some(token)
        }
    }

    /// Tokenize a sentence into scoring tokens
    fn tokenize(sentence: &str, language: SummaryLanguage) -> Vec<String> {
        sentence
            .split_whitespace()
            .filter_map(|raw| Self::normalize_token(raw, language))
            .collect()
    }

    /// Rank sentences and return the indices of the top `count`, in
    /// original document order.
    fn select_top_sentences(
        sentences: &[String],
        language: SummaryLanguage,
        count: usize,
    ) -> Vec<usize> {
        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| Self::tokenize(s, language))
            .collect();

        let mut frequencies: HashMap<&str, f64> = HashMap::new();
        for tokens in &tokenized {
            for token in tokens {
                *frequencies.entry(token.as_str()).or_insert(0.0) += 1.0;
            }
        }

        // Sentence score is the mean frequency of its scoring tokens, which
        // avoids biasing toward long sentences.
        let mut scored: Vec<(usize, f64)> = tokenized
            .iter()
            .enumerate()
            .map(|(idx, tokens)| {
                let score = if tokens.is_empty() {
                    0.0
                } else {
                    let sum: f64 = tokens.iter().map(|t| frequencies[t.as_str()]).sum();
                    sum / tokens.len() as f64
                };
                (idx, score)
            })
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(count);

        let mut indices: Vec<usize> = scored.into_iter().map(|(idx, _)| idx).collect();
        indices.sort_unstable();
        indices
    }
}

#[async_trait]
impl Summarizer for ExtractiveSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<String, SummarizationError> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Err(SummarizationError::NoSentences(
                "input contained no sentences".to_string(),
            ));
        }

        if sentences.len() <= options.sentence_count {
            return Ok(sentences.join(" "));
        }

        let indices =
            Self::select_top_sentences(&sentences, options.language, options.sentence_count);

        let summary = indices
            .into_iter()
            .map(|idx| sentences[idx].as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(summary)
    }

    fn display_name(&self) -> &'static str {
        "Extractive"
    }
}
