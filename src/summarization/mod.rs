/*!
 * Summarization backends.
 *
 * Two interchangeable implementations sit behind the `Summarizer` trait:
 * - `extractive`: local statistical summarizer that selects existing
 *   sentences ranked by term relevance
 * - `abstractive`: generative summarization through a local model server
 *
 * Which one runs is a configuration choice made at construction time; the
 * orchestrator only sees the trait.
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::SummarizationError;

/// Language the summary operates in, selecting stop-word and
/// normalization behavior for the extractive path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLanguage {
    /// English
    En,
    /// Korean
    Ko,
}

impl SummaryLanguage {
    /// ISO 639-1 code for the language
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    /// Human-readable language name
    pub fn name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ko => "Korean",
        }
    }
}

/// Options controlling a summarization call
#[derive(Debug, Clone)]
pub struct SummarizeOptions {
    /// Language of the text being summarized
    pub language: SummaryLanguage,

    /// Target number of sentences in the summary
    pub sentence_count: usize,
}

impl Default for SummarizeOptions {
    fn default() -> Self {
        Self {
            language: SummaryLanguage::En,
            sentence_count: 3,
        }
    }
}

impl SummarizeOptions {
    /// Create options for the given language with the default sentence count
    pub fn for_language(language: SummaryLanguage) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    /// Set the target sentence count
    pub fn sentence_count(mut self, sentence_count: usize) -> Self {
        self.sentence_count = sentence_count;
        self
    }
}

/// Common trait for all summarization backends
///
/// Implementations report failures as `SummarizationError`; the fail-soft
/// degradation to an empty result is the orchestrator's job.
#[async_trait]
pub trait Summarizer: Send + Sync + Debug {
    /// Produce a shorter text from `text` according to `options`
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<String, SummarizationError>;

    /// Short display name for log messages
    fn display_name(&self) -> &'static str;
}

pub mod abstractive;
pub mod extractive;
