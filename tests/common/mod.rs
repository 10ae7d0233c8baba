/*!
 * Common test utilities shared across the test suite.
 */

use async_trait::async_trait;

use enkores::errors::SummarizationError;
use enkores::providers::mock::MockTranslator;
use enkores::session::{LangDirection, Orchestrator};
use enkores::summarization::extractive::ExtractiveSummarizer;
use enkores::summarization::{SummarizeOptions, Summarizer};

/// Default chunk size used by orchestrator tests
pub const TEST_CHUNK_CHARS: usize = 5000;

/// Default summary sentence count used by orchestrator tests
pub const TEST_SUMMARY_SENTENCES: usize = 3;

/// Orchestrator wired to a working mock translator and the extractive summarizer
pub fn working_orchestrator(direction: LangDirection) -> Orchestrator {
    Orchestrator::new(
        Box::new(MockTranslator::working()),
        Box::new(ExtractiveSummarizer::new()),
        direction,
        TEST_CHUNK_CHARS,
        TEST_SUMMARY_SENTENCES,
    )
}

/// Orchestrator whose translator always fails
pub fn failing_translator_orchestrator(direction: LangDirection) -> Orchestrator {
    Orchestrator::new(
        Box::new(MockTranslator::failing()),
        Box::new(ExtractiveSummarizer::new()),
        direction,
        TEST_CHUNK_CHARS,
        TEST_SUMMARY_SENTENCES,
    )
}

/// Summarizer test double that always fails
#[derive(Debug)]
pub struct FailingSummarizer;

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(
        &self,
        _text: &str,
        _options: &SummarizeOptions,
    ) -> Result<String, SummarizationError> {
        Err(SummarizationError::NoSentences(
            "mock summarizer configured to fail".to_string(),
        ))
    }

    fn display_name(&self) -> &'static str {
        "FailingMock"
    }
}

/// Orchestrator whose summarizer always fails
pub fn failing_summarizer_orchestrator(direction: LangDirection) -> Orchestrator {
    Orchestrator::new(
        Box::new(MockTranslator::working()),
        Box::new(FailingSummarizer),
        direction,
        TEST_CHUNK_CHARS,
        TEST_SUMMARY_SENTENCES,
    )
}
