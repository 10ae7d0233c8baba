/*!
 * Session orchestration tests against mock backends.
 */

use enkores::providers::mock::MockTranslator;
use enkores::session::orchestrator::ActionOutcome;
use enkores::session::{LangDirection, Orchestrator};
use enkores::summarization::extractive::ExtractiveSummarizer;

use crate::common;

#[tokio::test]
async fn test_translate_shouldStoreSpacedTranslationAndAppendHistory() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("Hello world.Nice day.");

    let outcome = orchestrator.translate().await;

    assert_eq!(outcome, ActionOutcome::Completed);
    let session = orchestrator.session();
    // The mock tags the target language; the spacer separates the glued sentences.
    assert_eq!(session.translated_text, "[ko] Hello world. Nice day.");
    assert!(session.summarized_text.is_empty());
    assert_eq!(session.translation_history.len(), 1);
    assert_eq!(session.translation_history[0], session.translated_text);
}

#[tokio::test]
async fn test_translate_emptyInput_shouldBeNoOp() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("   \n  ");

    let outcome = orchestrator.translate().await;

    assert_eq!(outcome, ActionOutcome::Skipped);
    assert!(orchestrator.session().translated_text.is_empty());
    assert!(orchestrator.session().translation_history.is_empty());
}

#[tokio::test]
async fn test_translate_shouldClearStaleSummary() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("First input.");
    orchestrator.translate().await;
    orchestrator.summarize().await;
    assert!(!orchestrator.session().summarized_text.is_empty());

    orchestrator.set_input("Second input.");
    orchestrator.translate().await;

    assert!(orchestrator.session().summarized_text.is_empty());
}

#[tokio::test]
async fn test_translate_longInput_shouldChunkAndJoinWithSingleSpace() {
    let mock = MockTranslator::working();
    let counter = mock.request_counter();
    let mut orchestrator = Orchestrator::new(
        Box::new(mock),
        Box::new(ExtractiveSummarizer::new()),
        LangDirection::EnToKo,
        4,
        3,
    );
    orchestrator.set_input("abcdefgh");

    let outcome = orchestrator.translate().await;

    assert_eq!(outcome, ActionOutcome::Completed);
    // Two chunks of four characters, each translated independently.
    assert_eq!(counter.load(std::sync::atomic::Ordering::SeqCst), 2);
    assert_eq!(orchestrator.session().translated_text, "[ko] abcd [ko] efgh");
}

#[tokio::test]
async fn test_translate_failure_shouldFailSoftToEmptyString() {
    let mut orchestrator = common::failing_translator_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("Hello world.");

    let outcome = orchestrator.translate().await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert!(orchestrator.session().translated_text.is_empty());
    assert!(orchestrator.session().translation_history.is_empty());
}

#[tokio::test]
async fn test_translate_timeout_shouldFailSoftToEmptyString() {
    let mut orchestrator = Orchestrator::new(
        Box::new(MockTranslator::timing_out()),
        Box::new(ExtractiveSummarizer::new()),
        LangDirection::EnToKo,
        common::TEST_CHUNK_CHARS,
        common::TEST_SUMMARY_SENTENCES,
    );
    orchestrator.set_input("Hello world.");

    let outcome = orchestrator.translate().await;

    // A timed-out backend degrades exactly like any other failure.
    assert_eq!(outcome, ActionOutcome::Failed);
    assert!(orchestrator.session().translated_text.is_empty());
    assert!(orchestrator.session().translation_history.is_empty());
}

#[test]
fn test_translate_slowBackend_shouldStillComplete() {
    tokio_test::block_on(async {
        let mut orchestrator = Orchestrator::new(
            Box::new(MockTranslator::slow(10)),
            Box::new(ExtractiveSummarizer::new()),
            LangDirection::EnToKo,
            common::TEST_CHUNK_CHARS,
            common::TEST_SUMMARY_SENTENCES,
        );
        orchestrator.set_input("Hello world.");

        assert_eq!(orchestrator.translate().await, ActionOutcome::Completed);
        assert_eq!(orchestrator.session().translated_text, "[ko] Hello world.");
    });
}

#[tokio::test]
async fn test_translate_failure_shouldDiscardPriorTranslation() {
    // First translate succeeds, second fails: the stale first result must
    // not survive the failed attempt.
    let mut orchestrator = Orchestrator::new(
        Box::new(MockTranslator::fail_after(1)),
        Box::new(ExtractiveSummarizer::new()),
        LangDirection::EnToKo,
        common::TEST_CHUNK_CHARS,
        common::TEST_SUMMARY_SENTENCES,
    );
    orchestrator.set_input("Hello.");
    assert_eq!(orchestrator.translate().await, ActionOutcome::Completed);
    assert!(!orchestrator.session().translated_text.is_empty());

    orchestrator.set_input("Second input.");
    assert_eq!(orchestrator.translate().await, ActionOutcome::Failed);
    assert!(orchestrator.session().translated_text.is_empty());
    // Only the successful translation made it into history.
    assert_eq!(orchestrator.session().translation_history.len(), 1);
}

#[tokio::test]
async fn test_summarize_withoutTranslation_shouldBeNoOp() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("Some input text.");

    let outcome = orchestrator.summarize().await;

    assert_eq!(outcome, ActionOutcome::Skipped);
    assert!(orchestrator.session().summarized_text.is_empty());
    assert!(orchestrator.session().summarized_history.is_empty());
}

#[tokio::test]
async fn test_summarize_shouldStoreSummaryAndAppendHistory() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("Hello world.Nice day.");
    orchestrator.translate().await;

    let outcome = orchestrator.summarize().await;

    assert_eq!(outcome, ActionOutcome::Completed);
    let session = orchestrator.session();
    assert!(!session.summarized_text.is_empty());
    assert_eq!(session.summarized_history.len(), 1);
    assert_eq!(session.summarized_history[0], session.summarized_text);
}

#[tokio::test]
async fn test_summarize_failure_shouldFailSoftToEmptyString() {
    let mut orchestrator = common::failing_summarizer_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("Hello world.");
    orchestrator.translate().await;

    let outcome = orchestrator.summarize().await;

    assert_eq!(outcome, ActionOutcome::Failed);
    assert!(orchestrator.session().summarized_text.is_empty());
    assert!(orchestrator.session().summarized_history.is_empty());
}

#[tokio::test]
async fn test_translateSummary_shouldOverwriteSummaryDestructively() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("Hello world.Nice day.");
    orchestrator.translate().await;
    orchestrator.summarize().await;

    let before = orchestrator.session().summarized_text.clone();
    let outcome = orchestrator.translate_summary().await;

    assert_eq!(outcome, ActionOutcome::Completed);
    let after = &orchestrator.session().summarized_text;
    // Back-translation through the mock is visibly non-identity.
    assert_ne!(*after, before);
    assert!(after.starts_with("[en]"));
}

#[tokio::test]
async fn test_translateSummary_withoutSummary_shouldBeNoOp() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("Hello world.");
    orchestrator.translate().await;

    let outcome = orchestrator.translate_summary().await;

    assert_eq!(outcome, ActionOutcome::Skipped);
    assert!(orchestrator.session().summarized_text.is_empty());
}

#[tokio::test]
async fn test_translateSummary_shouldUseReversedLanguagePair() {
    let mut orchestrator = common::working_orchestrator(LangDirection::KoToEn);
    orchestrator.set_input("안녕하세요.좋은 날이에요.");
    orchestrator.translate().await;
    orchestrator.summarize().await;

    orchestrator.translate_summary().await;

    // KoToEn reversed is EnToKo, so the back-translation targets Korean.
    assert!(orchestrator.session().summarized_text.starts_with("[ko]"));
}

#[tokio::test]
async fn test_setDirection_shouldClearTextsAndKeepHistories() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);
    orchestrator.set_input("Hello world.Nice day.");
    orchestrator.translate().await;
    orchestrator.summarize().await;

    let translations = orchestrator.session().translation_history.len();
    let summaries = orchestrator.session().summarized_history.len();

    orchestrator.set_direction(LangDirection::KoToEn);

    let session = orchestrator.session();
    assert!(session.input_text.is_empty());
    assert!(session.translated_text.is_empty());
    assert!(session.summarized_text.is_empty());
    assert_eq!(session.translation_history.len(), translations);
    assert_eq!(session.summarized_history.len(), summaries);
}

#[tokio::test]
async fn test_emptyProviderOutput_shouldNotPolluteHistory() {
    let mut orchestrator = Orchestrator::new(
        Box::new(MockTranslator::empty()),
        Box::new(ExtractiveSummarizer::new()),
        LangDirection::EnToKo,
        common::TEST_CHUNK_CHARS,
        common::TEST_SUMMARY_SENTENCES,
    );
    orchestrator.set_input("Hello world.");

    let outcome = orchestrator.translate().await;

    assert_eq!(outcome, ActionOutcome::Completed);
    assert!(orchestrator.session().translated_text.is_empty());
    assert!(orchestrator.session().translation_history.is_empty());

    // And the follow-up summarize is a clean no-op.
    assert_eq!(orchestrator.summarize().await, ActionOutcome::Skipped);
}
