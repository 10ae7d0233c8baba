/*!
 * End-to-end session flow tests over the full translate/summarize pipeline.
 */

use enkores::session::orchestrator::ActionOutcome;
use enkores::session::{LangDirection, HISTORY_DISPLAY_LIMIT};

use crate::common;

#[tokio::test]
async fn test_fullPipeline_enToKo_shouldFlowThroughAllStages() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);

    orchestrator.set_input(
        "Machine translation has improved a great deal.It still struggles with context.\
         Summaries help readers skim long documents.",
    );

    assert_eq!(orchestrator.translate().await, ActionOutcome::Completed);
    let translated = orchestrator.session().translated_text.clone();
    assert!(!translated.is_empty());
    // Derived invariant: the summary always comes from the translation.
    assert!(orchestrator.session().summarized_text.is_empty());

    assert_eq!(orchestrator.summarize().await, ActionOutcome::Completed);
    let summary = orchestrator.session().summarized_text.clone();
    assert!(!summary.is_empty());
    // Translation is untouched by summarization.
    assert_eq!(orchestrator.session().translated_text, translated);

    assert_eq!(orchestrator.translate_summary().await, ActionOutcome::Completed);
    assert_ne!(orchestrator.session().summarized_text, summary);

    assert_eq!(orchestrator.session().translation_history.len(), 1);
    assert_eq!(orchestrator.session().summarized_history.len(), 1);
}

#[tokio::test]
async fn test_fullPipeline_directionSwitch_shouldKeepWorkVisibleInHistory() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);

    orchestrator.set_input("First round of text.");
    orchestrator.translate().await;
    orchestrator.summarize().await;

    orchestrator.set_direction(LangDirection::KoToEn);
    assert!(orchestrator.session().translated_text.is_empty());

    orchestrator.set_input("두 번째 입력입니다.");
    orchestrator.translate().await;
    orchestrator.summarize().await;

    // Both rounds stay in history across the switch.
    assert_eq!(orchestrator.session().translation_history.len(), 2);
    assert_eq!(orchestrator.session().summarized_history.len(), 2);
}

#[tokio::test]
async fn test_fullPipeline_repeatedRounds_shouldBoundHistoryViewOnly() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);

    for i in 0..7 {
        orchestrator.set_input(format!("Round {} of input text.", i));
        orchestrator.translate().await;
    }

    let session = orchestrator.session();
    assert_eq!(session.translation_history.len(), 7);
    assert_eq!(session.translation_history_view().len(), HISTORY_DISPLAY_LIMIT);
}

#[tokio::test]
async fn test_fullPipeline_reinvokingActionsOnEmptyState_shouldStaySafe() {
    let mut orchestrator = common::working_orchestrator(LangDirection::EnToKo);

    // Every action is safe to invoke with nothing to do, repeatedly.
    for _ in 0..3 {
        assert_eq!(orchestrator.translate().await, ActionOutcome::Skipped);
        assert_eq!(orchestrator.summarize().await, ActionOutcome::Skipped);
        assert_eq!(orchestrator.translate_summary().await, ActionOutcome::Skipped);
    }

    assert!(orchestrator.session().translation_history.is_empty());
    assert!(orchestrator.session().summarized_history.is_empty());
}

#[tokio::test]
async fn test_fullPipeline_translatorFailure_shouldNotCorruptSession() {
    let mut orchestrator = common::failing_translator_orchestrator(LangDirection::EnToKo);

    orchestrator.set_input("This will not translate.");
    assert_eq!(orchestrator.translate().await, ActionOutcome::Failed);

    // Session stays consistent and usable: summarize is a no-op, state empty.
    assert_eq!(orchestrator.summarize().await, ActionOutcome::Skipped);
    assert!(orchestrator.session().translated_text.is_empty());
    assert!(orchestrator.session().summarized_text.is_empty());
    assert!(orchestrator.session().translation_history.is_empty());

    // The failed input is still there for the user to retry or edit.
    assert_eq!(orchestrator.session().input_text, "This will not translate.");
}
