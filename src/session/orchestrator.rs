/*!
 * Session orchestration.
 *
 * The Orchestrator owns the Session plus one translation backend and one
 * summarization backend, and sequences them in response to the discrete
 * user actions. Backend failures never escape: they are logged for the
 * user and degrade to an empty result, leaving the session consistent.
 */

use log::{debug, error, warn};

use crate::processing::{chunk_text, space_sentences};
use crate::providers::TranslationProvider;
use crate::session::models::{LangDirection, Session};
use crate::summarization::{SummarizeOptions, Summarizer};

/// Outcome of one user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran and updated the session
    Completed,
    /// The action's precondition was empty input; nothing changed
    Skipped,
    /// A backend failed; the affected field was reset to empty
    Failed,
}

impl ActionOutcome {
    /// Whether the action updated the session with a result
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Orchestrator for one interactive session
pub struct Orchestrator {
    /// Session state owned by this orchestrator
    session: Session,
    /// Translation backend
    translator: Box<dyn TranslationProvider>,
    /// Summarization backend
    summarizer: Box<dyn Summarizer>,
    /// Maximum characters per translation request
    chunk_chars: usize,
    /// Target sentence count for summaries
    summary_sentences: usize,
}

impl Orchestrator {
    /// Create a new orchestrator with the given backends
    pub fn new(
        translator: Box<dyn TranslationProvider>,
        summarizer: Box<dyn Summarizer>,
        lang_direction: LangDirection,
        chunk_chars: usize,
        summary_sentences: usize,
    ) -> Self {
        Self {
            session: Session::new(lang_direction),
            translator,
            summarizer,
            chunk_chars,
            summary_sentences,
        }
    }

    /// Read access to the session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Replace the session input text
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.session.input_text = text.into();
    }

    /// Switch the translation direction (clears derived text, keeps history)
    pub fn set_direction(&mut self, direction: LangDirection) {
        self.session.set_direction(direction);
    }

    /// Probe the translation backend, warning on failure.
    ///
    /// Connectivity problems surface later as fail-soft empty results, so
    /// this is advisory only.
    pub async fn verify_connection(&self) {
        if let Err(e) = self.translator.test_connection().await {
            warn!(
                "{} backend is not reachable: {}",
                self.translator.display_name(),
                e
            );
        }
    }

    /// Translate action: input_text -> translated_text.
    ///
    /// Splits the input into bounded chunks, translates them in order,
    /// joins the outputs with a single space and normalizes sentence
    /// spacing. A fresh translation always invalidates the previous
    /// summary. No-op when the trimmed input is empty.
    pub async fn translate(&mut self) -> ActionOutcome {
        if self.session.input_text.trim().is_empty() {
            debug!("translate skipped: no input text");
            return ActionOutcome::Skipped;
        }

        let source_lang = self.session.lang_direction.source_lang();
        let target_lang = self.session.lang_direction.target_lang();

        let chunks = chunk_text(&self.session.input_text, self.chunk_chars);
        let mut outputs = Vec::with_capacity(chunks.len());

        for chunk in &chunks {
            match self.translator.translate(chunk, source_lang, target_lang).await {
                Ok(translated) => outputs.push(translated),
                Err(e) => {
                    error!("Error during translation: {}", e);
                    // Prior translation is discarded rather than kept stale.
                    self.session.translated_text.clear();
                    self.session.summarized_text.clear();
                    return ActionOutcome::Failed;
                }
            }
        }

        let translated = space_sentences(&outputs.join(" "));
        self.session.translated_text = translated.clone();
        self.session.summarized_text.clear();

        if !translated.is_empty() {
            self.session.translation_history.push(translated);
        }

        ActionOutcome::Completed
    }

    /// Summarize action: translated_text -> summarized_text.
    ///
    /// Always summarizes the translated text, never the raw input. The
    /// summary language follows the translation target. No-op when there
    /// is no translated text.
    pub async fn summarize(&mut self) -> ActionOutcome {
        if self.session.translated_text.trim().is_empty() {
            debug!("summarize skipped: no translated text");
            return ActionOutcome::Skipped;
        }

        // Defensive re-normalization before handing text to the summarizer.
        self.session.translated_text = space_sentences(&self.session.translated_text);

        let options = SummarizeOptions::for_language(self.session.lang_direction.summary_language())
            .sentence_count(self.summary_sentences);

        match self
            .summarizer
            .summarize(&self.session.translated_text, &options)
            .await
        {
            Ok(summary) => {
                let summary = space_sentences(&summary);
                self.session.summarized_text = summary.clone();
                if !summary.is_empty() {
                    self.session.summarized_history.push(summary);
                }
                ActionOutcome::Completed
            }
            Err(e) => {
                error!("Error during summarization: {}", e);
                self.session.summarized_text.clear();
                ActionOutcome::Failed
            }
        }
    }

    /// Translate-summary action: summarized_text translated back with the
    /// reversed language pair, overwriting summarized_text in place.
    ///
    /// Destructive by design: the pre-translation summary is gone once
    /// this runs. No-op when there is no summary.
    pub async fn translate_summary(&mut self) -> ActionOutcome {
        if self.session.summarized_text.trim().is_empty() {
            debug!("translate-summary skipped: no summary");
            return ActionOutcome::Skipped;
        }

        let reversed = self.session.lang_direction.reverse();

        match self
            .translator
            .translate(
                &self.session.summarized_text,
                reversed.source_lang(),
                reversed.target_lang(),
            )
            .await
        {
            Ok(translated) => {
                self.session.summarized_text = space_sentences(&translated);
                ActionOutcome::Completed
            }
            Err(e) => {
                error!("Error during summary translation: {}", e);
                self.session.summarized_text.clear();
                ActionOutcome::Failed
            }
        }
    }
}
