use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::io::{BufRead, Write};
use std::time::Duration;

use crate::app_config::{Config, SummarizerChoice, TranslatorChoice};
use crate::language_utils;
use crate::providers::TranslationProvider;
use crate::providers::google::GoogleTranslate;
use crate::providers::mock::MockTranslator;
use crate::providers::ollama::Ollama;
use crate::session::orchestrator::ActionOutcome;
use crate::session::{LangDirection, Orchestrator};
use crate::summarization::Summarizer;
use crate::summarization::abstractive::AbstractiveSummarizer;
use crate::summarization::extractive::ExtractiveSummarizer;

// @module: Application controller for the interactive session

/// Main application controller for the translate-and-summarize session
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Build the translation backend selected by the configuration.
    ///
    /// Backend choice happens once, here; the orchestrator only ever sees
    /// the trait object.
    pub fn build_translator(config: &Config) -> Box<dyn TranslationProvider> {
        let t = &config.translation;
        match config.translator {
            TranslatorChoice::Google => Box::new(GoogleTranslate::new_with_config(
                t.endpoint.clone(),
                t.timeout_secs,
                t.retry_count,
                t.retry_backoff_ms,
            )),
            TranslatorChoice::Ollama => Box::new(Ollama::new_with_config(
                t.endpoint.clone(),
                t.model.clone(),
                t.timeout_secs,
                t.retry_count,
                t.retry_backoff_ms,
            )),
            TranslatorChoice::Mock => Box::new(MockTranslator::working()),
        }
    }

    /// Build the summarization backend selected by the configuration
    pub fn build_summarizer(config: &Config) -> Box<dyn Summarizer> {
        match config.summarizer {
            SummarizerChoice::Extractive => Box::new(ExtractiveSummarizer::new()),
            SummarizerChoice::Abstractive => Box::new(AbstractiveSummarizer::new(
                Ollama::new_with_config(
                    config.summary.endpoint.clone(),
                    config.summary.model.clone(),
                    config.summary.timeout_secs,
                    0,
                    1000,
                ),
            )),
        }
    }

    /// Run the interactive session loop on stdin/stdout
    pub async fn run_session(&self) -> Result<()> {
        let translator = Self::build_translator(&self.config);
        let summarizer = Self::build_summarizer(&self.config);

        info!(
            "Starting session: {} translator, {} summarizer",
            self.config.translator.display_name(),
            self.config.summarizer
        );

        let mut orchestrator = Orchestrator::new(
            translator,
            summarizer,
            self.config.lang_direction,
            self.config.translation.chunk_chars,
            self.config.summary.sentence_count,
        );

        orchestrator.verify_connection().await;

        Self::print_banner(orchestrator.session().lang_direction)?;

        let stdin = std::io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let trimmed = line.trim();

            match trimmed {
                ":quit" | ":q" | ":exit" => break,
                ":help" | ":h" => Self::print_help()?,
                ":show" => Self::print_outputs(orchestrator.session())?,
                ":history" => Self::print_history(orchestrator.session())?,
                ":translate" | ":t" => {
                    let outcome = Self::with_spinner("Translating", orchestrator.translate()).await;
                    Self::report_outcome(outcome, "translation");
                    if outcome.is_completed() {
                        Self::print_outputs(orchestrator.session())?;
                    }
                }
                ":summarize" | ":s" => {
                    let outcome = Self::with_spinner("Summarizing", orchestrator.summarize()).await;
                    Self::report_outcome(outcome, "summary");
                    if outcome.is_completed() {
                        Self::print_outputs(orchestrator.session())?;
                    }
                }
                ":translate-summary" | ":ts" => {
                    let outcome =
                        Self::with_spinner("Translating summary", orchestrator.translate_summary())
                            .await;
                    Self::report_outcome(outcome, "summary translation");
                    if outcome.is_completed() {
                        Self::print_outputs(orchestrator.session())?;
                    }
                }
                _ if trimmed.starts_with(":dir") => {
                    let value = trimmed.trim_start_matches(":dir").trim();
                    match value.parse::<LangDirection>() {
                        Ok(direction) => {
                            orchestrator.set_direction(direction);
                            Self::print_banner(direction)?;
                        }
                        Err(e) => println!("{} (expected en-ko or ko-en)", e),
                    }
                }
                _ if trimmed.starts_with(':') => {
                    println!("Unknown command: {} (try :help)", trimmed);
                }
                _ => {
                    debug!("input text set ({} chars)", line.chars().count());
                    orchestrator.set_input(line);
                    println!("Input set. Run :translate when ready.");
                }
            }
        }

        info!("Session ended");
        Ok(())
    }

    /// Run a future behind a blocking spinner; one action is in flight at
    /// a time, so the terminal stays non-interactive until it resolves.
    async fn with_spinner<F, T>(message: &str, action: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = action.await;

        spinner.finish_and_clear();
        result
    }

    fn report_outcome(outcome: ActionOutcome, what: &str) {
        match outcome {
            ActionOutcome::Completed => {}
            ActionOutcome::Skipped => println!("Nothing to do: no qualifying input for {}.", what),
            ActionOutcome::Failed => println!("The {} failed; result cleared. See log above.", what),
        }
    }

    fn print_banner(direction: LangDirection) -> Result<()> {
        let source = language_utils::get_language_name(direction.source_lang())?;
        let target = language_utils::get_language_name(direction.target_lang())?;
        println!("EnKoreS - direction {} ({} -> {})", direction, source, target);
        println!("Type text to set the input, or :help for commands.");
        Ok(())
    }

    fn print_help() -> Result<()> {
        println!("Commands:");
        println!("  <text>              set the input text");
        println!("  :dir en-ko|ko-en    switch translation direction (clears texts)");
        println!("  :translate, :t      translate the input text");
        println!("  :summarize, :s      summarize the translated text");
        println!("  :translate-summary, :ts  translate the summary back");
        println!("  :show               show current outputs");
        println!("  :history            show last {} history entries", crate::session::HISTORY_DISPLAY_LIMIT);
        println!("  :quit, :q           end the session");
        Ok(())
    }

    fn print_outputs(session: &crate::session::Session) -> Result<()> {
        if !session.translated_text.is_empty() {
            println!("--- Translated ---");
            println!("{}", session.translated_text);
        }
        if !session.summarized_text.is_empty() {
            println!("--- Summary ---");
            println!("{}", session.summarized_text);
        }
        if session.translated_text.is_empty() && session.summarized_text.is_empty() {
            println!("(no output yet)");
        }
        Ok(())
    }

    fn print_history(session: &crate::session::Session) -> Result<()> {
        println!("--- Translation history (last {}) ---", crate::session::HISTORY_DISPLAY_LIMIT);
        let translations = session.translation_history_view();
        if translations.is_empty() {
            println!("(empty)");
        }
        for entry in translations {
            println!("- {}", entry);
        }

        println!("--- Summary history (last {}) ---", crate::session::HISTORY_DISPLAY_LIMIT);
        let summaries = session.summarized_history_view();
        if summaries.is_empty() {
            println!("(empty)");
        }
        for entry in summaries {
            println!("- {}", entry);
        }
        Ok(())
    }
}
