/*!
 * # EnKoreS - English/Korean Translate-and-Summarize
 *
 * A Rust library for translating text between English and Korean and
 * summarizing the result, driven by an interactive session.
 *
 * ## Features
 *
 * - Translate pasted text between English and Korean
 * - Remote (Google web endpoint) or local (Ollama model server) translation
 * - Extractive statistical or generative abstractive summarization
 * - Bounded-size chunking for inputs longer than the backend limit
 * - Session history of translations and summaries
 * - Fail-soft error policy: backend failures report and degrade, never crash
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `processing`: Text primitives:
 *   - `processing::spacer`: Sentence spacing normalization
 *   - `processing::chunker`: Positional chunking of long input
 * - `providers`: Translation backends:
 *   - `providers::google`: Google web endpoint client
 *   - `providers::ollama`: Local Ollama model server client
 *   - `providers::mock`: Deterministic test double
 * - `summarization`: Summarization backends:
 *   - `summarization::extractive`: Statistical sentence selection
 *   - `summarization::abstractive`: Generative summarization via Ollama
 * - `session`: Session state and action orchestration
 * - `app_controller`: Interactive session controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod processing;
pub mod providers;
pub mod session;
pub mod summarization;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ProviderError, SummarizationError, TranslationError};
pub use processing::{chunk_text, space_sentences};
pub use session::{LangDirection, Orchestrator, Session};
