/*!
 * Interactive session state and action orchestration.
 *
 * - `models`: the Session struct, language direction, and history views
 * - `orchestrator`: sequences translate/summarize actions over the adapters
 */

pub mod models;
pub mod orchestrator;

pub use models::{LangDirection, Session, HISTORY_DISPLAY_LIMIT, HISTORY_PREVIEW_CHARS};
pub use orchestrator::Orchestrator;
