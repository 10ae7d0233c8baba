/*!
 * Session state models.
 *
 * A Session is owned by exactly one interactive run and mutated only in
 * response to user-triggered actions. Histories are append-only for the
 * lifetime of the session; the last-5 limit applies to the display view,
 * not to storage.
 */

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::summarization::SummaryLanguage;

/// Number of history entries shown in the display view
pub const HISTORY_DISPLAY_LIMIT: usize = 5;

/// Number of characters shown per history entry before truncation
pub const HISTORY_PREVIEW_CHARS: usize = 100;

/// Active translation direction
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LangDirection {
    /// English to Korean
    #[default]
    EnToKo,
    /// Korean to English
    KoToEn,
}

impl LangDirection {
    /// Source language code for this direction
    pub fn source_lang(&self) -> &'static str {
        match self {
            Self::EnToKo => "en",
            Self::KoToEn => "ko",
        }
    }

    /// Target language code for this direction
    pub fn target_lang(&self) -> &'static str {
        match self {
            Self::EnToKo => "ko",
            Self::KoToEn => "en",
        }
    }

    /// The opposite direction, used when translating a summary back
    pub fn reverse(&self) -> Self {
        match self {
            Self::EnToKo => Self::KoToEn,
            Self::KoToEn => Self::EnToKo,
        }
    }

    /// Language the summary is produced in: the target of the translation
    pub fn summary_language(&self) -> SummaryLanguage {
        match self {
            Self::EnToKo => SummaryLanguage::Ko,
            Self::KoToEn => SummaryLanguage::En,
        }
    }
}

impl std::fmt::Display for LangDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnToKo => write!(f, "en-ko"),
            Self::KoToEn => write!(f, "ko-en"),
        }
    }
}

impl std::str::FromStr for LangDirection {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "en-ko" | "en_to_ko" | "entoko" => Ok(Self::EnToKo),
            "ko-en" | "ko_to_en" | "kotoen" => Ok(Self::KoToEn),
            _ => Err(anyhow!("Invalid language direction: {}", s)),
        }
    }
}

/// In-memory state of one interactive session
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Raw text the user entered
    pub input_text: String,

    /// Translation of input_text under the current direction
    pub translated_text: String,

    /// Summary derived from translated_text (never from input_text)
    pub summarized_text: String,

    /// Active translation direction
    pub lang_direction: LangDirection,

    /// Every translation produced in this session, oldest first
    pub translation_history: Vec<String>,

    /// Every summary produced in this session, oldest first
    pub summarized_history: Vec<String>,
}

impl Session {
    /// Create a fresh session with the given direction
    pub fn new(lang_direction: LangDirection) -> Self {
        Self {
            lang_direction,
            ..Default::default()
        }
    }

    /// Switch the translation direction.
    ///
    /// Changing direction clears the three text fields so stale derived
    /// text cannot outlive the direction it was produced under. Histories
    /// persist across switches to keep prior work visible. Setting the
    /// same direction again is a no-op.
    pub fn set_direction(&mut self, direction: LangDirection) {
        if self.lang_direction == direction {
            return;
        }
        self.lang_direction = direction;
        self.input_text.clear();
        self.translated_text.clear();
        self.summarized_text.clear();
    }

    /// Display view of the translation history: last 5 entries, previewed
    pub fn translation_history_view(&self) -> Vec<String> {
        Self::history_view(&self.translation_history)
    }

    /// Display view of the summary history: last 5 entries, previewed
    pub fn summarized_history_view(&self) -> Vec<String> {
        Self::history_view(&self.summarized_history)
    }

    fn history_view(history: &[String]) -> Vec<String> {
        let start = history.len().saturating_sub(HISTORY_DISPLAY_LIMIT);
        history[start..].iter().map(|e| Self::preview(e)).collect()
    }

    /// First 100 characters of an entry plus an ellipsis when truncated
    fn preview(entry: &str) -> String {
        if entry.chars().count() <= HISTORY_PREVIEW_CHARS {
            entry.to_string()
        } else {
            let truncated: String = entry.chars().take(HISTORY_PREVIEW_CHARS).collect();
            format!("{}...", truncated)
        }
    }
}
