use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::session::LangDirection;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Translation direction active at session start
    #[serde(default)]
    pub lang_direction: LangDirection,

    /// Translation backend selection
    #[serde(default)]
    pub translator: TranslatorChoice,

    /// Summarization backend selection
    #[serde(default)]
    pub summarizer: SummarizerChoice,

    /// Translation backend settings
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Summarization settings
    #[serde(default)]
    pub summary: SummaryConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation backend type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorChoice {
    // @backend: Google web translation endpoint
    #[default]
    Google,
    // @backend: Local Ollama model server
    Ollama,
    // @backend: Deterministic mock (testing / offline demo)
    Mock,
}

impl TranslatorChoice {
    // @returns: Capitalized backend name
    pub fn display_name(&self) -> &str {
        match self {
            Self::Google => "Google",
            Self::Ollama => "Ollama",
            Self::Mock => "Mock",
        }
    }
}

impl std::fmt::Display for TranslatorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Google => write!(f, "google"),
            Self::Ollama => write!(f, "ollama"),
            Self::Mock => write!(f, "mock"),
        }
    }
}

impl std::str::FromStr for TranslatorChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "google" => Ok(Self::Google),
            "ollama" => Ok(Self::Ollama),
            "mock" => Ok(Self::Mock),
            _ => Err(anyhow!("Invalid translator type: {}", s)),
        }
    }
}

/// Summarization backend type
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerChoice {
    // @backend: Local extractive statistical summarizer
    #[default]
    Extractive,
    // @backend: Generative model via Ollama server
    Abstractive,
}

impl std::fmt::Display for SummarizerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extractive => write!(f, "extractive"),
            Self::Abstractive => write!(f, "abstractive"),
        }
    }
}

impl std::str::FromStr for SummarizerChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "extractive" => Ok(Self::Extractive),
            "abstractive" => Ok(Self::Abstractive),
            _ => Err(anyhow!("Invalid summarizer type: {}", s)),
        }
    }
}

/// Translation backend settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationConfig {
    /// Service endpoint URL (empty = backend default)
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Model name, for the Ollama backend
    #[serde(default = "default_ollama_model")]
    pub model: String,

    /// Maximum characters per translation request
    #[serde(default = "default_chunk_chars")]
    pub chunk_chars: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry attempts after a failed request (0 = single attempt)
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Base backoff in milliseconds, doubled on each retry
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            model: default_ollama_model(),
            chunk_chars: default_chunk_chars(),
            timeout_secs: default_timeout_secs(),
            retry_count: default_retry_count(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

/// Summarization settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SummaryConfig {
    /// Target number of sentences in a summary
    #[serde(default = "default_sentence_count")]
    pub sentence_count: usize,

    /// Model server endpoint, for the abstractive backend
    #[serde(default = "String::new")]
    pub endpoint: String,

    /// Model name, for the abstractive backend
    #[serde(default = "default_ollama_model")]
    pub model: String,

    /// Request timeout in seconds for the abstractive backend
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            sentence_count: default_sentence_count(),
            endpoint: String::new(),
            model: default_ollama_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_chunk_chars() -> usize {
    crate::processing::DEFAULT_CHUNK_CHARS
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_retry_count() -> u32 {
    0 // Single attempt: failures degrade to an empty result
}

fn default_retry_backoff_ms() -> u64 {
    1000 // 1 second base backoff time, doubled on each retry
}

fn default_sentence_count() -> usize {
    3
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

/// Check that an endpoint override, when set, is a well-formed URL
fn validate_endpoint(endpoint: &str, what: &str) -> Result<()> {
    if endpoint.is_empty() {
        return Ok(());
    }
    url::Url::parse(endpoint).map_err(|e| anyhow!("Invalid {} endpoint '{}': {}", what, endpoint, e))?;
    Ok(())
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Both direction languages must be resolvable codes
        crate::language_utils::validate_language_code(self.lang_direction.source_lang())?;
        crate::language_utils::validate_language_code(self.lang_direction.target_lang())?;

        if self.translation.chunk_chars == 0 {
            return Err(anyhow!("chunk_chars must be at least 1"));
        }

        if self.summary.sentence_count == 0 {
            return Err(anyhow!("sentence_count must be at least 1"));
        }

        validate_endpoint(&self.translation.endpoint, "translation")?;
        validate_endpoint(&self.summary.endpoint, "summary")?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            lang_direction: LangDirection::default(),
            translator: TranslatorChoice::default(),
            summarizer: SummarizerChoice::default(),
            translation: TranslationConfig::default(),
            summary: SummaryConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
