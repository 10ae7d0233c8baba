/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock translation backend that simulates different
 * behaviors:
 * - `MockTranslator::working()` - Always succeeds with pseudo-translated text
 * - `MockTranslator::failing()` - Always fails with an error
 * - `MockTranslator::empty()` - Succeeds but returns an empty string
 * - `MockTranslator::slow(ms)` - Succeeds after a delay
 * - `MockTranslator::timing_out()` - Always fails with a timeout error
 */

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a tagged pseudo-translation
    Working,
    /// Always fails with an error
    Failing,
    /// Returns empty response
    Empty,
    /// Simulates slow response
    Slow { delay_ms: u64 },
    /// Always fails with a timeout error
    TimedOut,
    /// Succeeds for the first N requests, then fails
    FailAfter { succeed: usize },
}

/// Mock translation backend for testing orchestration behavior
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of translate calls received
    request_count: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a working mock translator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock translator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock that responds after a delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Create a mock that fails every request with a timeout error
    pub fn timing_out() -> Self {
        Self::new(MockBehavior::TimedOut)
    }

    /// Create a mock that succeeds for the first `succeed` requests, then fails
    pub fn fail_after(succeed: usize) -> Self {
        Self::new(MockBehavior::FailAfter { succeed })
    }

    /// Shared handle to the request counter
    pub fn request_counter(&self) -> Arc<AtomicUsize> {
        self.request_count.clone()
    }

    /// Number of translate calls received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Deterministic pseudo-translation: tag the text with the target
    /// language so round-trips are visibly non-identity.
    fn pseudo_translate(text: &str, target_lang: &str) -> String {
        format!("[{}] {}", target_lang, text)
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let request_index = self.request_count.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::Working => Ok(Self::pseudo_translate(text, target_lang)),
            MockBehavior::Failing => Err(ProviderError::RequestFailed(
                "mock provider configured to fail".to_string(),
            )),
            MockBehavior::Empty => Ok(String::new()),
            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                Ok(Self::pseudo_translate(text, target_lang))
            }
            MockBehavior::TimedOut => Err(ProviderError::Timeout(
                "mock provider configured to time out".to_string(),
            )),
            MockBehavior::FailAfter { succeed } => {
                if request_index < succeed {
                    Ok(Self::pseudo_translate(text, target_lang))
                } else {
                    Err(ProviderError::RequestFailed(format!(
                        "mock provider configured to fail after {} requests",
                        succeed
                    )))
                }
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "mock provider configured to fail".to_string(),
            )),
            MockBehavior::TimedOut => Err(ProviderError::Timeout(
                "mock provider configured to time out".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn display_name(&self) -> &'static str {
        "Mock"
    }
}
