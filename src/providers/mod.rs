/*!
 * Provider implementations for translation backends.
 *
 * This module contains client implementations for the supported backends:
 * - Google: free web translation endpoint (the remote service variant)
 * - Ollama: local model server (the local pretrained-model variant)
 * - Mock: deterministic test double
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation backends
///
/// This trait defines the interface that all provider implementations must
/// follow, allowing them to be used interchangeably by the orchestrator.
/// Implementations report failures as `ProviderError`; the fail-soft
/// degradation to an empty result is the orchestrator's job, not theirs.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// Translate `text` from `source_lang` to `target_lang` (ISO 639-1 codes)
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The translated text or an error
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError>;

    /// Test the connection to the backend
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Short display name for log messages
    fn display_name(&self) -> &'static str;
}

pub mod google;
pub mod mock;
pub mod ollama;

/// Largest exponent applied to the backoff base; later attempts plateau
/// instead of overflowing the shift.
const MAX_BACKOFF_SHIFT: u32 = 16;

/// Exponential backoff delay before retry `attempt` (1-based), doubling
/// from `base_ms` and saturating instead of overflowing.
pub(crate) fn backoff_delay_ms(base_ms: u64, attempt: u32) -> u64 {
    let shift = attempt.saturating_sub(1).min(MAX_BACKOFF_SHIFT);
    base_ms.saturating_mul(1u64 << shift)
}
