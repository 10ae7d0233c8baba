/*!
 * Google web translation client.
 *
 * Talks to the free `translate_a/single` endpoint with `client=gtx`, the
 * same endpoint the popular unofficial Google Translate wrappers use. The
 * response is a nested JSON array whose first element holds one
 * `[translated, original, ...]` segment per source sentence; the translated
 * segments are concatenated to form the result.
 */

use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde_json::Value;

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Default public endpoint for the gtx translation API
const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Google translation client
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// Base endpoint URL
    endpoint: String,
    /// Maximum number of retry attempts (0 = single attempt)
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

impl GoogleTranslate {
    /// Create a new client with the default endpoint and a single attempt
    pub fn new(timeout_secs: u64) -> Self {
        Self::new_with_config(String::new(), timeout_secs, 0, 1000)
    }

    /// Create a new client with full configuration
    pub fn new_with_config(
        endpoint: String,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        let endpoint = if endpoint.is_empty() {
            DEFAULT_ENDPOINT.to_string()
        } else {
            endpoint.trim_end_matches('/').to_string()
        };

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint,
            max_retries,
            backoff_base_ms,
        }
    }

    /// Map a reqwest transport error to the matching provider error
    fn transport_error(e: reqwest::Error) -> ProviderError {
        if e.is_timeout() {
            ProviderError::Timeout(e.to_string())
        } else if e.is_connect() {
            ProviderError::ConnectionError(e.to_string())
        } else {
            ProviderError::RequestFailed(e.to_string())
        }
    }

    /// Extract the translated text from the nested-array response body
    fn extract_translation(body: &Value) -> Result<String, ProviderError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::ParseError("missing segment array".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(part);
            }
        }

        Ok(translated)
    }

    /// Perform one translation request without retry handling
    async fn request_once(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/translate_a/single", self.endpoint);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::extract_translation(&body)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            match self.request_once(text, source_lang, target_lang).await {
                Ok(translated) => return Ok(translated),
                Err(e @ ProviderError::ApiError { status_code, .. }) if status_code < 500 => {
                    // Client error - don't retry
                    error!("Google translate error: {}", e);
                    return Err(e);
                }
                Err(e) => {
                    error!(
                        "Google translate error: {} - attempt {}/{}",
                        e,
                        attempt + 1,
                        self.max_retries + 1
                    );
                    last_error = Some(e);
                }
            }

            attempt += 1;
            if attempt <= self.max_retries {
                let backoff_ms = crate::providers::backoff_delay_ms(self.backoff_base_ms, attempt);
                tokio::time::sleep(Duration::from_millis(backoff_ms)).await;
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "request failed after {} attempts",
                self.max_retries + 1
            ))
        }))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.request_once("hello", "en", "ko").await.map(|_| ())
    }

    fn display_name(&self) -> &'static str {
        "Google"
    }
}
