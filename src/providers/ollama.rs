/*!
 * Ollama client for local model inference.
 *
 * Covers the locally hosted pretrained-model variant of the pipeline: the
 * same `/api/generate` client serves both translation (through the
 * `TranslationProvider` trait here) and abstractive summarization (through
 * the `summarization::abstractive` wrapper).
 */

use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::TranslationProvider;

/// Ollama generation request
#[derive(Debug, Serialize)]
pub struct GenerationRequest {
    /// The model to use
    model: String,

    /// The prompt to generate from
    prompt: String,

    /// System prompt to guide the model
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,

    /// Disable streaming so the response is a single JSON object
    stream: bool,
}

impl GenerationRequest {
    /// Create a new generation request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system: None,
            temperature: None,
            stream: false,
        }
    }

    /// Set the system prompt
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Ollama generation response
#[derive(Debug, Deserialize)]
pub struct GenerationResponse {
    /// The generated text
    #[serde(default)]
    pub response: String,

    /// Whether generation is complete
    #[serde(default)]
    pub done: bool,
}

/// Ollama version response
#[derive(Debug, Deserialize)]
pub struct VersionResponse {
    /// Version string of the server
    pub version: String,
}

/// Ollama client for interacting with a local model server
#[derive(Debug)]
pub struct Ollama {
    /// Base URL of the Ollama API
    base_url: String,
    /// Model name to run
    model: String,
    /// HTTP client for making requests
    client: Client,
    /// Maximum number of retry attempts (0 = single attempt)
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

impl Ollama {
    /// Create a new client with full configuration
    pub fn new_with_config(
        endpoint: String,
        model: String,
        timeout_secs: u64,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Self {
        let base_url = if endpoint.is_empty() {
            "http://localhost:11434".to_string()
        } else {
            endpoint.trim_end_matches('/').to_string()
        };

        Self {
            base_url,
            model,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            max_retries,
            backoff_base_ms,
        }
    }

    /// Model configured for this client
    pub fn model(&self) -> &str {
        &self.model
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

    /// Parse a generate response body, falling back to JSONL concatenation
    /// for servers that stream despite `stream: false`.
    fn parse_generate_body(body: &str) -> Result<GenerationResponse, ProviderError> {
        if let Ok(response) = serde_json::from_str::<GenerationResponse>(body) {
            return Ok(response);
        }

        let mut full_response = String::new();
        let mut saw_line = false;
        for line in body.lines().filter(|l| !l.is_empty()) {
            let value = serde_json::from_str::<serde_json::Value>(line)
                .map_err(|e| ProviderError::ParseError(e.to_string()))?;
            if let Some(part) = value.get("response").and_then(|v| v.as_str()) {
                full_response.push_str(part);
            }
            saw_line = true;
        }

        if !saw_line {
            return Err(ProviderError::ParseError(
                "empty response body from Ollama".to_string(),
            ));
        }

        Ok(GenerationResponse {
            response: full_response,
            done: true,
        })
    }

    /// Generate text from the Ollama API with retry logic
    pub async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse, ProviderError> {
        let url = format!("{}/api/generate", self.base_url);

        let mut attempt = 0;
        let mut last_error = None;

        while attempt <= self.max_retries {
            let response_result = self.client.post(&url).json(&request).send().await;

            match response_result {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let body = response
                            .text()
                            .await
                            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
                        return Self::parse_generate_body(&body);
                    } else if status.is_server_error() {
                        // Server error - can retry
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!(
                            "Ollama API error ({}): {} - attempt {}/{}",
                            status,
                            error_text,
                            attempt + 1,
                            self.max_retries + 1
                        );
                        last_error = Some(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    } else {
                        // Client error - don't retry
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Failed to get error response text".to_string());
                        error!("Ollama API error ({}): {}", status, error_text);
                        return Err(ProviderError::ApiError {
                            status_code: status.as_u16(),
                            message: error_text,
                        });
                    }
                }
                Err(e) => {
                    // Network error - can retry
                    let provider_error = Self::transport_error(e);
                    error!(
                        "Ollama API network error: {} - attempt {}/{}",
                        provider_error,
                        attempt + 1,
                        self.max_retries + 1
                    );
                    last_error = Some(provider_error);
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

    /// Query the server version
    pub async fn version(&self) -> Result<VersionResponse, ProviderError> {
        let url = format!("{}/api/version", self.base_url);

        let response = self
            .client
            .get(&url)
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

        response
            .json::<VersionResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl TranslationProvider for Ollama {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let system_prompt = format!(
            "You are a professional translator. Translate the following text from {} to {}. \
             Preserve all formatting, line breaks, and special characters. \
             Only respond with the translated text, without any explanations or notes.",
            source_lang, target_lang
        );

        let request = GenerationRequest::new(&self.model, text)
            .system(&system_prompt)
            .temperature(0.3);

        let response = self.generate(request).await?;
        Ok(response.response.trim().to_string())
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        self.version().await.map(|_| ())
    }

    fn display_name(&self) -> &'static str {
        "Ollama"
    }
}
