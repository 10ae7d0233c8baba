/*!
 * Abstractive summarization through a local model server.
 *
 * Wraps the Ollama generate client with a summarization prompt. Functionally
 * interchangeable with the extractive path behind the `Summarizer` trait.
 */

use async_trait::async_trait;

use crate::errors::SummarizationError;
use crate::providers::ollama::{GenerationRequest, Ollama};
use crate::summarization::{SummarizeOptions, Summarizer};

/// Generative summarizer backed by an Ollama-compatible server
#[derive(Debug)]
pub struct AbstractiveSummarizer {
    /// Client for the model server
    client: Ollama,
}

impl AbstractiveSummarizer {
    /// Create a new abstractive summarizer around an Ollama client
    pub fn new(client: Ollama) -> Self {
        Self { client }
    }

    /// Build the system prompt for a summarization call
    fn system_prompt(options: &SummarizeOptions) -> String {
        format!(
            "You are a professional summarizer. Summarize the following {} text \
             in at most {} sentences, in {}. \
             Only respond with the summary, without any explanations or notes.",
            options.language.name(),
            options.sentence_count,
            options.language.name()
        )
    }
}

#[async_trait]
impl Summarizer for AbstractiveSummarizer {
    async fn summarize(
        &self,
        text: &str,
        options: &SummarizeOptions,
    ) -> Result<String, SummarizationError> {
        let request = GenerationRequest::new(self.client.model(), text)
            .system(Self::system_prompt(options))
            .temperature(0.5);

        let response = self.client.generate(request).await?;
        Ok(response.response.trim().to_string())
    }

    fn display_name(&self) -> &'static str {
        "Abstractive"
    }
}
