//! OpenAI-backed [`Summarizer`]: fixed system instruction, fixed token budget and temperature.

use anyhow::{Context, Result};
use async_trait::async_trait;
use openai_client::{ChatCompletionOptions, OpenAIClient};
use prompt::summary_messages;
use std::time::Duration;
use tracing::{info, instrument};

use super::{chat_message_to_openai, Summarizer};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Completion token budget per summary.
pub const SUMMARY_MAX_TOKENS: u32 = 500;

/// Sampling temperature per summary.
pub const SUMMARY_TEMPERATURE: f32 = 0.7;

/// Summarizer over an OpenAI-compatible chat completion API.
#[derive(Clone)]
pub struct OpenAISummarizer {
    client: OpenAIClient,
    model: String,
}

impl OpenAISummarizer {
    pub fn with_base_url(api_key: String, base_url: String, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: OpenAIClient::with_base_url(api_key, base_url, Some(timeout))?,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Summarizer for OpenAISummarizer {
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    async fn summarize(&self, prompt: &str) -> Result<String> {
        let openai_messages = summary_messages(prompt)
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;
        let options = ChatCompletionOptions {
            max_tokens: Some(SUMMARY_MAX_TOKENS),
            temperature: Some(SUMMARY_TEMPERATURE),
        };
        let text = self
            .client
            .chat_completion(&self.model, openai_messages, options)
            .await
            .context("summarization request failed")?;
        info!(reply_len = text.len(), "step: summary generated");
        Ok(text)
    }
}
