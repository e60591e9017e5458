//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for one-shot chat completion.
//! Provides token masking for safe logging and a simple request/response API.
//!
//! Requests are never retried: the underlying client is built with a backoff policy whose
//! elapsed-time budget is zero, so a 429 or 5xx comes straight back as an error.

use async_openai::{types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;
use std::time::Duration;
use tracing;

pub use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};

/// Default OpenAI API base URL.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
/// Exposed for tests and for callers who need to log API keys safely.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_ascii() {
        "***".to_string()
    } else {
        let head = &token[..7];
        let tail = &token[len - 4..];
        format!("{}***{}", head, tail)
    }
}

/// Sampling knobs for a completion request. `None` leaves the API default.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChatCompletionOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// OpenAI chat client. Wraps async-openai client; holds API key for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    /// Shared async-openai client used for all API calls.
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    /// API key stored only for logging (masked).
    api_key_for_logging: String,
}

fn no_retry() -> backoff::ExponentialBackoff {
    backoff::ExponentialBackoff {
        max_elapsed_time: Some(Duration::ZERO),
        ..Default::default()
    }
}

impl OpenAIClient {
    /// Builds a client with a custom base URL (e.g. for proxies or compatible endpoints) and an
    /// optional per-request timeout.
    pub fn with_base_url(
        api_key: String,
        base_url: String,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let api_key_for_logging = api_key.clone();
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        let mut http = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            http = http.timeout(timeout);
        }
        let client = Client::with_config(config)
            .with_http_client(http.build()?)
            .with_backoff(no_retry());
        Ok(Self {
            client: Arc::new(client),
            api_key_for_logging,
        })
    }

    /// Sends a chat completion request and returns the full assistant reply as a string.
    ///
    /// Logs masked API key and token usage. Returns the first choice's content
    /// or an error if the response has no choices.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        options: ChatCompletionOptions,
    ) -> anyhow::Result<String> {
        let message_count = messages.len();
        let masked = mask_token(&self.api_key_for_logging);

        tracing::info!(
            model = %model,
            message_count = message_count,
            max_tokens = ?options.max_tokens,
            temperature = ?options.temperature,
            api_key = %masked,
            "OpenAI chat_completion request"
        );

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(model).messages(messages);
        if let Some(max_tokens) = options.max_tokens {
            #[allow(deprecated)]
            args.max_tokens(max_tokens);
        }
        if let Some(temperature) = options.temperature {
            args.temperature(temperature);
        }
        let request = args.build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("No response from OpenAI");
        }
    }
}
