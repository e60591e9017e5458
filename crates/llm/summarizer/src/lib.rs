//! # Summarizer
//!
//! Defines the [`Summarizer`] trait and an OpenAI implementation. One prompt in, one generated
//! text out, a single round trip with no retries. Transport-agnostic; used by the wiki query
//! service for AI-enhanced topic answers.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};

mod openai_summarizer;

pub use openai_client::DEFAULT_OPENAI_BASE_URL;
pub use openai_summarizer::{
    OpenAISummarizer, DEFAULT_MODEL, SUMMARY_MAX_TOKENS, SUMMARY_TEMPERATURE,
};

/// Turns a fully built prompt into generated text.
///
/// Any transport, quota, or decoding failure is returned as one `anyhow::Error`; callers do not
/// distinguish between them.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, prompt: &str) -> Result<String>;
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
