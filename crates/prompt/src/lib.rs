//! # Prompt
//!
//! Builds what the summarization model sees: a fixed system instruction plus one user message
//! that embeds wiki text for a topic.
//!
//! ## Format
//!
//! - **System**: [`TOPIC_SYSTEM_MESSAGE`]
//! - **User**: [`format_topic_prompt`], the topic name, the wiki text, and the list of things
//!   the answer should cover
//!
//! ## External interactions
//!
//! - **AI models**: Output is sent to chat-completion APIs (OpenAI or compatible).

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// System instruction for topic explanations.
pub const TOPIC_SYSTEM_MESSAGE: &str =
    "You are a helpful assistant that explains Old School RuneScape topics clearly and concisely.";

/// What the model is asked to cover, in order.
pub const TOPIC_ANSWER_POINTS: [&str; 4] = [
    "A brief overview of what this is",
    "Key details and important information",
    "Any relevant tips or notes for players",
    "Keep it concise and easy to understand",
];

/// Builds the user prompt asking the model to explain `topic` from `wiki_text`.
///
/// `wiki_text` is expected to be normalized plain text, already length-capped by the caller.
pub fn format_topic_prompt(topic: &str, wiki_text: &str) -> String {
    let mut out = format!(
        "Based on the following information from the Old School RuneScape Wiki about '{}', \
         provide a clear, concise, and helpful explanation:\n\n",
        topic
    );
    out.push_str("Wiki Information:\n");
    out.push_str(wiki_text);
    out.push_str("\n\nPlease provide:\n");
    for (i, point) in TOPIC_ANSWER_POINTS.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, point));
    }
    out.push_str("\nFormat your response in a clear, structured way.");
    out
}

/// The messages sent for one summary: [`TOPIC_SYSTEM_MESSAGE`] followed by `prompt` as the user
/// turn. `prompt` is normally the output of [`format_topic_prompt`].
pub fn summary_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(TOPIC_SYSTEM_MESSAGE),
        ChatMessage::user(prompt),
    ]
}
