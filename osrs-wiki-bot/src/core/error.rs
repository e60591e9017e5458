//! Error types for the bot core.
//!
//! [`BotError`] covers message delivery failures. Wiki and summarization failures never reach
//! it; they are turned into user-facing responses first.

use thiserror::Error;

/// Top-level error for the bot (message delivery).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
