//! Bot abstraction for sending replies.
//!
//! [`Bot`] trait is transport-agnostic; `crate::telegram::TelegramBotAdapter` implements it via
//! teloxide and tests substitute a recording mock.

use async_trait::async_trait;

use super::error::Result;
use super::types::Chat;

/// Sends a text message to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
}
