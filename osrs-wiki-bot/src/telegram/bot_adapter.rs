//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Production code sends messages via
//! Telegram; tests substitute a recording mock.

use async_trait::async_trait;
use teloxide::{prelude::*, types::ChatId};

use crate::core::{Bot as CoreBot, BotError, Chat, Result};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
