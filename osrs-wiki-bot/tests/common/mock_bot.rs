//! Mock implementation of [`osrs_wiki_bot::Bot`] for integration tests.
//!
//! Records every `send_message` call so tests can assert on the reply text without hitting
//! Telegram.

use async_trait::async_trait;
use osrs_wiki_bot::{Bot, BotError, Chat, Result};
use std::sync::Mutex;

/// One recorded call to `send_message(chat, text)`.
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
}

/// Mock Bot that records sent messages. `failing()` makes every send return an error.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentMessage>>,
    fail: bool,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        if self.fail {
            return Err(BotError::Bot("send failed".to_string()));
        }
        self.sent.lock().unwrap().push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }
}
