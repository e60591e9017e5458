//! Runs the query flow for a parsed [`Command`] and sends the rendered reply.

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::commands::{help_text, parse_recent_limit, usage_hint, Command};
use crate::core::{Bot, Chat, Result};
use crate::query::WikiQueryService;
use crate::render::render;

/// Connects commands to the query service and replies through a [`Bot`].
///
/// Cheap to clone; the REPL hands one clone to each spawned request task.
#[derive(Clone)]
pub struct CommandDispatcher {
    service: Arc<WikiQueryService>,
    bot: Arc<dyn Bot>,
}

impl CommandDispatcher {
    pub fn new(service: Arc<WikiQueryService>, bot: Arc<dyn Bot>) -> Self {
        Self { service, bot }
    }

    /// The reply text for `command`. Commands missing their required argument get a usage hint
    /// and trigger no wiki call.
    pub async fn execute(&self, command: &Command) -> String {
        let arg = match command {
            Command::Search(a) | Command::Info(a) | Command::Ai(a) => a.trim(),
            Command::Help | Command::Random | Command::Recent(_) => "",
        };
        if arg.is_empty() {
            if let Some(hint) = usage_hint(command) {
                return hint.to_string();
            }
        }

        let response = match command {
            Command::Help => return help_text(),
            Command::Search(_) => self.service.search(arg).await,
            Command::Info(_) => self.service.info(arg).await,
            Command::Random => self.service.random().await,
            Command::Recent(limit) => {
                self.service
                    .recent_changes(parse_recent_limit(limit))
                    .await
            }
            Command::Ai(_) => self.service.ai_info(arg).await,
        };
        render(&response)
    }

    /// Execute `command` and send the reply to `chat`.
    #[instrument(skip(self), fields(chat_id = chat.id))]
    pub async fn dispatch(&self, chat: &Chat, command: &Command) -> Result<()> {
        info!("step: command received");
        let reply = self.execute(command).await;
        self.bot.send_message(chat, &reply).await.inspect_err(|e| {
            error!(error = %e, "Failed to send reply");
        })?;
        info!("step: reply sent");
        Ok(())
    }
}
