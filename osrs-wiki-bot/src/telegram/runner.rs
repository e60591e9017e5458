//! REPL runner: parses incoming text into [`Command`]s and hands each one to the
//! [`CommandDispatcher`] in its own task.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument, warn};

use crate::commands::Command;
use crate::core::Chat;
use crate::dispatch::CommandDispatcher;

/// teloxide Bot for `token`, pointed at `api_url` when given (e.g. a local Bot API server).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Starts the REPL. Calls get_me() for the username used to match `/cmd@username`, registers
/// the command list with Telegram, then serves until shutdown.
#[instrument(skip(bot, dispatcher))]
pub async fn run_repl(bot: teloxide::Bot, dispatcher: CommandDispatcher) -> Result<()> {
    let username = match bot.get_me().await {
        Ok(me) => me.user.username.clone().unwrap_or_default(),
        Err(e) => {
            warn!(error = %e, "get_me failed; commands addressed by @username will be ignored");
            String::new()
        }
    };
    info!(username = %username, "Bot username set before repl");

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register command list with Telegram");
    }

    teloxide::repl(bot, move |_bot: Bot, msg: Message| {
        let dispatcher = dispatcher.clone();
        let username = username.clone();

        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };
            let command = match Command::parse(text, &username) {
                Ok(command) => command,
                Err(_) => return respond(()),
            };

            let chat = Chat { id: msg.chat.id.0 };
            info!(chat_id = chat.id, command = ?command, "Received command");

            // Each request runs independently; the REPL returns immediately.
            tokio::spawn(async move {
                if let Err(e) = dispatcher.dispatch(&chat, &command).await {
                    error!(error = %e, chat_id = chat.id, "Command handling failed");
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
