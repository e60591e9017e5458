//! Bot configuration loaded from the environment: Telegram connection, wiki endpoint,
//! summarization service, logging.

mod bot_config;


pub use bot_config::{
    BotConfig, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOG_FILE, PLACEHOLDER_BOT_TOKEN,
};
