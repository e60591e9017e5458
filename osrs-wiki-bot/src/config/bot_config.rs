use anyhow::Result;
use std::env;
use std::time::Duration;

use summarizer::{DEFAULT_MODEL, DEFAULT_OPENAI_BASE_URL};
use wiki_client::DEFAULT_WIKI_BASE_URL;

/// Per-request timeout for wiki and summarization calls when `WIKI_HTTP_TIMEOUT_SECS` is unset.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

/// Log file path when `LOG_FILE` is unset.
pub const DEFAULT_LOG_FILE: &str = "logs/osrs-wiki-bot.log";

/// Token value shipped in sample `.env` files; treated as "not configured".
pub const PLACEHOLDER_BOT_TOKEN: &str = "your_bot_token_here";

/// Bot configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN (or `--token`). Only needed to talk to Telegram.
    pub bot_token: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// OPENAI_API_KEY; `None` when unset or blank, which disables the AI flow.
    pub openai_api_key: Option<String>,
    /// OPENAI_BASE_URL
    pub openai_base_url: String,
    /// AI_MODEL
    pub ai_model: String,
    /// OSRS_WIKI_BASE_URL, without trailing slash
    pub wiki_base_url: String,
    /// WIKI_HTTP_TIMEOUT_SECS
    pub http_timeout_secs: u64,
    /// LOG_FILE
    pub log_file: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = non_blank(token.or_else(|| env::var("BOT_TOKEN").ok()));
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let openai_api_key = non_blank(env::var("OPENAI_API_KEY").ok());
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string());
        let ai_model = env::var("AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let wiki_base_url = env::var("OSRS_WIKI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_WIKI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let http_timeout_secs = match env::var("WIKI_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                anyhow::anyhow!("WIKI_HTTP_TIMEOUT_SECS must be a whole number of seconds: {}", raw)
            })?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            openai_api_key,
            openai_base_url,
            ai_model,
            wiki_base_url,
            http_timeout_secs,
            log_file,
        })
    }

    /// Validate config: URLs must parse and the timeout must be positive.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.wiki_base_url).is_err() {
            anyhow::bail!(
                "OSRS_WIKI_BASE_URL is not a valid URL: {}",
                self.wiki_base_url
            );
        }
        if reqwest::Url::parse(&self.openai_base_url).is_err() {
            anyhow::bail!("OPENAI_BASE_URL is not a valid URL: {}", self.openai_base_url);
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("WIKI_HTTP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    /// The Telegram token, or an error when it is missing or still the sample placeholder.
    pub fn require_bot_token(&self) -> Result<&str> {
        match self.bot_token.as_deref() {
            None => anyhow::bail!("BOT_TOKEN not set"),
            Some(PLACEHOLDER_BOT_TOKEN) => {
                anyhow::bail!("BOT_TOKEN still has the placeholder value; set your real token")
            }
            Some(token) => Ok(token),
        }
    }

    /// Whether the AI flow can run.
    pub fn ai_enabled(&self) -> bool {
        self.openai_api_key.is_some()
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
