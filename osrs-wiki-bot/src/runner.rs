//! Entry points behind the CLI: build the query service from config, then run the bot, the
//! startup check, or a single query.

use std::sync::Arc;

use anyhow::{Context, Result};
use summarizer::{OpenAISummarizer, Summarizer};
use tracing::{info, instrument, warn};
use wiki_client::{MediaWikiClient, WikiApi};

use crate::cli::QueryCommand;
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot, FormattedResponse};
use crate::dispatch::CommandDispatcher;
use crate::query::WikiQueryService;
use crate::render::render;
use crate::telegram::{build_teloxide_bot, run_repl, TelegramBotAdapter};

/// Wiki client (one shared HTTP session) plus the summarizer when a key is configured.
pub fn build_query_service(config: &BotConfig) -> Result<WikiQueryService> {
    let wiki: Arc<dyn WikiApi> = Arc::new(
        MediaWikiClient::new(config.wiki_base_url.clone(), config.http_timeout())
            .context("Failed to build wiki HTTP client")?,
    );
    let mut service = WikiQueryService::new(wiki, config.wiki_base_url.clone());

    match &config.openai_api_key {
        Some(key) => {
            let summarizer: Arc<dyn Summarizer> = Arc::new(
                OpenAISummarizer::with_base_url(
                    key.clone(),
                    config.openai_base_url.clone(),
                    config.http_timeout(),
                )?
                .with_model(config.ai_model.clone()),
            );
            service = service.with_summarizer(summarizer);
        }
        None => warn!("OPENAI_API_KEY not set; /ai is disabled"),
    }
    Ok(service)
}

/// Main entry: validate config, init logging, build the service, then run the REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    let token = config.require_bot_token()?.to_string();
    init_tracing(&config.log_file)?;

    info!(
        wiki_base_url = %config.wiki_base_url,
        ai_enabled = config.ai_enabled(),
        ai_model = %config.ai_model,
        "Initializing bot"
    );

    let service = Arc::new(build_query_service(&config)?);
    let teloxide_bot = build_teloxide_bot(&token, config.telegram_api_url.as_deref());
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let dispatcher = CommandDispatcher::new(service, bot);

    info!("Bot started successfully");
    run_repl(teloxide_bot, dispatcher).await
}

/// Startup diagnostics, printed to stdout. Fails when config is invalid or the wiki is
/// unreachable.
pub async fn run_check(config: BotConfig) -> Result<()> {
    config.validate()?;
    println!("Configuration: OK");

    match config.require_bot_token() {
        Ok(_) => println!("BOT_TOKEN: set"),
        Err(e) => println!("BOT_TOKEN: {} (needed for `run`)", e),
    }
    if config.ai_enabled() {
        println!("AI: enabled (model {})", config.ai_model);
    } else {
        println!("AI: disabled (set OPENAI_API_KEY to enable /ai)");
    }

    let wiki = MediaWikiClient::new(config.wiki_base_url.clone(), config.http_timeout())
        .context("Failed to build wiki HTTP client")?;
    let hits = wiki
        .search("test")
        .await
        .with_context(|| format!("Wiki at {} is not reachable", config.wiki_base_url))?;
    println!(
        "Wiki: reachable at {} ({} result(s) for 'test')",
        config.wiki_base_url,
        hits.len()
    );
    Ok(())
}

/// Runs one flow through `service`.
pub async fn execute_query(service: &WikiQueryService, query: &QueryCommand) -> FormattedResponse {
    match query {
        QueryCommand::Search { query } => service.search(&query.join(" ")).await,
        QueryCommand::Info { topic } => service.info(&topic.join(" ")).await,
        QueryCommand::Random => service.random().await,
        QueryCommand::Recent { limit } => service.recent_changes(*limit).await,
        QueryCommand::Ai { topic } => service.ai_info(&topic.join(" ")).await,
    }
}

/// Runs one flow and prints the reply. Exit status stays zero for not-found style outcomes; they
/// are answers, not failures.
pub async fn run_query(config: BotConfig, query: QueryCommand, json: bool) -> Result<()> {
    config.validate()?;
    let service = build_query_service(&config)?;
    let response = execute_query(&service, &query).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", render(&response));
    }
    Ok(())
}
