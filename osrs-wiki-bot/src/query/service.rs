//! [`WikiQueryService`]: the five user-facing flows over a [`WikiApi`] and an optional
//! [`Summarizer`].
//!
//! Every public flow returns a [`FormattedResponse`]; failures are converted at the flow boundary
//! and never propagate. Nothing is cached between calls.

use std::sync::Arc;

use summarizer::Summarizer;
use tracing::{error, info, instrument, warn};
use wiki_client::{normalize, page_url, recent_changes_url, search_url, truncate, PageContent, WikiApi};

use super::error::{Flow, QueryError};
use super::limits::{
    clamp_recent_limit, AI_WIKI_TEXT_CAP, COMMENT_CAP, INFO_SECTION_LIMIT, INFO_TEXT_CAP,
    RANDOM_TEXT_CAP, SEARCH_DISPLAY_LIMIT, SNIPPET_CAP,
};
use crate::core::{FormattedResponse, ResponseField};

type FlowResult = Result<FormattedResponse, QueryError>;

/// Orchestrates wiki lookups for one bot instance.
///
/// Holds the shared wiki client handle; safe to share across concurrent requests.
#[derive(Clone)]
pub struct WikiQueryService {
    wiki: Arc<dyn WikiApi>,
    summarizer: Option<Arc<dyn Summarizer>>,
    base_url: String,
}

impl WikiQueryService {
    /// `base_url` is the wiki root used for links, without trailing slash.
    pub fn new(wiki: Arc<dyn WikiApi>, base_url: impl Into<String>) -> Self {
        Self {
            wiki,
            summarizer: None,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Enables the AI flow.
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn ai_enabled(&self) -> bool {
        self.summarizer.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn finish(flow: Flow, result: FlowResult) -> FormattedResponse {
        match result {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    QueryError::Transport(e) => {
                        error!(flow = ?flow, error = %e, "flow failed: wiki transport")
                    }
                    QueryError::Upstream(e) => {
                        error!(flow = ?flow, error = %e, "flow failed: summarization")
                    }
                    other => info!(flow = ?flow, outcome = %other, "flow ended without result"),
                }
                err.into_response(flow)
            }
        }
    }

    // ---------- Shared steps ----------

    /// Search for `topic`, take the first hit as the match, and fetch its lead section.
    ///
    /// The wiki's own ranking is trusted: no re-ranking of hits.
    #[instrument(skip(self))]
    pub async fn resolve_topic(&self, topic: &str) -> Result<PageContent, QueryError> {
        let results = self.wiki.search(topic).await?;
        let best = results.into_iter().next().ok_or_else(|| QueryError::NotFound {
            subject: topic.to_string(),
        })?;
        self.fetch_content(&best.title).await
    }

    async fn fetch_content(&self, title: &str) -> Result<PageContent, QueryError> {
        self.wiki
            .get_page_content(title)
            .await?
            .ok_or_else(|| QueryError::ContentUnavailable {
                title: title.to_string(),
            })
    }

    // ---------- Search ----------

    /// Top hits for `query`, each with a cleaned snippet and a link.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> FormattedResponse {
        Self::finish(Flow::Search, self.try_search(query).await)
    }

    async fn try_search(&self, query: &str) -> FlowResult {
        let results = self.wiki.search(query).await?;
        if results.is_empty() {
            return Err(QueryError::NotFound {
                subject: query.to_string(),
            });
        }

        let mut response = FormattedResponse::ok(
            format!("Search Results for '{}'", query),
            format!("Found {} result(s) on the OSRS Wiki:", results.len()),
        )
        .with_url(search_url(&self.base_url, query))
        .with_footer("Follow the links to read more on the OSRS Wiki");

        for (i, result) in results.iter().take(SEARCH_DISPLAY_LIMIT).enumerate() {
            let snippet = truncate(&normalize(&result.snippet), SNIPPET_CAP);
            response = response.with_field(
                ResponseField::new(format!("{}. {}", i + 1, result.title), snippet)
                    .with_url(page_url(&self.base_url, &result.title)),
            );
        }
        Ok(response)
    }

    // ---------- Info ----------

    /// Lead section of the best match for `topic`, plus its first section headings.
    #[instrument(skip(self))]
    pub async fn info(&self, topic: &str) -> FormattedResponse {
        Self::finish(Flow::Info, self.try_info(topic).await)
    }

    async fn try_info(&self, topic: &str) -> FlowResult {
        let page = self.resolve_topic(topic).await?;
        let text = truncate(&normalize(&page.raw_html), INFO_TEXT_CAP);

        let mut response = FormattedResponse::ok(page.title.clone(), text)
            .with_url(page_url(&self.base_url, &page.title))
            .with_footer("Open the link to view the full page on the OSRS Wiki");

        if !page.sections.is_empty() {
            let headings: Vec<String> = page
                .sections
                .iter()
                .take(INFO_SECTION_LIMIT)
                .map(|s| format!("• {}", normalize(&s.title)))
                .collect();
            response = response.with_field(ResponseField::new("Sections", headings.join("\n")));
        }
        Ok(response)
    }

    // ---------- Random ----------

    /// Lead section of a random main-namespace page.
    #[instrument(skip(self))]
    pub async fn random(&self) -> FormattedResponse {
        Self::finish(Flow::Random, self.try_random().await)
    }

    async fn try_random(&self) -> FlowResult {
        let picked = self
            .wiki
            .get_random_page()
            .await?
            .ok_or_else(|| QueryError::NotFound {
                subject: "random page".to_string(),
            })?;
        let page = self.fetch_content(&picked.title).await?;
        let text = truncate(&normalize(&page.raw_html), RANDOM_TEXT_CAP);

        Ok(
            FormattedResponse::ok(format!("Random Page: {}", picked.title), text)
                .with_url(page_url(&self.base_url, &picked.title))
                .with_footer("This is a random page from the OSRS Wiki"),
        )
    }

    // ---------- Recent changes ----------

    /// Latest edits. `requested` is clamped with [`clamp_recent_limit`] before the wiki call.
    #[instrument(skip(self))]
    pub async fn recent_changes(&self, requested: i64) -> FormattedResponse {
        Self::finish(Flow::RecentChanges, self.try_recent_changes(requested).await)
    }

    async fn try_recent_changes(&self, requested: i64) -> FlowResult {
        let limit = clamp_recent_limit(requested);
        if i64::from(limit) != requested {
            info!(requested, limit, "recent changes limit clamped");
        }
        let changes = self.wiki.get_recent_changes(limit).await?;
        if changes.is_empty() {
            return Err(QueryError::NotFound {
                subject: "recent changes".to_string(),
            });
        }

        let mut response = FormattedResponse::ok(
            format!("Recent Changes ({} items)", changes.len()),
            "Recent edits to the OSRS Wiki:",
        )
        .with_url(recent_changes_url(&self.base_url))
        .with_footer("Follow a link to see the full article");

        for (i, change) in changes.iter().enumerate() {
            let user = change.user.as_deref().unwrap_or("Unknown");
            let when = change.timestamp.as_deref().unwrap_or("Unknown");
            // Only a hidden comment gets the placeholder; an empty edit summary stays empty.
            let comment = match change.comment.as_deref() {
                Some(raw) => truncate(&normalize(raw), COMMENT_CAP),
                None => "No comment".to_string(),
            };
            response = response.with_field(
                ResponseField::new(
                    format!("{}. {}", i + 1, change.title),
                    format!("Edited by: {}\nAt: {}\nComment: {}", user, when, comment),
                )
                .with_url(page_url(&self.base_url, &change.title)),
            );
        }
        Ok(response)
    }

    // ---------- AI ----------

    /// Model-written explanation of `topic`, grounded in the best match's lead section.
    ///
    /// Without a configured summarizer this returns immediately, before any wiki call.
    #[instrument(skip(self))]
    pub async fn ai_info(&self, topic: &str) -> FormattedResponse {
        Self::finish(Flow::Ai, self.try_ai_info(topic).await)
    }

    async fn try_ai_info(&self, topic: &str) -> FlowResult {
        let Some(summarizer) = self.summarizer.as_ref() else {
            warn!("AI flow requested but no summarization credential is configured");
            return Err(QueryError::ConfigurationMissing);
        };

        let page = self.resolve_topic(topic).await?;
        let wiki_text = truncate(&normalize(&page.raw_html), AI_WIKI_TEXT_CAP);
        let prompt = prompt::format_topic_prompt(topic, &wiki_text);

        let summary = summarizer
            .summarize(&prompt)
            .await
            .map_err(|e| QueryError::Upstream(format!("{:#}", e)))?;

        Ok(
            FormattedResponse::ok(format!("AI Analysis: {}", page.title), summary)
                .with_url(page_url(&self.base_url, &page.title))
                .with_footer("AI-powered analysis based on OSRS Wiki data"),
        )
    }
}
