//! [`WikiApi`] trait and its reqwest-backed implementation.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::error::{Result, WikiError};
use crate::types::{ChangeEntry, PageContent, RandomPageRef, SearchResult, Section};

/// Wiki used when no base URL is configured.
pub const DEFAULT_WIKI_BASE_URL: &str = "https://oldschool.runescape.wiki";

/// Upper bound on search hits requested and returned.
pub const SEARCH_LIMIT: usize = 5;

/// Main (article) namespace.
const MAIN_NAMESPACE: &str = "0";

const USER_AGENT: &str = concat!(
    "osrs-wiki-bot/",
    env!("CARGO_PKG_VERSION"),
    " (MediaWiki API client)"
);

/// Read operations against a MediaWiki instance.
///
/// Calls are independent: nothing a call does is visible to the next one except through the
/// values a caller passes along. An empty result is `Ok`; only transport, status, and decode
/// failures are `Err`.
#[async_trait]
pub trait WikiApi: Send + Sync {
    /// Full-text search in the main namespace, at most [`SEARCH_LIMIT`] hits in wiki ranking order.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;

    /// Lead section (section 0) of `title`. `None` when the wiki has no such page.
    async fn get_page_content(&self, title: &str) -> Result<Option<PageContent>>;

    /// One random main-namespace page.
    async fn get_random_page(&self) -> Result<Option<RandomPageRef>>;

    /// Latest main-namespace edits. `limit` is sent as-is.
    async fn get_recent_changes(&self, limit: u32) -> Result<Vec<ChangeEntry>>;
}

// ---------- Wire format (action=query / action=parse, format=json) ----------

#[derive(Debug, Deserialize)]
struct QueryResponse<Q> {
    query: Option<Q>,
}

#[derive(Debug, Deserialize)]
struct SearchList {
    #[serde(default)]
    search: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct RandomList {
    #[serde(default)]
    random: Vec<RandomPageRef>,
}

#[derive(Debug, Deserialize)]
struct RecentChangesList {
    #[serde(default)]
    recentchanges: Vec<ChangeEntry>,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    title: String,
    text: ParsedText,
    #[serde(default)]
    sections: Vec<ParsedSection>,
}

#[derive(Debug, Deserialize)]
struct ParsedText {
    #[serde(rename = "*")]
    html: String,
}

#[derive(Debug, Deserialize)]
struct ParsedSection {
    index: String,
    line: String,
}

impl From<ParsedPage> for PageContent {
    fn from(page: ParsedPage) -> Self {
        Self {
            title: page.title,
            raw_html: page.text.html,
            sections: page
                .sections
                .into_iter()
                .map(|s| Section {
                    index: s.index,
                    title: s.line,
                })
                .collect(),
        }
    }
}

/// MediaWiki client over one pooled HTTP session.
///
/// Cloning is cheap and every clone shares the same connection pool, so a single instance can
/// serve any number of in-flight requests. The pool is released when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct MediaWikiClient {
    http: Client,
    base_url: String,
    api_url: String,
}

impl MediaWikiClient {
    /// Builds a client for `base_url` (e.g. `https://oldschool.runescape.wiki`) whose requests
    /// give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Builds a client around an existing reqwest client.
    pub fn with_http_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let api_url = format!("{}/api.php", base_url);
        Self {
            http,
            base_url,
            api_url,
        }
    }

    /// Wiki root, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let response = self.http.get(&self.api_url).query(params).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(WikiError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn log_failure(operation: &str, err: &WikiError) {
    error!(operation = %operation, error = %err, "wiki API call failed");
}

#[async_trait]
impl WikiApi for MediaWikiClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let limit = SEARCH_LIMIT.to_string();
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", limit.as_str()),
            ("srnamespace", MAIN_NAMESPACE),
        ];
        let response: QueryResponse<SearchList> = self
            .get_json(&params)
            .await
            .inspect_err(|e| log_failure("search", e))?;
        let mut results = response.query.map(|q| q.search).unwrap_or_default();
        results.truncate(SEARCH_LIMIT);
        info!(count = results.len(), "step: wiki search done");
        Ok(results)
    }

    #[instrument(skip(self))]
    async fn get_page_content(&self, title: &str) -> Result<Option<PageContent>> {
        let params = [
            ("action", "parse"),
            ("format", "json"),
            ("page", title),
            ("prop", "text|sections"),
            ("section", "0"),
        ];
        let response: ParseResponse = self
            .get_json(&params)
            .await
            .inspect_err(|e| log_failure("get_page_content", e))?;
        if let Some(err) = response.error {
            debug!(code = %err.code, info = %err.info, "wiki parse returned an API error");
        }
        let content = response.parse.map(PageContent::from);
        info!(found = content.is_some(), "step: wiki page content done");
        Ok(content)
    }

    #[instrument(skip(self))]
    async fn get_random_page(&self) -> Result<Option<RandomPageRef>> {
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("list", "random"),
            ("rnnamespace", MAIN_NAMESPACE),
            ("rnlimit", "1"),
        ];
        let response: QueryResponse<RandomList> = self
            .get_json(&params)
            .await
            .inspect_err(|e| log_failure("get_random_page", e))?;
        let page = response.query.and_then(|q| q.random.into_iter().next());
        info!(found = page.is_some(), "step: wiki random page done");
        Ok(page)
    }

    #[instrument(skip(self))]
    async fn get_recent_changes(&self, limit: u32) -> Result<Vec<ChangeEntry>> {
        let limit = limit.to_string();
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("list", "recentchanges"),
            ("rcnamespace", MAIN_NAMESPACE),
            ("rclimit", limit.as_str()),
            ("rcprop", "title|timestamp|user|comment"),
        ];
        let response: QueryResponse<RecentChangesList> = self
            .get_json(&params)
            .await
            .inspect_err(|e| log_failure("get_recent_changes", e))?;
        let changes = response.query.map(|q| q.recentchanges).unwrap_or_default();
        info!(count = changes.len(), "step: wiki recent changes done");
        Ok(changes)
    }
}
