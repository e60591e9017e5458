//! mockall doubles for the wiki API and the summarizer, plus fixture builders.

use async_trait::async_trait;
use mockall::mock;
use summarizer::Summarizer;
use wiki_client::{
    ChangeEntry, PageContent, RandomPageRef, Result as WikiResult, SearchResult, Section, WikiApi,
};

mock! {
    pub Wiki {}

    #[async_trait]
    impl WikiApi for Wiki {
        async fn search(&self, query: &str) -> WikiResult<Vec<SearchResult>>;
        async fn get_page_content(&self, title: &str) -> WikiResult<Option<PageContent>>;
        async fn get_random_page(&self) -> WikiResult<Option<RandomPageRef>>;
        async fn get_recent_changes(&self, limit: u32) -> WikiResult<Vec<ChangeEntry>>;
    }
}

mock! {
    pub AiSummarizer {}

    #[async_trait]
    impl Summarizer for AiSummarizer {
        async fn summarize(&self, prompt: &str) -> anyhow::Result<String>;
    }
}

pub const BASE: &str = "https://oldschool.runescape.wiki";

pub fn hit(title: &str, snippet: &str) -> SearchResult {
    SearchResult {
        title: title.to_string(),
        snippet: snippet.to_string(),
    }
}

pub fn page(title: &str, raw_html: &str, headings: &[&str]) -> PageContent {
    PageContent {
        title: title.to_string(),
        raw_html: raw_html.to_string(),
        sections: headings
            .iter()
            .enumerate()
            .map(|(i, h)| Section {
                index: (i + 1).to_string(),
                title: h.to_string(),
            })
            .collect(),
    }
}

pub fn change(title: &str, user: Option<&str>, comment: Option<&str>) -> ChangeEntry {
    ChangeEntry {
        title: title.to_string(),
        user: user.map(String::from),
        timestamp: Some("2024-05-01T12:00:00Z".to_string()),
        comment: comment.map(String::from),
    }
}
