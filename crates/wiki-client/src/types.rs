//! Request-scoped values produced by [`crate::WikiApi`].
//!
//! Every value carries the page `title` exactly as the wiki returned it; [`crate::page_url`]
//! builds the canonical link from it.

use serde::{Deserialize, Serialize};

/// One hit from `list=search`. `snippet` is raw HTML with search-match highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

/// A section heading from `prop=sections`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// MediaWiki section index. A string on the wire (`"1"`, or `"T-1"` for transcluded sections).
    pub index: String,
    /// Heading text; may contain inline markup.
    pub title: String,
}

/// Lead section (section 0) of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub raw_html: String,
    pub sections: Vec<Section>,
}

/// One entry from `list=random`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomPageRef {
    pub id: u64,
    pub title: String,
}

/// One entry from `list=recentchanges`.
///
/// `user` and `comment` are absent on the wire when the edit is suppressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub title: String,
    #[serde(default)]
    pub user: Option<String>,
    /// ISO-8601, e.g. `2024-05-01T12:00:00Z`.
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}
