//! # Wiki client
//!
//! Read-only access to a MediaWiki instance (by default the Old School RuneScape Wiki) through
//! its `api.php` endpoint: search, lead-section fetch, random page, recent changes.
//!
//! Also hosts the text helpers every caller of the API needs: [`normalize`] for turning HTML
//! fragments into display text, [`truncate`] for length caps, and [`page_url`] for canonical
//! article links.
//!
//! ## External interactions
//!
//! - **MediaWiki API**: `GET {base}/api.php` with `format=json`.

mod client;
mod error;
pub mod normalize;
mod types;
mod url;

pub use client::{MediaWikiClient, WikiApi, DEFAULT_WIKI_BASE_URL, SEARCH_LIMIT};
pub use error::{Result, WikiError};
pub use normalize::{normalize, truncate, ELLIPSIS};
pub use types::{ChangeEntry, PageContent, RandomPageRef, SearchResult, Section};
pub use url::{page_url, recent_changes_url, search_url};
