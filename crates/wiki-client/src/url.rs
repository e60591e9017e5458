//! Canonical wiki links built from page titles.

/// Article URL for `title`: spaces become underscores, the rest is percent-encoded.
///
/// `base` is the wiki root without a trailing slash, e.g. `https://oldschool.runescape.wiki`.
pub fn page_url(base: &str, title: &str) -> String {
    let underscored = title.replace(' ', "_");
    format!("{}/{}", base, urlencoding::encode(&underscored))
}

/// Full-text search page for `query`.
pub fn search_url(base: &str, query: &str) -> String {
    format!("{}/Special:Search?search={}", base, urlencoding::encode(query))
}

/// The wiki's recent changes page.
pub fn recent_changes_url(base: &str) -> String {
    format!("{}/Special:RecentChanges", base)
}
