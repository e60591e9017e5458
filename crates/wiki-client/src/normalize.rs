//! HTML fragment → display text.
//!
//! MediaWiki hands back rendered HTML (search snippets with `<span class="searchmatch">`,
//! parsed lead sections, edit comments). [`normalize`] turns any of those into one line of
//! plain text: tags removed, entities decoded, whitespace collapsed, outer whitespace trimmed.
//!
//! Decoding can reveal new markup (`&lt;b&gt;` → `<b>`) or new entities (`&amp;amp;` →
//! `&amp;`), so the three passes repeat until the text is stable. The result is a fixed
//! point, which is what makes `normalize(normalize(x)) == normalize(x)` hold.

use regex::Regex;
use scraper::Html;
use std::sync::OnceLock;

/// Ellipsis marker appended by [`truncate`].
pub const ELLIPSIS: &str = "...";

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

fn whitespace_pattern() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Decodes every HTML character reference (named, decimal, hex) by letting html5ever parse the
/// text as a fragment and reading back its text nodes.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    Html::parse_fragment(text)
        .root_element()
        .text()
        .collect()
}

fn single_pass(text: &str) -> String {
    let stripped = tag_pattern().replace_all(text, "");
    let decoded = decode_entities(&stripped);
    whitespace_pattern()
        .replace_all(&decoded, " ")
        .trim()
        .to_string()
}

/// Strips markup from an HTML fragment and returns trimmed, single-spaced plain text.
///
/// Never fails; an empty or markup-only fragment yields an empty string.
pub fn normalize(html_fragment: &str) -> String {
    let mut current = single_pass(html_fragment);
    loop {
        let next = single_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Keeps the first `cap` characters and appends [`ELLIPSIS`] when `text` is longer than `cap`.
///
/// Length is counted in `char`s so multi-byte text is never split mid-character.
pub fn truncate(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        Some((byte_end, _)) => format!("{}{}", &text[..byte_end], ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;
