//! Display caps and the recent-changes limit rule.

/// Search hits shown per response.
pub const SEARCH_DISPLAY_LIMIT: usize = 3;
/// Characters of snippet text per search hit.
pub const SNIPPET_CAP: usize = 200;
/// Characters of lead-section text in an info response.
pub const INFO_TEXT_CAP: usize = 1500;
/// Section headings listed in an info response.
pub const INFO_SECTION_LIMIT: usize = 5;
/// Characters of lead-section text in a random-page response.
pub const RANDOM_TEXT_CAP: usize = 1000;
/// Characters of edit comment per recent change.
pub const COMMENT_CAP: usize = 100;
/// Characters of wiki text embedded in the summarization prompt.
pub const AI_WIKI_TEXT_CAP: usize = 2000;

/// Largest recent-changes limit honoured.
pub const RECENT_MAX_LIMIT: u32 = 10;
/// Limit used when the caller asks for fewer than one change.
pub const RECENT_DEFAULT_LIMIT: u32 = 5;

/// Above [`RECENT_MAX_LIMIT`] becomes the max; below 1 becomes [`RECENT_DEFAULT_LIMIT`], not 1.
pub fn clamp_recent_limit(requested: i64) -> u32 {
    if requested > i64::from(RECENT_MAX_LIMIT) {
        RECENT_MAX_LIMIT
    } else if requested < 1 {
        RECENT_DEFAULT_LIMIT
    } else {
        requested as u32
    }
}
